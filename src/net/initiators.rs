//! Login, registration and Reddit-link submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms call these with their `Initiator` and a freshly built input struct.
//! Each accepted submission makes exactly one `AuthApi` call. Only a settled,
//! non-stale login mutates the `SessionStore`; the other two report where the
//! user should go next.
//!
//! ERROR HANDLING
//! ==============
//! Transport detail is logged at `warn` and replaced by the generic
//! "<action> failed" message. `Ok(None)` means the response arrived after the
//! view was dismissed and was dropped.

#[cfg(test)]
#[path = "initiators_test.rs"]
mod initiators_test;

use super::api::{ApiError, AuthApi};
use super::types::{AccountRegistration, LoginCredentials, RedditLinkCredentials, ValidationError};
use crate::app::AppRoute;
use crate::state::request::{Action, Initiator, SubmitError};
use crate::state::session::{BearerToken, SessionStore};

/// What the view should do after a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    CloseModal,
    Navigate(AppRoute),
}

fn transport_error(action: Action, source: ApiError) -> SubmitError {
    log::warn!("{action} request failed: {source}");
    SubmitError::Transport { action, source }
}

/// Submit the login form; on success the token becomes the session credential.
///
/// # Errors
///
/// `Busy`, `Dismissed`, a validation error, or a transport error. The session is untouched
/// in every error case.
pub async fn submit_login<A: AuthApi>(
    api: &A,
    initiator: &Initiator,
    session: &SessionStore,
    credentials: LoginCredentials,
) -> Result<Option<NextStep>, SubmitError> {
    let (ticket, ()) = initiator.begin(|| credentials.validate())?;
    log::debug!("login dispatched for {}", credentials.username);

    let result = match api.login(&credentials).await {
        Ok(resp) => BearerToken::new(resp.access_token)
            .ok_or_else(|| transport_error(Action::Login, ApiError::Decode("empty access_token".to_owned()))),
        Err(source) => Err(transport_error(Action::Login, source)),
    };
    drop(credentials);

    let Some(result) = initiator.settle(ticket, result) else {
        return Ok(None);
    };
    session.login(result?);
    Ok(Some(NextStep::CloseModal))
}

/// Submit the create-account form; on success the user returns to landing.
///
/// # Errors
///
/// `Busy`, `Dismissed`, a validation error, or a transport error.
pub async fn submit_registration<A: AuthApi>(
    api: &A,
    initiator: &Initiator,
    registration: AccountRegistration,
) -> Result<Option<NextStep>, SubmitError> {
    let (ticket, ()) = initiator.begin(|| registration.validate())?;
    log::debug!("registration dispatched for {}", registration.username);

    let result = api
        .register(&registration)
        .await
        .map_err(|source| transport_error(Action::Registration, source));
    drop(registration);

    let Some(result) = initiator.settle(ticket, result) else {
        return Ok(None);
    };
    result?;
    log::info!("account registered");
    Ok(Some(NextStep::Navigate(AppRoute::Landing)))
}

/// Submit the Reddit-link form using the current session token.
///
/// # Errors
///
/// `Busy`, `Dismissed`, a validation error (including `NotAuthenticated` when there is no
/// token, in which case no request is made), or a transport error.
pub async fn submit_reddit_link<A: AuthApi>(
    api: &A,
    initiator: &Initiator,
    session: &SessionStore,
    credentials: RedditLinkCredentials,
) -> Result<Option<NextStep>, SubmitError> {
    let (ticket, token) = initiator.begin(|| {
        credentials.validate()?;
        session.token().ok_or(ValidationError::NotAuthenticated)
    })?;
    log::debug!("reddit link dispatched for {}", credentials.username);

    let result = api
        .link_reddit(&token, &credentials)
        .await
        .map_err(|source| transport_error(Action::RedditLink, source));
    drop(credentials);

    let Some(result) = initiator.settle(ticket, result) else {
        return Ok(None);
    };
    result?;
    log::info!("reddit account linked");
    Ok(Some(NextStep::Navigate(AppRoute::Landing)))
}
