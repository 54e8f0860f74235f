//! REST calls to the auth backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpAuthApi` returns a network error without doing I/O,
//! since these endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError`. Initiators turn it into the generic
//! per-action message the user sees; the detail only goes to the log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AccountRegistration, LoginCredentials, LoginResponse, RedditLinkCredentials};
use crate::config::ApiConfig;
use crate::state::session::BearerToken;

/// Transport-level failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// The three backend contracts the client relies on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login` with a form-encoded body.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/register` with a JSON body.
    async fn register(&self, registration: &AccountRegistration) -> Result<(), ApiError>;

    /// `POST /reddit/auth` with a JSON body, authenticated with `token`.
    async fn link_reddit(&self, token: &BearerToken, credentials: &RedditLinkCredentials) -> Result<(), ApiError>;
}

/// Map an HTTP status to success (2xx) or `ApiError::Status`.
pub(crate) fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Browser implementation of `AuthApi`.
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "csr")]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn expect_json_success(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    check_status(resp.status())?;
    resp.json::<serde_json::Value>()
        .await
        .map(|_| ())
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let form = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
            for (key, value) in credentials.form_pairs() {
                form.append(key, value);
            }
            let resp = gloo_net::http::Request::post(&self.config.login_url())
                .body(form)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            check_status(resp.status())?;
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn register(&self, registration: &AccountRegistration) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.register_url())
                .json(registration)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            expect_json_success(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            Err(unavailable())
        }
    }

    async fn link_reddit(&self, token: &BearerToken, credentials: &RedditLinkCredentials) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.reddit_auth_url())
                .header("Authorization", &token.authorization_header())
                .json(credentials)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            expect_json_success(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, credentials);
            Err(unavailable())
        }
    }
}
