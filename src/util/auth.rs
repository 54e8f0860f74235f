//! Route guarding and session-reactive UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the navbar both derive what they show from the
//! `SessionStore`. They subscribe to it rather than caching a decision, so a
//! logout while a protected view is mounted sends the user back to landing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::app::AppRoute;
use crate::state::session::{Session, SessionStore, Subscription};

/// Outcome of guarding one navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Render `destination` when it is public or the session is authenticated;
/// otherwise redirect to the landing route.
pub fn guard(session: &Session, destination: AppRoute) -> RenderDecision {
    if !destination.is_protected() || session.is_authenticated() {
        RenderDecision::Render(destination)
    } else {
        RenderDecision::Redirect(AppRoute::Landing)
    }
}

/// A guard that stays live while its view is mounted.
///
/// Re-evaluates on every session change and reports decision changes to the
/// callback. Dropping it unmounts the guard.
pub struct GuardedRoute {
    destination: AppRoute,
    decision: Arc<Mutex<RenderDecision>>,
    _subscription: Subscription,
}

impl GuardedRoute {
    pub fn mount<F>(store: &SessionStore, destination: AppRoute, on_change: F) -> Self
    where
        F: Fn(RenderDecision) + Send + Sync + 'static,
    {
        let decision = Arc::new(Mutex::new(guard(&store.read(), destination)));
        let current = Arc::clone(&decision);
        let subscription = store.subscribe(move |session| {
            let next = guard(session, destination);
            let changed = {
                let mut current = current.lock().unwrap_or_else(PoisonError::into_inner);
                let changed = *current != next;
                *current = next;
                changed
            };
            if changed {
                log::debug!("guard for {} now {next:?}", destination.path());
                on_change(next);
            }
        });
        Self { destination, decision, _subscription: subscription }
    }

    pub fn decision(&self) -> RenderDecision {
        *self.decision.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for GuardedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardedRoute")
            .field("destination", &self.destination)
            .field("decision", &self.decision())
            .finish()
    }
}

/// Reactive view of the session for the calling component.
///
/// The subscription is released when the component is cleaned up.
pub fn use_session(store: &SessionStore) -> ReadSignal<Session> {
    let (session, set_session) = signal(store.read());
    let subscription = store.subscribe(move |snapshot| set_session.set(snapshot.clone()));
    on_cleanup(move || drop(subscription));
    session
}
