//! Submission lifecycle shared by the login, registration and Reddit-link forms.
//!
//! DESIGN
//! ======
//! `RequestState` is an explicit `Idle` / `Pending` / `Settled` variant. The
//! `Initiator` owns it and enforces the two rules the forms rely on: at most
//! one request in flight, and no state change once the owning view has been
//! dismissed. Each accepted submission gets a `Ticket`; only the ticket that is
//! still current may settle the request.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::api::ApiError;
use crate::net::types::ValidationError;

/// Which backend action a submission performs. Used in user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Login,
    Registration,
    RedditLink,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "Login",
            Self::Registration => "Registration",
            Self::RedditLink => "Reddit authentication",
        })
    }
}

/// Why a submission did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{action} failed")]
    Transport {
        action: Action,
        #[source]
        source: ApiError,
    },
    #[error("a request is already in flight")]
    Busy,
    #[error("the form was closed")]
    Dismissed,
}

/// Lifecycle of one initiator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Settled(Result<(), SubmitError>),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            Self::Settled(Err(err)) => Some(err),
            _ => None,
        }
    }
}

/// Proof that a submission was accepted; required to settle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

type StateObserver = Arc<dyn Fn(&RequestState) + Send + Sync>;

#[derive(Default)]
struct Slot {
    state: RequestState,
    generation: u64,
    dismissed: bool,
}

/// Owner of one form's `RequestState`.
///
/// Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct Initiator {
    slot: Arc<Mutex<Slot>>,
    observer: Option<StateObserver>,
}

impl Initiator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an initiator that reports every state transition to `observer`.
    pub fn observed<F>(observer: F) -> Self
    where
        F: Fn(&RequestState) + Send + Sync + 'static,
    {
        Self { slot: Arc::default(), observer: Some(Arc::new(observer)) }
    }

    pub fn state(&self) -> RequestState {
        self.lock().state.clone()
    }

    /// Accept a submission and move to `Pending`.
    ///
    /// `validate` runs only when no request is in flight; its output is handed
    /// back alongside the ticket.
    ///
    /// # Errors
    ///
    /// `Dismissed` once the owning view is gone, `Busy` while a request is
    /// pending (state untouched in both cases), or the validation error (state
    /// becomes `Settled(Err)`).
    pub fn begin<T>(&self, validate: impl FnOnce() -> Result<T, ValidationError>) -> Result<(Ticket, T), SubmitError> {
        let (outcome, next) = {
            let mut slot = self.lock();
            if slot.dismissed {
                return Err(SubmitError::Dismissed);
            }
            if slot.state.is_pending() {
                return Err(SubmitError::Busy);
            }
            match validate() {
                Ok(value) => {
                    slot.generation += 1;
                    slot.state = RequestState::Pending;
                    (Ok((Ticket(slot.generation), value)), slot.state.clone())
                }
                Err(err) => {
                    let err = SubmitError::from(err);
                    slot.state = RequestState::Settled(Err(err.clone()));
                    (Err(err), slot.state.clone())
                }
            }
        };
        self.emit(&next);
        outcome
    }

    /// Record the response for `ticket`.
    ///
    /// Returns `None` when the response is stale: the view was dismissed or
    /// the ticket is no longer the pending one. Stale responses change nothing.
    pub fn settle<T>(&self, ticket: Ticket, result: Result<T, SubmitError>) -> Option<Result<T, SubmitError>> {
        let next = {
            let mut slot = self.lock();
            if slot.dismissed || !slot.state.is_pending() || slot.generation != ticket.0 {
                log::debug!("discarding late response for ticket {}", ticket.0);
                return None;
            }
            slot.state = RequestState::Settled(result.as_ref().map(|_| ()).map_err(Clone::clone));
            slot.state.clone()
        };
        self.emit(&next);
        Some(result)
    }

    /// Mark the owning view as gone. Later responses are dropped silently and
    /// no further submissions are accepted.
    pub fn dismiss(&self) {
        let mut slot = self.lock();
        slot.dismissed = true;
        slot.state = RequestState::Idle;
    }

    fn emit(&self, state: &RequestState) {
        if let Some(observer) = &self.observer {
            observer(state);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Initiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.lock();
        f.debug_struct("Initiator")
            .field("state", &slot.state)
            .field("dismissed", &slot.dismissed)
            .finish_non_exhaustive()
    }
}
