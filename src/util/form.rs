//! Shared helpers for the submit-and-await forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::state::request::RequestState;

/// Button label for the current request state.
pub fn submit_label(state: &RequestState, idle: &'static str, pending: &'static str) -> &'static str {
    if state.is_pending() { pending } else { idle }
}

/// User-visible error for a failed submission, if any.
pub fn error_message(state: &RequestState) -> Option<String> {
    state.error().map(ToString::to_string)
}
