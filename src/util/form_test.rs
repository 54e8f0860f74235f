use super::*;
use crate::net::api::ApiError;
use crate::net::types::ValidationError;
use crate::state::request::{Action, SubmitError};

#[test]
fn submit_label_switches_while_pending() {
    assert_eq!(submit_label(&RequestState::Idle, "Login", "Logging in..."), "Login");
    assert_eq!(submit_label(&RequestState::Pending, "Login", "Logging in..."), "Logging in...");
    assert_eq!(submit_label(&RequestState::Settled(Ok(())), "Login", "Logging in..."), "Login");
}

#[test]
fn error_message_hides_transport_detail() {
    let state = RequestState::Settled(Err(SubmitError::Transport {
        action: Action::Login,
        source: ApiError::Status(401),
    }));
    assert_eq!(error_message(&state).as_deref(), Some("Login failed"));
}

#[test]
fn error_message_shows_validation_problem() {
    let state = RequestState::Settled(Err(SubmitError::Validation(ValidationError::InvalidEmail)));
    assert_eq!(error_message(&state).as_deref(), Some("enter a valid email address"));
}

#[test]
fn error_message_absent_without_failure() {
    assert_eq!(error_message(&RequestState::Pending), None);
    assert_eq!(error_message(&RequestState::Settled(Ok(()))), None);
}
