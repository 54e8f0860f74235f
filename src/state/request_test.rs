use super::*;

fn ok() -> Result<(), ValidationError> {
    Ok(())
}

fn transport(status: u16) -> SubmitError {
    SubmitError::Transport { action: Action::Login, source: ApiError::Status(status) }
}

// =============================================================
// RequestState
// =============================================================

#[test]
fn initiator_starts_idle() {
    assert_eq!(Initiator::new().state(), RequestState::Idle);
}

#[test]
fn request_state_error_only_for_failed_settle() {
    assert_eq!(RequestState::Idle.error(), None);
    assert_eq!(RequestState::Settled(Ok(())).error(), None);
    assert_eq!(RequestState::Settled(Err(SubmitError::Busy)).error(), Some(&SubmitError::Busy));
}

// =============================================================
// begin / settle
// =============================================================

#[test]
fn begin_moves_to_pending() {
    let initiator = Initiator::new();
    let (_, value) = initiator.begin(|| Ok(7)).unwrap();
    assert_eq!(value, 7);
    assert!(initiator.state().is_pending());
}

#[test]
fn begin_while_pending_is_rejected() {
    let initiator = Initiator::new();
    initiator.begin(ok).unwrap();
    assert_eq!(initiator.begin(ok).unwrap_err(), SubmitError::Busy);
    assert!(initiator.state().is_pending());
}

#[test]
fn begin_while_pending_skips_validation() {
    let initiator = Initiator::new();
    initiator.begin(ok).unwrap();
    let result = initiator.begin(|| -> Result<(), ValidationError> { panic!("validated while pending") });
    assert_eq!(result.unwrap_err(), SubmitError::Busy);
}

#[test]
fn validation_failure_settles_without_pending() {
    let initiator = Initiator::new();
    let err = initiator
        .begin(|| -> Result<(), ValidationError> { Err(ValidationError::MissingField("username")) })
        .unwrap_err();
    assert_eq!(err, SubmitError::Validation(ValidationError::MissingField("username")));
    assert_eq!(initiator.state().error(), Some(&err));
}

#[test]
fn settle_records_result() {
    let initiator = Initiator::new();
    let (ticket, ()) = initiator.begin(ok).unwrap();
    assert_eq!(initiator.settle(ticket, Ok("token")), Some(Ok("token")));
    assert_eq!(initiator.state(), RequestState::Settled(Ok(())));
}

#[test]
fn failed_settle_allows_resubmission() {
    let initiator = Initiator::new();
    let (ticket, ()) = initiator.begin(ok).unwrap();
    initiator.settle::<()>(ticket, Err(transport(401)));
    assert_eq!(initiator.state().error(), Some(&transport(401)));
    assert!(initiator.begin(ok).is_ok());
}

#[test]
fn stale_ticket_is_discarded() {
    let initiator = Initiator::new();
    let (first, ()) = initiator.begin(ok).unwrap();
    initiator.settle(first, Ok(()));
    let (_second, ()) = initiator.begin(ok).unwrap();
    assert_eq!(initiator.settle(first, Ok(())), None);
    assert!(initiator.state().is_pending());
}

#[test]
fn dismissed_initiator_drops_late_response() {
    let initiator = Initiator::new();
    let (ticket, ()) = initiator.begin(ok).unwrap();
    initiator.dismiss();
    assert_eq!(initiator.settle(ticket, Ok(())), None);
    assert_eq!(initiator.state(), RequestState::Idle);
}

#[test]
fn dismissed_initiator_rejects_new_submissions() {
    let initiator = Initiator::new();
    initiator.dismiss();
    assert_eq!(initiator.begin(ok).unwrap_err(), SubmitError::Dismissed);
    assert_eq!(initiator.state(), RequestState::Idle);
}

// =============================================================
// Observer
// =============================================================

#[test]
fn observer_sees_each_transition() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_obs = Arc::clone(&seen);
    let initiator = Initiator::observed(move |s| seen_obs.lock().unwrap().push(s.clone()));

    let (ticket, ()) = initiator.begin(ok).unwrap();
    initiator.settle::<()>(ticket, Err(transport(500)));

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![RequestState::Pending, RequestState::Settled(Err(transport(500)))]);
}

#[test]
fn observer_is_silent_for_discarded_responses() {
    let calls = Arc::new(Mutex::new(0));
    let calls_obs = Arc::clone(&calls);
    let initiator = Initiator::observed(move |_| *calls_obs.lock().unwrap() += 1);

    let (ticket, ()) = initiator.begin(ok).unwrap();
    initiator.dismiss();
    initiator.settle(ticket, Ok(()));
    assert_eq!(*calls.lock().unwrap(), 1);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn transport_errors_show_generic_message() {
    let err = SubmitError::Transport { action: Action::Registration, source: ApiError::Status(409) };
    assert_eq!(err.to_string(), "Registration failed");
    let err = SubmitError::Transport { action: Action::RedditLink, source: ApiError::Network("offline".to_owned()) };
    assert_eq!(err.to_string(), "Reddit authentication failed");
}

#[test]
fn validation_errors_pass_through_message() {
    let err = SubmitError::from(ValidationError::MissingField("email"));
    assert_eq!(err.to_string(), "email is required");
}
