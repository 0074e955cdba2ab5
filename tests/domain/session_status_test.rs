use std::str::FromStr;

use voxhire::domain::SessionStatus;

#[test]
fn given_status_strings_then_round_trip_through_from_str() {
    for status in [
        SessionStatus::InProgress,
        SessionStatus::Completed,
        SessionStatus::Hired,
        SessionStatus::Reviewed,
        SessionStatus::Rejected,
    ] {
        assert_eq!(SessionStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn given_unknown_status_string_then_from_str_fails() {
    assert!(SessionStatus::from_str("archived").is_err());
}

#[test]
fn given_review_outcomes_then_only_terminal_review_states_qualify() {
    assert!(SessionStatus::Hired.is_review_outcome());
    assert!(SessionStatus::Reviewed.is_review_outcome());
    assert!(SessionStatus::Rejected.is_review_outcome());
    assert!(!SessionStatus::InProgress.is_review_outcome());
    assert!(!SessionStatus::Completed.is_review_outcome());
}
