use voxhire::domain::{
    ExperienceLevel, InterviewSession, SessionStatus, TurnRole, DEFAULT_QUESTION_BUDGET,
};

fn session() -> InterviewSession {
    InterviewSession::new(
        "Jane Doe".to_string(),
        "Backend Engineer".to_string(),
        ExperienceLevel::Mid,
    )
}

#[test]
fn given_new_session_then_starts_in_progress_with_empty_history() {
    let session = session();

    assert_eq!(session.status, SessionStatus::InProgress);
    assert_eq!(session.question_number, 0);
    assert_eq!(session.question_budget, DEFAULT_QUESTION_BUDGET);
    assert!(session.turns.is_empty());
    assert!(session.scores.is_empty());
    assert!(session.ended_at.is_none());
    assert!(session.recommendation.is_none());
    assert!(!session.report_sent);
}

#[test]
fn given_two_sessions_when_created_then_ids_are_unique() {
    let first = session();
    let second = session();
    assert_ne!(first.id, second.id);
}

#[test]
fn given_appended_turns_then_order_is_preserved() {
    let mut session = session();
    session.append_turn(TurnRole::System, "instructions".to_string());
    session.append_turn(TurnRole::Interviewer, "first question".to_string());
    session.append_turn(TurnRole::Candidate, "an answer".to_string());

    let roles: Vec<TurnRole> = session.turns.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![TurnRole::System, TurnRole::Interviewer, TurnRole::Candidate]
    );
    assert_eq!(session.turns[1].text, "first question");
}

#[test]
fn given_counter_below_budget_then_budget_not_reached() {
    let mut session = session();
    session.question_number = DEFAULT_QUESTION_BUDGET - 1;
    assert!(!session.budget_reached());

    session.question_number = DEFAULT_QUESTION_BUDGET;
    assert!(session.budget_reached());
}

#[test]
fn given_long_history_when_taking_recent_texts_then_returns_tail_in_order() {
    let mut session = session();
    for i in 0..5 {
        session.append_turn(TurnRole::Candidate, format!("turn {}", i));
    }

    assert_eq!(session.recent_turn_texts(2), vec!["turn 3", "turn 4"]);
    assert_eq!(session.recent_turn_texts(10).len(), 5);
}
