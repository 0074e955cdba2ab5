mod experience_level_test;
mod interview_session_test;
mod recommendation_test;
mod session_status_test;
