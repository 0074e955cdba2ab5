//! Instruction text fed to the dialogue provider, plus the safe substitutes
//! used when a provider call fails or the candidate's audio is unusable.

use crate::domain::ExperienceLevel;

/// Transient seed for the very first dialogue call; never stored in the turn
/// sequence.
pub const OPENING_SEED: &str =
    "Start the interview with a warm greeting and an opening question.";

/// Substituted when the uploaded audio payload is empty.
pub const EMPTY_AUDIO_PROMPT: &str = "I didn't receive any audio. Please try speaking again.";

/// Substituted when the transcript comes back too short to be an answer.
pub const CLARIFICATION_PROMPT: &str =
    "I didn't catch that clearly. Could you please repeat your answer?";

/// Substituted when the transcription call itself fails.
pub const GARBLED_AUDIO_PROMPT: &str = "I had trouble processing your audio. Please try again.";

/// Interviewer reply when dialogue generation fails mid-interview.
pub const GENERIC_FOLLOW_UP: &str =
    "Thank you for your response. Let me ask you another question.";

/// Narrative used when the final evaluation call fails. Must not contain any
/// recommendation keyword so extraction defaults to Maybe.
pub const FALLBACK_NARRATIVE: &str =
    "The evaluation narrative could not be generated for this interview. \
     A manual review of the transcript is recommended.";

/// Transcripts shorter than this are treated as inaudible.
pub const MIN_TRANSCRIPT_CHARS: usize = 3;

/// System instruction opening every session. Splits the fixed question
/// budget into three difficulty bands and forbids revealing scores.
pub fn interviewer_system_prompt(position: &str, level: ExperienceLevel) -> String {
    format!(
        "You are an expert interviewer conducting a professional interview for a {position} \
         position at {level} level.\n\n\
         Your responsibilities:\n\
         1. Ask relevant, progressive questions based on candidate responses\n\
         2. Maintain a professional, encouraging tone\n\
         3. Keep responses concise (30-60 words)\n\
         4. DO NOT reveal any scores or ratings to the candidate\n\
         5. Focus on gathering comprehensive information for evaluation\n\n\
         Interview structure:\n\
         - Questions 1-3: Foundation and basic skills\n\
         - Questions 4-6: Intermediate scenarios and experience\n\
         - Questions 7-10: Advanced problem-solving and leadership\n\n\
         Never mention scores, ratings, or performance levels to the candidate.",
        position = position,
        level = level,
    )
}

/// Transient reminder appended before each mid-interview dialogue call.
pub fn next_question_reminder(question_number: u32, question_budget: u32, position: &str) -> String {
    format!(
        "Based on the candidate's response, provide your next interview question.\n\
         Current progress: {question_number}/{question_budget}. Position: {position}.\n\
         Do NOT mention any scores, ratings, or performance evaluations to the candidate. \
         Keep the response professional and encouraging while asking the next relevant question.",
    )
}

/// Transient instruction for the long-form evaluation at session end.
pub fn evaluation_prompt(
    candidate_name: &str,
    position: &str,
    level: ExperienceLevel,
    questions_completed: u32,
) -> String {
    format!(
        "Provide a comprehensive evaluation of {candidate_name}'s interview for the {position} \
         position.\n\n\
         Include:\n\
         1. Overall performance summary\n\
         2. Key strengths\n\
         3. Areas for improvement\n\
         4. Technical assessment\n\
         5. Communication evaluation\n\
         6. A clear hiring recommendation (Strong Hire/Hire/Maybe/No Hire)\n\
         7. Specific feedback\n\n\
         Details: questions completed: {questions_completed}, experience level: {level}.",
    )
}
