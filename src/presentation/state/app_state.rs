use std::sync::Arc;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::application::services::InterviewService;
use crate::presentation::config::Settings;

pub struct AppState<D, T, S>
where
    D: DialogueClient,
    T: Transcriber,
    S: SpeechSynthesizer,
{
    pub interview_service: Arc<InterviewService<D, T, S>>,
    pub settings: Settings,
}

impl<D, T, S> Clone for AppState<D, T, S>
where
    D: DialogueClient,
    T: Transcriber,
    S: SpeechSynthesizer,
{
    fn clone(&self) -> Self {
        Self {
            interview_service: Arc::clone(&self.interview_service),
            settings: self.settings.clone(),
        }
    }
}
