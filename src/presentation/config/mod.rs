mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    EmailSettings, InterviewSettings, LoggingSettings, OpenAiSettings, ServerSettings, Settings,
    SpeechSettings, StorageBackendSetting, StorageSettings,
};
