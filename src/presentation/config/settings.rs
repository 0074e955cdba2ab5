use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub speech: SpeechSettings,
    pub email: EmailSettings,
    pub storage: StorageSettings,
    pub interview: InterviewSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub whisper_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub api_key: String,
    pub voice_id: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub endpoint: Option<String>,
    pub access_key: String,
    pub sender: String,
    pub recipient: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackendSetting,
    pub local_path: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendSetting {
    Memory,
    Local,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterviewSettings {
    pub report_queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Builds the full settings tree from environment variables, falling
    /// back to local-development defaults for everything but secrets.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            openai: OpenAiSettings {
                api_key: env_or("OPENAI_API_KEY", ""),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                chat_model: env_or("OPENAI_CHAT_MODEL", "gpt-4"),
                whisper_model: env_or("OPENAI_WHISPER_MODEL", "whisper-1"),
            },
            speech: SpeechSettings {
                api_key: env_or("ELEVENLABS_API_KEY", ""),
                voice_id: env_or("ELEVENLABS_VOICE_ID", "oyxaSt75JW8l04MCJaSo"),
                base_url: std::env::var("ELEVENLABS_BASE_URL").ok(),
            },
            email: EmailSettings {
                endpoint: std::env::var("EMAIL_ENDPOINT").ok(),
                access_key: env_or("EMAIL_ACCESS_KEY", ""),
                sender: env_or("EMAIL_SENDER", "noreply@localhost"),
                recipient: env_or("EMAIL_RECIPIENT", "hiring-team@localhost"),
            },
            storage: StorageSettings {
                backend: match env_or("STORAGE_BACKEND", "memory").to_lowercase().as_str() {
                    "local" => StorageBackendSetting::Local,
                    "azure" => StorageBackendSetting::Azure,
                    _ => StorageBackendSetting::Memory,
                },
                local_path: env_or("STORAGE_LOCAL_PATH", "./interview-data"),
                azure_account: std::env::var("AZURE_STORAGE_ACCOUNT").ok(),
                azure_access_key: std::env::var("AZURE_STORAGE_ACCESS_KEY").ok(),
                azure_container: std::env::var("AZURE_STORAGE_CONTAINER").ok(),
            },
            interview: InterviewSettings {
                report_queue_capacity: env_parsed("REPORT_QUEUE_CAPACITY", 64),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info"),
                enable_json: env_or("LOG_FORMAT", "").to_lowercase() == "json",
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
