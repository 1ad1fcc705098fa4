/// Error types for the PodcastAI client
#[derive(Debug, thiserror::Error)]
pub enum PodcastAiError {
    /// Rejected locally, before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service answered with a status other than 200.
    #[error("{context}: {message}")]
    RemoteApi {
        context: String,
        status: u16,
        message: String,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PodcastAiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn remote_api(context: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::RemoteApi {
            context: context.into(),
            status,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_env_var(var_name: &str) -> Self {
        Self::Config(format!("Missing environment variable: {}", var_name))
    }

    /// HTTP status of a remote failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteApi { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PodcastAiError>;

/// Input validation functions
pub mod validation {
    use super::*;

    fn is_present(value: Option<&str>) -> bool {
        value.map_or(false, |v| !v.is_empty())
    }

    /// Both reference voices must be supplied when custom voices are enabled.
    pub fn validate_custom_voices(
        use_custom_voices: bool,
        custom_voice_sara: Option<&str>,
        custom_voice_robert: Option<&str>,
    ) -> Result<()> {
        if use_custom_voices && !(is_present(custom_voice_sara) && is_present(custom_voice_robert))
        {
            return Err(PodcastAiError::validation(
                "URLs are required for both custom voices",
            ));
        }

        Ok(())
    }

    pub fn validate_custom_voice(use_custom_voice: bool, custom_voice: Option<&str>) -> Result<()> {
        if use_custom_voice && !is_present(custom_voice) {
            return Err(PodcastAiError::validation(
                "A URL is required for the custom voice",
            ));
        }

        Ok(())
    }
}

/// Constants used throughout the client
pub mod constants {
    // Wire contract
    pub const DEFAULT_BASE_URL: &str = "https://www.podcastai.tech";
    pub const API_KEY_HEADER: &str = "X-Api-Key";
    pub const HEALTH_PATH: &str = "/api/v1/health";
    pub const VOICES_PATH: &str = "/api/v1/voices";
    pub const GENERATE_PODCAST_PATH: &str = "/api/v1/generate-podcast";
    pub const TTS_PATH: &str = "/api/v1/tts";

    // Upload parts
    pub const VOICE_FILE_FIELD: &str = "voice_file";
    pub const VOICE_FILE_NAME: &str = "voice.wav";
    pub const VOICE_FILE_MIME: &str = "audio/wav";
    pub const PDF_FILE_FIELD: &str = "file";
    pub const PDF_FILE_MIME: &str = "application/pdf";
    pub const PDF_FALLBACK_FILE_NAME: &str = "document.pdf";

    // Request defaults
    pub const DEFAULT_LANGUAGE: &str = "es";
    pub const PODCAST_LENGTH_BASE: &str = "Base (3-5 min)";
    pub const PODCAST_LENGTH_EXTENDED: &str = "Extended (8-10 min)";
    pub const SPEAKER_SARA: &str = "Sara";
    pub const SPEAKER_ROBERT: &str = "Robert";
    pub const VOICE_TYPE_SARA: &str = "sara";
    pub const VOICE_TYPE_ROBERT: &str = "robert";

    // Error labels
    pub const LIST_VOICES_ERROR: &str = "Error listing voices";
    pub const UPLOAD_VOICE_ERROR: &str = "Error uploading voice";
    pub const DELETE_VOICE_ERROR: &str = "Error deleting voice";
    pub const API_ERROR: &str = "API error";

    // Configuration
    pub const DEFAULT_CONFIG_PATH: &str = "podcastai.toml";
    pub const ENV_API_KEY: &str = "PODCASTAI_API_KEY";
    pub const ENV_BASE_URL: &str = "PODCASTAI_BASE_URL";
    pub const ENV_TIMEOUT_SECS: &str = "PODCASTAI_TIMEOUT_SECS";
}
