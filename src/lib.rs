// Public API for the PodcastAI client library

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod request;
pub mod trace;
pub mod transport;

// Re-export commonly used types
pub use client::PodcastClient;
pub use config::ClientConfig;
pub use errors::{PodcastAiError, Result};
pub use models::{
    podcast::{PodcastResult, TranscriptLine},
    tts::TtsResult,
    voice::Voice,
};
pub use request::{
    generation::{GenerationOptions, PodcastLength, PodcastSource},
    tts::{Speaker, TtsRequest},
    voice_upload::VoiceUpload,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
