use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranscriptLine {
    pub speaker: String,
    pub text: String,
}

/// Result of a podcast generation call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PodcastResult {
    pub podcast_url: String,
    #[serde(default)]
    pub transcript: Vec<TranscriptLine>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
