use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a text-to-speech call. `audio_id` stays raw JSON, it may be a
/// string or a number.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TtsResult {
    pub audio_url: String,
    #[serde(default)]
    pub audio_id: Value,
    #[serde(default)]
    pub metadata: Value,
}
