use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A voice registered with the service. Only `voice_id` is guaranteed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Voice {
    pub voice_id: i64,
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub voice_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
