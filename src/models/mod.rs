pub mod podcast;
pub mod tts;
pub mod voice;
