pub mod form;
pub mod generation;
pub mod tts;
pub mod voice_upload;
