use crate::{
    errors::{constants::*, validation::validate_custom_voice, Result},
    request::form::FormFields,
};

/// Built-in speakers of the TTS endpoint.
pub struct Speaker;

impl Speaker {
    pub const SARA: &'static str = SPEAKER_SARA;
    pub const ROBERT: &'static str = SPEAKER_ROBERT;
}

/// A text-to-speech request.
///
/// Example:
/// ```rust
/// use podcastai::{Speaker, TtsRequest};
///
/// let request = TtsRequest::new("Hola, esta es una prueba.").speaker(Speaker::ROBERT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsRequest {
    pub text: String,
    pub language: String,
    pub speaker: String,
    pub use_custom_voice: bool,
    pub custom_voice: Option<String>,
}

impl TtsRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            speaker: SPEAKER_SARA.to_string(),
            use_custom_voice: false,
            custom_voice: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = speaker.into();
        self
    }

    pub fn custom_voice(mut self, url: impl Into<String>) -> Self {
        self.use_custom_voice = true;
        self.custom_voice = Some(url.into());
        self
    }

    pub fn form_fields(&self) -> Result<FormFields> {
        validate_custom_voice(self.use_custom_voice, self.custom_voice.as_deref())?;

        let fields = FormFields::new()
            .text("text", self.text.as_str())
            .text("language", self.language.as_str())
            .text("speaker", self.speaker.as_str())
            .flag("use_custom_voice", self.use_custom_voice);

        if self.use_custom_voice {
            Ok(fields.optional("custom_voice", self.custom_voice.as_deref()))
        } else {
            Ok(fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let fields = TtsRequest::new("hi").form_fields().unwrap();
        assert_eq!(
            fields.names(),
            vec!["text", "language", "speaker", "use_custom_voice"]
        );
        assert_eq!(fields.get("speaker"), Some("Sara"));
        assert_eq!(fields.get("language"), Some("es"));
        assert_eq!(fields.get("use_custom_voice"), Some("false"));
    }

    #[test]
    fn test_custom_voice_form() {
        let fields = TtsRequest::new("hi")
            .speaker(Speaker::ROBERT)
            .custom_voice("https://x/v.wav")
            .form_fields()
            .unwrap();
        assert_eq!(fields.get("use_custom_voice"), Some("true"));
        assert_eq!(fields.get("custom_voice"), Some("https://x/v.wav"));
        assert_eq!(fields.get("speaker"), Some("Robert"));
    }

    #[test]
    fn test_custom_voice_without_url_fails() {
        let request = TtsRequest {
            use_custom_voice: true,
            ..TtsRequest::new("hi")
        };
        let err = request.form_fields().unwrap_err();
        assert!(err.is_validation());
    }
}
