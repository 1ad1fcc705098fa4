use std::path::PathBuf;

use crate::{
    errors::{constants::*, validation::validate_custom_voices, Result},
    request::{form::FormFields, voice_upload::read_upload},
    transport::FilePart,
};

/// Where the podcast content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodcastSource {
    /// Local PDF, sent as a multipart `file` part.
    Pdf(PathBuf),
    /// Remote document, sent as the form field `url`.
    Url(String),
}

/// Options shared by both podcast generation calls.
///
/// Example:
/// ```rust
/// use podcastai::{GenerationOptions, PodcastLength};
///
/// let options = GenerationOptions::default()
///     .language("en")
///     .podcast_length(PodcastLength::EXTENDED)
///     .question("Explain this simply");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub language: String,
    /// Free string; see [`PodcastLength`] for the values the service knows.
    pub podcast_length: String,
    pub question: Option<String>,
    pub use_custom_voices: bool,
    pub custom_voice_sara: Option<String>,
    pub custom_voice_robert: Option<String>,
}

/// Length categories accepted by the generation endpoint.
pub struct PodcastLength;

impl PodcastLength {
    pub const BASE: &'static str = PODCAST_LENGTH_BASE;
    pub const EXTENDED: &'static str = PODCAST_LENGTH_EXTENDED;
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            podcast_length: PODCAST_LENGTH_BASE.to_string(),
            question: None,
            use_custom_voices: false,
            custom_voice_sara: None,
            custom_voice_robert: None,
        }
    }
}

impl GenerationOptions {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn podcast_length(mut self, podcast_length: impl Into<String>) -> Self {
        self.podcast_length = podcast_length.into();
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Enables custom voices with the given reference recordings.
    pub fn custom_voices(mut self, sara: impl Into<String>, robert: impl Into<String>) -> Self {
        self.use_custom_voices = true;
        self.custom_voice_sara = Some(sara.into());
        self.custom_voice_robert = Some(robert.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_custom_voices(
            self.use_custom_voices,
            self.custom_voice_sara.as_deref(),
            self.custom_voice_robert.as_deref(),
        )
    }

    /// Validates, then lays out the form. `url` is written first when given.
    pub fn form_fields(&self, url: Option<&str>) -> Result<FormFields> {
        self.validate()?;

        let mut fields = FormFields::new();
        if let Some(url) = url {
            fields = fields.text("url", url);
        }

        fields = fields
            .text("language", self.language.as_str())
            .text("podcast_length", self.podcast_length.as_str())
            .flag("use_custom_voices", self.use_custom_voices)
            .optional("question", self.question.as_deref());

        if self.use_custom_voices {
            fields = fields
                .optional("custom_voice_sara", self.custom_voice_sara.as_deref())
                .optional("custom_voice_robert", self.custom_voice_robert.as_deref());
        }

        Ok(fields)
    }
}

/// Reads a PDF for upload, keeping its own file name on the part.
pub(crate) async fn read_pdf(path: &std::path::Path) -> Result<FilePart> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(PDF_FALLBACK_FILE_NAME)
        .to_string();
    let bytes = read_upload(path).await?;

    Ok(FilePart {
        field: PDF_FILE_FIELD.to_string(),
        file_name,
        mime: PDF_FILE_MIME.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PodcastAiError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.language, "es");
        assert_eq!(options.podcast_length, "Base (3-5 min)");
        assert!(!options.use_custom_voices);
    }

    #[test]
    fn test_url_form_layout() {
        let fields = GenerationOptions::default()
            .podcast_length(PodcastLength::EXTENDED)
            .question("Explain this simply")
            .form_fields(Some("https://arxiv.org/pdf/2410.01131"))
            .unwrap();

        assert_eq!(
            fields.names(),
            vec!["url", "language", "podcast_length", "use_custom_voices", "question"]
        );
        assert_eq!(fields.get("podcast_length"), Some("Extended (8-10 min)"));
        assert_eq!(fields.get("use_custom_voices"), Some("false"));
    }

    #[test]
    fn test_empty_question_is_omitted() {
        let fields = GenerationOptions::default()
            .question("")
            .form_fields(None)
            .unwrap();
        assert!(!fields.contains("question"));
        assert!(!fields.contains("url"));
    }

    #[test]
    fn test_custom_voices_are_written() {
        let fields = GenerationOptions::default()
            .custom_voices("https://x/sara.wav", "https://x/robert.wav")
            .form_fields(None)
            .unwrap();
        assert_eq!(fields.get("use_custom_voices"), Some("true"));
        assert_eq!(fields.get("custom_voice_sara"), Some("https://x/sara.wav"));
        assert_eq!(fields.get("custom_voice_robert"), Some("https://x/robert.wav"));
    }

    #[test]
    fn test_custom_voice_urls_ignored_when_disabled() {
        let options = GenerationOptions {
            custom_voice_sara: Some("https://x/sara.wav".to_string()),
            ..Default::default()
        };
        let fields = options.form_fields(None).unwrap();
        assert!(!fields.contains("custom_voice_sara"));
    }

    #[test]
    fn test_custom_voices_missing_url_fails() {
        let options = GenerationOptions {
            use_custom_voices: true,
            custom_voice_sara: Some("https://x/sara.wav".to_string()),
            ..Default::default()
        };
        let result = options.form_fields(None);
        assert!(matches!(result, Err(PodcastAiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_read_pdf_keeps_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4").unwrap();

        let part = read_pdf(&path).await.unwrap();
        assert_eq!(part.field, "file");
        assert_eq!(part.file_name, "paper.pdf");
        assert_eq!(part.mime, "application/pdf");
        assert_eq!(part.bytes, b"%PDF-1.4".to_vec());
    }
}
