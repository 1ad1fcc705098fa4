use std::path::{Path, PathBuf};

use crate::{
    errors::{constants::*, Result},
    request::form::FormFields,
    transport::FilePart,
};

/// A reference recording to register as a custom voice.
///
/// Example:
/// ```rust
/// use podcastai::VoiceUpload;
///
/// let upload = VoiceUpload::new("Voice/male.wav", "TestAPI", "sara");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceUpload {
    pub path: PathBuf,
    pub voice_name: String,
    /// `"sara"` or `"robert"`; passed through unchecked.
    pub voice_type: String,
}

impl VoiceUpload {
    pub fn new(
        path: impl Into<PathBuf>,
        voice_name: impl Into<String>,
        voice_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            voice_name: voice_name.into(),
            voice_type: voice_type.into(),
        }
    }

    pub fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("voice_name", self.voice_name.as_str())
            .text("voice_type", self.voice_type.as_str())
    }

    /// The recording always goes out as `voice.wav`, whatever its local name.
    pub async fn read_file(&self) -> Result<FilePart> {
        let bytes = read_upload(&self.path).await?;
        Ok(FilePart {
            field: VOICE_FILE_FIELD.to_string(),
            file_name: VOICE_FILE_NAME.to_string(),
            mime: VOICE_FILE_MIME.to_string(),
            bytes,
        })
    }
}

/// Opens, reads and closes the file in one step.
pub(crate) async fn read_upload(path: &Path) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}
