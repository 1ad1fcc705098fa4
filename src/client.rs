use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{
    config::ClientConfig,
    errors::{constants::*, PodcastAiError, Result},
    models::{podcast::PodcastResult, tts::TtsResult, voice::Voice},
    request::{
        generation::{read_pdf, GenerationOptions, PodcastSource},
        tts::TtsRequest,
        voice_upload::VoiceUpload,
    },
    transport::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody, Transport},
};

/// Client for the PodcastAI API.
///
/// Every method sends exactly one request. Nothing is retried or cached.
///
/// Example:
/// ```rust,no_run
/// use podcastai::{PodcastClient, TtsRequest};
///
/// # async fn run() -> podcastai::Result<()> {
/// let client = PodcastClient::new("pk_YOUR_API_KEY")?;
/// let health = client.check_health().await?;
/// let audio = client.tts(&TtsRequest::new("Hola")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PodcastClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl PodcastClient<HttpTransport> {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> PodcastClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn request(&self, method: Method, path: &str, body: RequestBody) -> ApiRequest {
        ApiRequest {
            method,
            url: self.url(path),
            headers: vec![(API_KEY_HEADER.to_string(), self.config.api_key().to_string())],
            body,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(request_id = %request_id, method = method, url = %url, "Sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            error!(request_id = %request_id, url = %url, error = %e, "Request failed");
            e
        })?;

        info!(
            request_id = %request_id,
            method = method,
            url = %url,
            status = response.status,
            "Request completed"
        );
        Ok(response)
    }

    /// Sends the request and decodes a 200 body. Any other status becomes a
    /// [`PodcastAiError::RemoteApi`] labelled with `context`.
    async fn expect_ok(&self, request: ApiRequest, context: &str) -> Result<Value> {
        let response = self.execute(request).await?;

        if !response.is_success() {
            let message = response.error_message();
            warn!(status = response.status, message = %message, "{}", context);
            return Err(PodcastAiError::remote_api(context, response.status, message));
        }

        response.json().map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            e
        })
    }

    /// Reports service health. The status code is not checked, and a body
    /// that is not JSON comes back as a JSON string.
    #[tracing::instrument(skip(self))]
    pub async fn check_health(&self) -> Result<Value> {
        let request = self.request(Method::Get, HEALTH_PATH, RequestBody::Empty);
        let response = self.execute(request).await?;

        match serde_json::from_str(&response.body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(status = response.status, error = %e, "Health body is not JSON");
                Ok(Value::String(response.body))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_voices(&self) -> Result<Vec<Value>> {
        let request = self.request(Method::Get, VOICES_PATH, RequestBody::Empty);
        let value = self.expect_ok(request, LIST_VOICES_ERROR).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Uploads a reference recording as a custom voice.
    #[tracing::instrument(skip_all, fields(path = %upload.path.display(), voice_name = %upload.voice_name))]
    pub async fn upload_voice(&self, upload: &VoiceUpload) -> Result<Value> {
        let file = upload.read_file().await?;
        let body = RequestBody::Multipart {
            fields: upload.form_fields(),
            file,
        };

        let request = self.request(Method::Post, VOICES_PATH, body);
        self.expect_ok(request, UPLOAD_VOICE_ERROR).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_voice(&self, voice_id: i64) -> Result<Value> {
        let path = format!("{}/{}", VOICES_PATH, voice_id);
        let request = self.request(Method::Delete, &path, RequestBody::Empty);
        self.expect_ok(request, DELETE_VOICE_ERROR).await
    }

    /// Generates a podcast from a local PDF.
    ///
    /// Options are validated before the file is touched.
    #[tracing::instrument(skip_all, fields(path = %pdf_path.as_ref().display()))]
    pub async fn generate_podcast_from_pdf(
        &self,
        pdf_path: impl AsRef<Path>,
        options: &GenerationOptions,
    ) -> Result<Value> {
        let fields = options.form_fields(None)?;
        let file = read_pdf(pdf_path.as_ref()).await?;

        let request = self.request(
            Method::Post,
            GENERATE_PODCAST_PATH,
            RequestBody::Multipart { fields, file },
        );
        self.expect_ok(request, API_ERROR).await
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn generate_podcast_from_url(
        &self,
        url: &str,
        options: &GenerationOptions,
    ) -> Result<Value> {
        let fields = options.form_fields(Some(url))?;
        let request = self.request(Method::Post, GENERATE_PODCAST_PATH, RequestBody::Form(fields));
        self.expect_ok(request, API_ERROR).await
    }

    #[tracing::instrument(skip_all, fields(speaker = %request.speaker, language = %request.language))]
    pub async fn tts(&self, request: &TtsRequest) -> Result<Value> {
        let fields = request.form_fields()?;
        let request = self.request(Method::Post, TTS_PATH, RequestBody::Form(fields));
        self.expect_ok(request, API_ERROR).await
    }

    pub async fn voices(&self) -> Result<Vec<Voice>> {
        let voices = self.list_voices().await?;
        voices
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(PodcastAiError::from))
            .collect()
    }

    pub async fn generate_podcast(
        &self,
        source: &PodcastSource,
        options: &GenerationOptions,
    ) -> Result<PodcastResult> {
        let value = match source {
            PodcastSource::Pdf(path) => self.generate_podcast_from_pdf(path, options).await?,
            PodcastSource::Url(url) => self.generate_podcast_from_url(url, options).await?,
        };
        Ok(serde_json::from_value(value)?)
    }

    pub async fn synthesize(&self, request: &TtsRequest) -> Result<TtsResult> {
        let value = self.tts(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}
