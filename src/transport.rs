use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use crate::{errors::Result, request::form::FormFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A file attached to a multipart body. The bytes are read once while the
/// request is built, so no file handle outlives that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Form(FormFields),
    Multipart { fields: FormFields, file: FilePart },
}

impl RequestBody {
    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Form(fields) => Some(fields),
            RequestBody::Multipart { fields, .. } => Some(fields),
        }
    }

    pub fn file(&self) -> Option<&FilePart> {
        match self {
            RequestBody::Multipart { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success; the body carries no status of its own.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Message to report for a failed call: the `error` field of a JSON body,
    /// else the raw body text, else the bare status.
    pub fn error_message(&self) -> String {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&self.body) {
            match map.get("error") {
                Some(Value::String(message)) => return message.clone(),
                Some(other) if !other.is_null() => return other.to_string(),
                _ => {}
            }
        }

        let raw = self.body.trim();
        if raw.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            raw.to_string()
        }
    }
}

/// Sends one request and hands back the status and body untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    fn multipart(fields: FormFields, file: FilePart) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)?;

        Ok(form.part(file.field, part))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart { fields, file } => {
                builder.multipart(Self::multipart(fields, file)?)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status = status, body_len = body.len(), "Received response");

        Ok(ApiResponse { status, body })
    }
}
