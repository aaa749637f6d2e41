use std::time::Duration;

use futures_util::StreamExt;
use label_logging::{label_debug, label_trace};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::types::ErrorBody;
use crate::{ClientError, LabelRequest, PreviewLabels};

pub const PREVIEW_PATH: &str = "/previewLabels";
pub const PRINT_PATH: &str = "/printLabels";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl ClientSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            // Previews carry inline images, so allow generous bodies.
            max_bytes: 16 * 1024 * 1024,
        }
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }
}

#[async_trait::async_trait]
pub trait LabelClient: Send + Sync {
    async fn preview_labels(&self, request: &LabelRequest) -> Result<PreviewLabels, ClientError>;

    /// Any JSON body is accepted on success.
    async fn print_labels(&self, request: &LabelRequest)
        -> Result<serde_json::Value, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLabelClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestLabelClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Posts `request` as JSON and returns the raw body of a 2xx response.
    async fn post(&self, path: &str, request: &LabelRequest) -> Result<Vec<u8>, ClientError> {
        let url = self.settings.endpoint(path);
        let body = serde_json::to_vec(&request.envelope())
            .map_err(|err| ClientError::Encode(err.to_string()))?;
        label_debug!(
            "POST {} text_len={} full={} small={}",
            url,
            request.text.len(),
            request.include_full_label,
            request.include_small_label
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = self.read_body(response).await?;
        label_trace!("{} responded {} ({} bytes)", path, status, bytes.len());

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => ClientError::ServerReported(body.error),
                Err(_) => ClientError::HttpStatus(status.as_u16()),
            });
        }
        Ok(bytes)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ClientError::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ClientError::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl LabelClient for ReqwestLabelClient {
    async fn preview_labels(&self, request: &LabelRequest) -> Result<PreviewLabels, ClientError> {
        let bytes = self.post(PREVIEW_PATH, request).await?;
        serde_json::from_slice(&bytes).map_err(|err| ClientError::Parse(err.to_string()))
    }

    async fn print_labels(
        &self,
        request: &LabelRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let bytes = self.post(PRINT_PATH, request).await?;
        serde_json::from_slice(&bytes).map_err(|err| ClientError::Parse(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::Timeout;
    }
    ClientError::Network(err.to_string())
}
