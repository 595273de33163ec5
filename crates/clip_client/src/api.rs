use std::time::Duration;

use clip_logging::clip_debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{ApiError, ApiFailure, ClipId, ClipInfo, ClipRequest, ClipStatus};

/// Connection settings for the clip API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL up to and including the `/api` prefix.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ClipApi: Send + Sync {
    /// `POST /clips`: queue generation of a new clip, returning its id.
    async fn create_clip(&self, request: &ClipRequest) -> Result<ClipId, ApiError>;

    /// `GET /clips/{id}/status`: one disposable status report.
    async fn clip_status(&self, clip_id: &str) -> Result<ClipStatus, ApiError>;

    /// `GET /clips/{id}`: full clip record, including the download URL once
    /// the clip is ready.
    async fn clip_info(&self, clip_id: &str) -> Result<ClipInfo, ApiError>;

    /// `GET /health`: liveness probe.
    async fn health(&self) -> Result<(), ApiError>;
}

// Every endpoint answers with `status` plus either its payload field or a
// `message`; each route gets its own envelope.

#[derive(Debug, Deserialize)]
struct CreatedEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    clip_id: Option<ClipId>,
}

#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    clip_status: Option<ClipStatus>,
}

#[derive(Debug, Deserialize)]
struct InfoEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    clip: Option<ClipInfo>,
}

#[derive(Debug, Deserialize)]
struct HealthEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestClipApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestClipApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Decode the response body as an envelope without consulting the HTTP
    /// status code: the backend ships its error envelope with 4xx/5xx
    /// responses, and those messages must reach the user verbatim.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl ClipApi for ReqwestClipApi {
    async fn create_clip(&self, request: &ClipRequest) -> Result<ClipId, ApiError> {
        let url = self.endpoint("clips");
        clip_debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let envelope: CreatedEnvelope = Self::read_envelope(response).await?;
        if envelope.status != "success" {
            return Err(rejection(envelope.message));
        }
        envelope.clip_id.ok_or_else(|| {
            ApiError::new(
                ApiFailure::MalformedResponse,
                "success envelope without clip_id",
            )
        })
    }

    async fn clip_status(&self, clip_id: &str) -> Result<ClipStatus, ApiError> {
        let url = self.endpoint(&format!("clips/{clip_id}/status"));
        clip_debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let envelope: StatusEnvelope = Self::read_envelope(response).await?;
        if envelope.status != "success" {
            return Err(rejection(envelope.message));
        }
        envelope.clip_status.ok_or_else(|| {
            ApiError::new(
                ApiFailure::MalformedResponse,
                "success envelope without clip_status",
            )
        })
    }

    async fn clip_info(&self, clip_id: &str) -> Result<ClipInfo, ApiError> {
        let url = self.endpoint(&format!("clips/{clip_id}"));
        clip_debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let envelope: InfoEnvelope = Self::read_envelope(response).await?;
        if envelope.status != "success" {
            return Err(rejection(envelope.message));
        }
        envelope.clip.ok_or_else(|| {
            ApiError::new(ApiFailure::MalformedResponse, "success envelope without clip")
        })
    }

    async fn health(&self) -> Result<(), ApiError> {
        let url = self.endpoint("health");
        clip_debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let envelope: HealthEnvelope = Self::read_envelope(response).await?;
        if envelope.status != "success" {
            return Err(rejection(envelope.message));
        }
        Ok(())
    }
}

fn rejection(message: Option<String>) -> ApiError {
    ApiError::new(
        ApiFailure::Rejected,
        message.unwrap_or_else(|| "request rejected".to_string()),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiFailure::MalformedResponse, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
