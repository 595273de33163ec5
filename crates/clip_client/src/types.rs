use std::fmt;

use serde::{Deserialize, Serialize};

pub type ClipId = String;

/// Generation mode for a clip request, as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipMode {
    Short,
    Long,
}

/// Body of `POST /clips`. Built fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipRequest {
    pub url: String,
    pub mode: ClipMode,
    pub transitions: bool,
}

/// Nested `clip_status` payload of `GET /clips/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClipStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of `GET /clips/{id}`. Unknown fields are ignored; the backend
/// also ships timestamps and storage paths the front end has no use for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipInfo {
    pub id: ClipId,
    pub youtube_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    /// Duration of the source video in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    pub mode: String,
    pub status: String,
    #[serde(default)]
    pub transitions: Option<bool>,
    /// Present once the clip reached "completed".
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when the server itself refused the request; the message is then
    /// the server-supplied one and fit to show to the user.
    pub fn is_rejection(&self) -> bool {
        self.kind == ApiFailure::Rejected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    /// The server answered with a non-success envelope.
    Rejected,
    /// The response body was not the expected envelope.
    MalformedResponse,
    Timeout,
    Network,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Rejected => write!(f, "rejected by server"),
            ApiFailure::MalformedResponse => write!(f, "malformed response"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::Network => write!(f, "network error"),
        }
    }
}
