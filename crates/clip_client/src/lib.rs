//! Clipper client: typed API surface and async call execution.
mod api;
mod handle;
mod types;

pub use api::{ApiSettings, ClipApi, ReqwestClipApi};
pub use handle::{ClientEvent, ClientHandle};
pub use types::{ApiError, ApiFailure, ClipId, ClipInfo, ClipMode, ClipRequest, ClipStatus};
