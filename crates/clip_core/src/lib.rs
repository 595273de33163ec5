//! Clipper core: pure page state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    ClipId, ClipMode, ClipStatus, PageState, RequestError, ALERT_DISMISS_MS, GENERIC_SUBMIT_ERROR,
    POLL_INTERVAL_MS,
};
pub use update::update;
pub use view_model::{FormView, PageView, WatchView};
