use crate::ClipId;

/// Rendered state of the page regions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageView {
    pub form: Option<FormView>,
    pub alert: Option<String>,
    pub watch: Option<WatchView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub loading_visible: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchView {
    pub clip_id: ClipId,
    /// Last status string received from the backend, verbatim.
    pub status_text: Option<String>,
    pub ready_visible: bool,
    pub error_visible: bool,
    pub error_message: Option<String>,
}
