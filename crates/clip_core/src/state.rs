use crate::view_model::{FormView, PageView, WatchView};

/// Server-assigned clip identifier (an opaque string on the wire).
pub type ClipId = String;

/// Cadence of the repeating status poll.
pub const POLL_INTERVAL_MS: u64 = 3000;

/// How long the error alert stays visible before auto-dismissing.
pub const ALERT_DISMISS_MS: u64 = 5000;

/// Message shown when the create-clip call fails before the server can answer.
pub const GENERIC_SUBMIT_ERROR: &str =
    "Une erreur est survenue lors de la communication avec le serveur.";

/// Generation mode selected on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    Short,
    Long,
}

impl ClipMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipMode::Short => "short",
            ClipMode::Long => "long",
        }
    }
}

/// One status report fetched from the backend. Disposable; a fresh one
/// arrives on every poll tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipStatus {
    pub status: String,
    pub error: Option<String>,
}

/// Outcome of an API call as the state machine sees it.
///
/// `Rejected` is the application error (the server answered with a
/// non-success envelope); `Transport` is everything that kept a usable
/// answer from arriving. The host logs transport detail before handing
/// the result here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    Rejected { message: String },
    Transport,
}

/// Page regions for the clip request controller.
///
/// Both regions are optional; a region that is absent ignores the
/// messages aimed at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    form: Option<FormState>,
    watch: Option<WatchState>,
    alert: Option<String>,
    alert_epoch: u64,
    dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormState {
    in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WatchState {
    clip_id: ClipId,
    status_text: Option<String>,
    outcome: Option<WatchOutcome>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchOutcome {
    Ready,
    Failed,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the submission form region to the page.
    pub fn with_form(mut self) -> Self {
        self.form = Some(FormState::default());
        self
    }

    pub fn view(&self) -> PageView {
        PageView {
            form: self.form.as_ref().map(|form| FormView {
                loading_visible: form.in_flight,
                submit_enabled: !form.in_flight,
            }),
            alert: self.alert.clone(),
            watch: self.watch.as_ref().map(|watch| WatchView {
                clip_id: watch.clip_id.clone(),
                status_text: watch.status_text.clone(),
                ready_visible: watch.outcome == Some(WatchOutcome::Ready),
                error_visible: watch.outcome == Some(WatchOutcome::Failed),
                error_message: watch.error.clone(),
            }),
        }
    }

    /// Returns true once per change; the host re-renders only on true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn has_form(&self) -> bool {
        self.form.is_some()
    }

    pub(crate) fn submission_in_flight(&self) -> bool {
        self.form.as_ref().is_some_and(|form| form.in_flight)
    }

    pub(crate) fn begin_submission(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.in_flight = true;
            self.dirty = true;
        }
    }

    pub(crate) fn end_submission(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.in_flight = false;
            self.dirty = true;
        }
    }

    /// Shows `message` in the alert region and returns the epoch the
    /// matching dismiss timer must carry.
    pub(crate) fn show_alert(&mut self, message: String) -> u64 {
        self.alert = Some(message);
        self.alert_epoch += 1;
        self.mark_dirty();
        self.alert_epoch
    }

    /// Hides the alert if `epoch` still names the currently shown one.
    /// A stale epoch belongs to a timer that was restarted by a newer error.
    pub(crate) fn dismiss_alert(&mut self, epoch: u64) {
        if self.alert.is_some() && epoch == self.alert_epoch {
            self.alert = None;
            self.mark_dirty();
        }
    }

    /// Creates the watch region for `clip_id`. Returns false when a region
    /// already exists; the page hosts at most one status container.
    pub(crate) fn start_watch(&mut self, clip_id: ClipId) -> bool {
        if self.watch.is_some() {
            return false;
        }
        self.watch = Some(WatchState {
            clip_id,
            status_text: None,
            outcome: None,
            error: None,
        });
        self.mark_dirty();
        true
    }

    /// The clip to poll, while the watch region exists and is non-terminal.
    pub(crate) fn polling_clip_id(&self) -> Option<ClipId> {
        self.watch
            .as_ref()
            .filter(|watch| watch.outcome.is_none())
            .map(|watch| watch.clip_id.clone())
    }

    pub(crate) fn watch_is_polling(&self) -> bool {
        self.watch
            .as_ref()
            .is_some_and(|watch| watch.outcome.is_none())
    }

    pub(crate) fn set_watch_status(&mut self, status: &str) {
        if let Some(watch) = self.watch.as_mut() {
            if watch.status_text.as_deref() != Some(status) {
                watch.status_text = Some(status.to_string());
                self.dirty = true;
            }
        }
    }

    pub(crate) fn mark_watch_ready(&mut self) {
        if let Some(watch) = self.watch.as_mut() {
            watch.outcome = Some(WatchOutcome::Ready);
            self.dirty = true;
        }
    }

    pub(crate) fn mark_watch_failed(&mut self, error: Option<String>) {
        if let Some(watch) = self.watch.as_mut() {
            watch.outcome = Some(WatchOutcome::Failed);
            watch.error = error;
            self.dirty = true;
        }
    }
}
