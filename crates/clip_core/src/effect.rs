#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the clip request to the backend.
    SubmitClip {
        url: String,
        mode: crate::ClipMode,
        transitions: bool,
    },
    /// Fetch the current status of `clip_id`.
    FetchStatus { clip_id: crate::ClipId },
    /// Leave the form flow for the status page of the created clip.
    Navigate { clip_id: crate::ClipId },
    /// Start the repeating poll timer (`POLL_INTERVAL_MS`).
    StartPolling,
    /// Cancel the repeating poll timer; a terminal status was reached.
    StopPolling,
    /// Schedule `Msg::AlertExpired { epoch }` after `ALERT_DISMISS_MS`.
    ScheduleAlertDismiss { epoch: u64 },
}
