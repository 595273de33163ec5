#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the clip request form (fields read at submit time).
    FormSubmitted {
        url: String,
        mode: crate::ClipMode,
        transitions: bool,
    },
    /// The create-clip call finished.
    SubmitFinished(Result<crate::ClipId, crate::RequestError>),
    /// A status container for `clip_id` became active.
    WatchStarted { clip_id: crate::ClipId },
    /// The repeating poll timer fired.
    PollTick,
    /// A status check finished.
    StatusFetched(Result<crate::ClipStatus, crate::RequestError>),
    /// The auto-dismiss delay for the alert shown at `epoch` elapsed.
    AlertExpired { epoch: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}
