use crate::{ClipStatus, Effect, Msg, PageState, RequestError, GENERIC_SUBMIT_ERROR};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::FormSubmitted {
            url,
            mode,
            transitions,
        } => {
            // The disable-on-submit guard: at most one submission in flight.
            if !state.has_form() || state.submission_in_flight() {
                return (state, Vec::new());
            }
            state.begin_submission();
            vec![Effect::SubmitClip {
                url,
                mode,
                transitions,
            }]
        }
        Msg::SubmitFinished(result) => {
            if !state.submission_in_flight() {
                return (state, Vec::new());
            }
            // Finalizer: hide the loading indicator and re-enable the
            // submit control, whatever the outcome.
            state.end_submission();
            match result {
                Ok(clip_id) => vec![Effect::Navigate { clip_id }],
                Err(RequestError::Rejected { message }) => {
                    let epoch = state.show_alert(message);
                    vec![Effect::ScheduleAlertDismiss { epoch }]
                }
                Err(RequestError::Transport) => {
                    let epoch = state.show_alert(GENERIC_SUBMIT_ERROR.to_string());
                    vec![Effect::ScheduleAlertDismiss { epoch }]
                }
            }
        }
        Msg::WatchStarted { clip_id } => {
            if !state.start_watch(clip_id.clone()) {
                return (state, Vec::new());
            }
            // One immediate check, then the repeating timer.
            vec![Effect::FetchStatus { clip_id }, Effect::StartPolling]
        }
        Msg::PollTick => match state.polling_clip_id() {
            Some(clip_id) => vec![Effect::FetchStatus { clip_id }],
            None => Vec::new(),
        },
        Msg::StatusFetched(Ok(report)) => apply_status(&mut state, report),
        // Transport failures while polling are logged by the host and
        // otherwise ignored; the timer keeps its cadence.
        Msg::StatusFetched(Err(_)) => Vec::new(),
        Msg::AlertExpired { epoch } => {
            state.dismiss_alert(epoch);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_status(state: &mut PageState, report: ClipStatus) -> Vec<Effect> {
    if !state.watch_is_polling() {
        // A check that was already in flight when a terminal status landed.
        return Vec::new();
    }
    state.set_watch_status(&report.status);
    match report.status.as_str() {
        "completed" => {
            state.mark_watch_ready();
            vec![Effect::StopPolling]
        }
        "error" => {
            state.mark_watch_failed(report.error);
            vec![Effect::StopPolling]
        }
        _ => Vec::new(),
    }
}
