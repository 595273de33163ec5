use std::sync::Once;

use clip_core::{update, ClipStatus, Effect, Msg, PageState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(clip_logging::initialize_for_tests);
}

const CLIP_ID: &str = "9f3c1d2e";

fn watching() -> PageState {
    let (state, _effects) = update(
        PageState::new(),
        Msg::WatchStarted {
            clip_id: CLIP_ID.to_string(),
        },
    );
    state
}

fn report(status: &str) -> Msg {
    Msg::StatusFetched(Ok(ClipStatus {
        status: status.to_string(),
        error: None,
    }))
}

#[test]
fn watch_start_checks_immediately_then_polls() {
    init_logging();
    let (state, effects) = update(
        PageState::new(),
        Msg::WatchStarted {
            clip_id: CLIP_ID.to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::FetchStatus {
                clip_id: CLIP_ID.to_string(),
            },
            Effect::StartPolling,
        ]
    );
    let watch = state.view().watch.unwrap();
    assert_eq!(watch.clip_id, CLIP_ID);
    assert!(watch.status_text.is_none());
    assert!(!watch.ready_visible);
    assert!(!watch.error_visible);
}

#[test]
fn second_status_container_is_ignored() {
    init_logging();
    let state = watching();

    let (next, effects) = update(
        state,
        Msg::WatchStarted {
            clip_id: "other".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next.view().watch.unwrap().clip_id, CLIP_ID);
}

#[test]
fn tick_fetches_status_while_pending() {
    init_logging();
    let state = watching();

    let (state, _effects) = update(state, report("processing"));
    assert_eq!(
        state.view().watch.unwrap().status_text.as_deref(),
        Some("processing")
    );

    let (_state, effects) = update(state, Msg::PollTick);
    assert_eq!(
        effects,
        vec![Effect::FetchStatus {
            clip_id: CLIP_ID.to_string(),
        }]
    );
}

#[test]
fn completed_reveals_ready_region_and_stops_polling() {
    init_logging();
    let state = watching();

    let (state, effects) = update(state, report("completed"));
    assert_eq!(effects, vec![Effect::StopPolling]);
    let watch = state.view().watch.unwrap();
    assert!(watch.ready_visible);
    assert!(!watch.error_visible);
    assert_eq!(watch.status_text.as_deref(), Some("completed"));

    // A straggler tick after the terminal status fetches nothing.
    let (mut state, effects) = update(state, Msg::PollTick);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    // A check that was still in flight when the timer stopped is ignored.
    let (mut state, effects) = update(state, report("completed"));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn error_reveals_error_region_with_message() {
    init_logging();
    let state = watching();

    let (state, effects) = update(
        state,
        Msg::StatusFetched(Ok(ClipStatus {
            status: "error".to_string(),
            error: Some("Invalid URL".to_string()),
        })),
    );

    assert_eq!(effects, vec![Effect::StopPolling]);
    let watch = state.view().watch.unwrap();
    assert!(watch.error_visible);
    assert!(!watch.ready_visible);
    assert_eq!(watch.error_message.as_deref(), Some("Invalid URL"));

    let (_state, effects) = update(state, Msg::PollTick);
    assert!(effects.is_empty());
}

#[test]
fn transport_failure_keeps_polling() {
    init_logging();
    let state = watching();
    let (state, _effects) = update(state, report("processing"));

    let (state, effects) = update(
        state,
        Msg::StatusFetched(Err(clip_core::RequestError::Transport)),
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().watch.unwrap().status_text.as_deref(),
        Some("processing")
    );

    // The timer keeps its cadence.
    let (_state, effects) = update(state, Msg::PollTick);
    assert_eq!(effects.len(), 1);
}

#[test]
fn processing_then_completed_reveals_ready_once() {
    init_logging();
    let state = watching();

    let (state, effects) = update(state, report("processing"));
    assert!(effects.is_empty());
    assert!(!state.view().watch.unwrap().ready_visible);

    let (state, effects) = update(state, report("completed"));
    assert_eq!(effects, vec![Effect::StopPolling]);
    assert!(state.view().watch.unwrap().ready_visible);
}

#[test]
fn unknown_status_keeps_polling() {
    init_logging();
    let state = watching();

    let (state, effects) = update(state, report("downloading"));
    assert!(effects.is_empty());

    let watch = state.view().watch.unwrap();
    assert_eq!(watch.status_text.as_deref(), Some("downloading"));
    assert!(!watch.ready_visible);
    assert!(!watch.error_visible);
}

#[test]
fn tick_without_watch_region_is_noop() {
    init_logging();
    let (_state, effects) = update(PageState::new(), Msg::PollTick);
    assert!(effects.is_empty());
}
