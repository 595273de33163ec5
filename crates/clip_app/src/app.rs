use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use clip_client::{ApiSettings, ClipApi, ReqwestClipApi};
use clip_core::{update, ClipMode, Msg, PageState};

use crate::cli::{ModeArg, SubmitArgs};
use crate::effects::EffectRunner;
use crate::ui;

/// How a controller run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The watched clip reached "completed".
    Ready,
    /// The watched clip reached "error".
    ClipFailed,
    /// The submission was refused or never reached the server.
    SubmitFailed,
}

/// Submit a clip request; on acceptance the run switches into watching
/// the new clip.
pub fn run_submit(settings: ApiSettings, args: SubmitArgs) -> anyhow::Result<RunOutcome> {
    let msg = Msg::FormSubmitted {
        url: args.url,
        mode: match args.mode {
            ModeArg::Short => ClipMode::Short,
            ModeArg::Long => ClipMode::Long,
        },
        transitions: !args.no_transitions,
    };
    run(PageState::new().with_form(), settings, msg)
}

/// Follow an existing clip until a terminal status.
pub fn run_watch(settings: ApiSettings, clip_id: String) -> anyhow::Result<RunOutcome> {
    run(PageState::new(), settings, Msg::WatchStarted { clip_id })
}

/// One-shot liveness probe against the API.
pub fn run_health(settings: ApiSettings) -> anyhow::Result<()> {
    let api = ReqwestClipApi::new(settings).context("build API client")?;
    let runtime = tokio::runtime::Runtime::new().context("tokio runtime")?;
    runtime.block_on(api.health()).context("clip API health check")?;
    println!("Clip API is up.");
    Ok(())
}

fn run(mut state: PageState, settings: ApiSettings, initial: Msg) -> anyhow::Result<RunOutcome> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner =
        EffectRunner::new(settings, msg_tx.clone()).context("build API client")?;

    let _ = msg_tx.send(initial);

    loop {
        // Client events first, then whatever the timers queued.
        let mut inbox = runner.poll_events();
        match msg_rx.recv_timeout(Duration::from_millis(20)) {
            Ok(msg) => inbox.push(msg),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                anyhow::bail!("message channel closed")
            }
        }

        for msg in inbox {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            for line in ui::render(&state.view()) {
                println!("{line}");
            }
        }

        if let Some(outcome) = finished(&state) {
            return Ok(outcome);
        }
    }
}

fn finished(state: &PageState) -> Option<RunOutcome> {
    let view = state.view();
    if let Some(watch) = &view.watch {
        if watch.ready_visible {
            return Some(RunOutcome::Ready);
        }
        if watch.error_visible {
            return Some(RunOutcome::ClipFailed);
        }
        // Keep polling; the loop only ends on a terminal status.
        return None;
    }
    if let Some(form) = &view.form {
        // An alert with nothing in flight means the request was not
        // accepted; there is no clip to watch.
        if view.alert.is_some() && form.submit_enabled {
            return Some(RunOutcome::SubmitFailed);
        }
    }
    None
}
