use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use clip_client::{
    ApiError, ApiSettings, ClientEvent, ClientHandle, ClipRequest, ReqwestClipApi,
};
use clip_core::{ClipStatus, Effect, Msg, RequestError, ALERT_DISMISS_MS, POLL_INTERVAL_MS};
use clip_logging::{clip_info, clip_warn};

use crate::ui;

/// Executes core effects against the API client and turns client events and
/// timer expiries back into core messages.
pub struct EffectRunner {
    handle: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
    poll_cancel: Option<Arc<AtomicBool>>,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, ApiError> {
        let api = ReqwestClipApi::new(settings)?;
        Ok(Self {
            handle: ClientHandle::new(api),
            msg_tx,
            poll_cancel: None,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitClip {
                    url,
                    mode,
                    transitions,
                } => {
                    clip_info!(
                        "submit clip mode={} transitions={} url={}",
                        mode.as_str(),
                        transitions,
                        url
                    );
                    self.handle.submit(ClipRequest {
                        url,
                        mode: map_mode(mode),
                        transitions,
                    });
                }
                Effect::FetchStatus { clip_id } => {
                    self.handle.fetch_status(clip_id);
                }
                Effect::Navigate { clip_id } => {
                    // A created clip immediately becomes the watched clip.
                    clip_info!("clip {clip_id} created, switching to watch");
                    println!("Clip created: {clip_id}");
                    self.handle.fetch_info(clip_id.clone());
                    let _ = self.msg_tx.send(Msg::WatchStarted { clip_id });
                }
                Effect::StartPolling => self.start_polling(),
                Effect::StopPolling => self.stop_polling(),
                Effect::ScheduleAlertDismiss { epoch } => self.schedule_alert_dismiss(epoch),
            }
        }
    }

    /// Drains client completions into core messages. Transport detail is
    /// logged here; the state machine only sees the collapsed error kind.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.handle.try_recv() {
            match event {
                ClientEvent::SubmitFinished { result } => {
                    let result = result.map_err(|err| {
                        if !err.is_rejection() {
                            clip_warn!("create clip failed: {err}");
                        }
                        map_error(err)
                    });
                    msgs.push(Msg::SubmitFinished(result));
                }
                ClientEvent::StatusFetched { clip_id, result } => match result {
                    Ok(status) => msgs.push(Msg::StatusFetched(Ok(ClipStatus {
                        status: status.status,
                        error: status.error,
                    }))),
                    Err(err) => {
                        clip_warn!("status check for {clip_id} failed: {err}");
                        msgs.push(Msg::StatusFetched(Err(map_error(err))));
                    }
                },
                ClientEvent::InfoFetched { clip_id, result } => match result {
                    // The clip record is page chrome, not controller state;
                    // render it directly.
                    Ok(info) => {
                        for line in ui::render_info(&info) {
                            println!("{line}");
                        }
                    }
                    Err(err) => clip_warn!("clip info for {clip_id} failed: {err}"),
                },
            }
        }
        msgs
    }

    fn start_polling(&mut self) {
        self.stop_polling();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        let tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
            if flag.load(Ordering::Relaxed) {
                break;
            }
            if tx.send(Msg::PollTick).is_err() {
                break;
            }
        });
        self.poll_cancel = Some(cancel);
    }

    fn stop_polling(&mut self) {
        if let Some(cancel) = self.poll_cancel.take() {
            cancel.store(true, Ordering::Relaxed);
        }
    }

    fn schedule_alert_dismiss(&self, epoch: u64) {
        let tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ALERT_DISMISS_MS));
            let _ = tx.send(Msg::AlertExpired { epoch });
        });
    }
}

fn map_mode(mode: clip_core::ClipMode) -> clip_client::ClipMode {
    match mode {
        clip_core::ClipMode::Short => clip_client::ClipMode::Short,
        clip_core::ClipMode::Long => clip_client::ClipMode::Long,
    }
}

fn map_error(err: ApiError) -> RequestError {
    if err.is_rejection() {
        RequestError::Rejected {
            message: err.message,
        }
    } else {
        RequestError::Transport
    }
}
