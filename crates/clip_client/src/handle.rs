use std::sync::{mpsc, Arc};
use std::thread;

use clip_logging::clip_trace;

use crate::{ApiError, ClipApi, ClipId, ClipInfo, ClipRequest, ClipStatus};

enum ClientCommand {
    Submit { request: ClipRequest },
    FetchStatus { clip_id: ClipId },
    FetchInfo { clip_id: ClipId },
}

/// Completion events pumped back to the controller loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    SubmitFinished {
        result: Result<ClipId, ApiError>,
    },
    StatusFetched {
        clip_id: ClipId,
        result: Result<ClipStatus, ApiError>,
    },
    InfoFetched {
        clip_id: ClipId,
        result: Result<ClipInfo, ApiError>,
    },
}

/// Runs API calls on a dedicated runtime thread. Commands go in over a
/// channel, completion events come back out; the controller loop drains
/// them with `try_recv` between state updates.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(api: impl ClipApi + 'static) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(api);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: ClipRequest) {
        let _ = self.cmd_tx.send(ClientCommand::Submit { request });
    }

    pub fn fetch_status(&self, clip_id: impl Into<ClipId>) {
        let _ = self.cmd_tx.send(ClientCommand::FetchStatus {
            clip_id: clip_id.into(),
        });
    }

    pub fn fetch_info(&self, clip_id: impl Into<ClipId>) {
        let _ = self.cmd_tx.send(ClientCommand::FetchInfo {
            clip_id: clip_id.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(api: &dyn ClipApi, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::Submit { request } => {
            clip_trace!("executing create_clip");
            ClientEvent::SubmitFinished {
                result: api.create_clip(&request).await,
            }
        }
        ClientCommand::FetchStatus { clip_id } => {
            clip_trace!("executing clip_status for {clip_id}");
            let result = api.clip_status(&clip_id).await;
            ClientEvent::StatusFetched { clip_id, result }
        }
        ClientCommand::FetchInfo { clip_id } => {
            clip_trace!("executing clip_info for {clip_id}");
            let result = api.clip_info(&clip_id).await;
            ClientEvent::InfoFetched { clip_id, result }
        }
    }
}
