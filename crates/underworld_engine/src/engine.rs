use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use site_logging::{site_debug, site_error};

use crate::mailer::{Mailer, MailerSettings, SimulatedMailer};
use crate::timer::TimerService;
use crate::{ContactRequest, EngineEvent, RequestId, SendError, TimerId};

enum EngineCommand {
    Send {
        request_id: RequestId,
        request: ContactRequest,
    },
    StartTimer {
        timer: TimerId,
        after: Duration,
    },
    CancelTimer {
        timer: TimerId,
    },
}

/// Handle to the engine worker thread, which owns a tokio runtime that runs
/// sends and timers. Dropping the handle stops the worker once queued
/// commands are drained.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Starts an engine backed by the simulated mailer.
    pub fn new(settings: MailerSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        Self::with_mailer(Arc::new(SimulatedMailer::new(settings)))
    }

    pub fn with_mailer(mailer: Arc<dyn Mailer>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    site_error!("engine runtime failed to start: {}", err);
                    drain_without_runtime(cmd_rx, event_tx);
                    return;
                }
            };
            let timers = TimerService::new(runtime.handle().clone(), event_tx.clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Send {
                        request_id,
                        request,
                    } => {
                        let mailer = mailer.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = mailer.send(&request).await;
                            let _ = event_tx.send(EngineEvent::SendCompleted { request_id, result });
                        });
                    }
                    EngineCommand::StartTimer { timer, after } => timers.start(timer, after),
                    EngineCommand::CancelTimer { timer } => {
                        if !timers.cancel(timer) {
                            site_debug!("timer {} already gone", timer);
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn send(&self, request_id: RequestId, request: ContactRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Send {
            request_id,
            request,
        });
    }

    pub fn start_timer(&self, timer: TimerId, after: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::StartTimer { timer, after });
    }

    pub fn cancel_timer(&self, timer: TimerId) {
        let _ = self.cmd_tx.send(EngineCommand::CancelTimer { timer });
    }
}

/// Without a runtime no work can run; fail every send so callers leave their
/// pending state instead of waiting forever.
fn drain_without_runtime(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    while let Ok(command) = cmd_rx.recv() {
        if let EngineCommand::Send { request_id, .. } = command {
            let _ = event_tx.send(EngineEvent::SendCompleted {
                request_id,
                result: Err(SendError::Shutdown),
            });
        }
    }
}
