use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use site_logging::site_trace;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, TimerId};

type LiveTimers = Arc<Mutex<HashMap<TimerId, CancellationToken>>>;

/// One-shot timers on a tokio runtime, each with a cancellation handle.
///
/// A fired timer reports `EngineEvent::TimerElapsed`; a cancelled one
/// reports nothing.
pub struct TimerService {
    runtime: Handle,
    events: mpsc::Sender<EngineEvent>,
    live: LiveTimers,
}

impl TimerService {
    pub fn new(runtime: Handle, events: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            events,
            live: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Arms `timer`. Re-arming a live id replaces the earlier deadline.
    pub fn start(&self, timer: TimerId, after: Duration) {
        let token = CancellationToken::new();
        if let Some(previous) = lock(&self.live).insert(timer, token.clone()) {
            previous.cancel();
        }

        let live = self.live.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    site_trace!("timer {} cancelled", timer);
                }
                _ = tokio::time::sleep(after) => {
                    // Cancellation happens under the same lock, so a cancel
                    // that returned true can never be followed by a firing.
                    let mut guard = lock(&live);
                    if token.is_cancelled() {
                        return;
                    }
                    guard.remove(&timer);
                    let _ = events.send(EngineEvent::TimerElapsed { timer });
                }
            }
        });
    }

    /// Cancels `timer`; returns whether it was still live.
    pub fn cancel(&self, timer: TimerId) -> bool {
        match lock(&self.live).remove(&timer) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        lock(&self.live).len()
    }
}

fn lock(live: &LiveTimers) -> MutexGuard<'_, HashMap<TimerId, CancellationToken>> {
    live.lock().unwrap_or_else(PoisonError::into_inner)
}
