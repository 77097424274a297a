#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Once;
use std::time::Duration;

use underworld_core::{
    update, AppState, AppViewModel, ContactSubmission, Effect, Msg, RequestId, SiteConfig,
    TimerId,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

/// Drives an `AppState` the way the host does, with a virtual clock in place
/// of real timers.
pub struct Harness {
    state: AppState,
    now: Duration,
    timers: BTreeMap<TimerId, Duration>,
    pub sends: Vec<(RequestId, ContactSubmission)>,
    pub scrolls: usize,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        init_logging();
        Self {
            state: AppState::with_config(config),
            now: Duration::ZERO,
            timers: BTreeMap::new(),
            sends: Vec::new(),
            scrolls: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Applies `msg` and executes the resulting effects. Returns the effects.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in &effects {
            match effect {
                Effect::StartTimer { timer, after } => {
                    self.timers.insert(*timer, self.now + *after);
                }
                Effect::CancelTimer { timer } => {
                    self.timers.remove(timer);
                }
                Effect::SendContactRequest {
                    request_id,
                    submission,
                } => self.sends.push((*request_id, submission.clone())),
                Effect::ScrollStoryIntoView => self.scrolls += 1,
            }
        }
        effects
    }

    /// Moves the clock forward, firing due timers in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, due)| **due <= target)
                .min_by_key(|(timer, due)| (**due, **timer))
                .map(|(timer, due)| (*timer, *due));
            let Some((timer, due)) = next else {
                break;
            };
            self.timers.remove(&timer);
            self.now = due;
            self.dispatch(Msg::TimerElapsed { timer });
        }
        self.now = target;
    }

    pub fn notification_message(&self) -> Option<String> {
        self.view().notification.map(|n| n.message)
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
