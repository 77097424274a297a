use std::collections::BTreeMap;
use std::time::Duration;

use crate::{Effect, TimerId, TimerPurpose};

/// Book of timers the core has asked the host to run.
///
/// A timer is pending from `start` until it is either taken (it fired) or
/// cancelled. Firings for ids that are no longer pending are ignored, which
/// makes a cancel that races with the host's timer harmless.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TimerBook {
    next_id: TimerId,
    pending: BTreeMap<TimerId, TimerPurpose>,
}

impl TimerBook {
    pub(crate) fn start(
        &mut self,
        after: Duration,
        purpose: TimerPurpose,
        effects: &mut Vec<Effect>,
    ) -> TimerId {
        self.next_id += 1;
        let timer = self.next_id;
        self.pending.insert(timer, purpose);
        effects.push(Effect::StartTimer { timer, after });
        timer
    }

    pub(crate) fn cancel(&mut self, timer: TimerId, effects: &mut Vec<Effect>) {
        if self.pending.remove(&timer).is_some() {
            effects.push(Effect::CancelTimer { timer });
        }
    }

    pub(crate) fn take(&mut self, timer: TimerId) -> Option<TimerPurpose> {
        self.pending.remove(&timer)
    }

    pub(crate) fn purpose(&self, timer: TimerId) -> Option<TimerPurpose> {
        self.pending.get(&timer).copied()
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
