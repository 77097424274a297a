use std::time::Duration;

use crate::timers::TimerBook;
use crate::{Effect, TimerId, TimerPurpose};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }

    /// Background colour token for the toast.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196F3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    /// Sliding out; removed when the removal timer fires.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
    timer: Option<TimerId>,
}

/// The single notification slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NotificationSlot {
    next_id: NotificationId,
    current: Option<Notification>,
}

impl NotificationSlot {
    pub(crate) fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces whatever is shown with a new notification and arms its
    /// auto-dismiss timer. The old one disappears without a transition.
    pub(crate) fn show(
        &mut self,
        message: String,
        severity: Severity,
        ttl: Duration,
        timers: &mut TimerBook,
        effects: &mut Vec<Effect>,
    ) -> NotificationId {
        if let Some(old) = self.current.take() {
            if let Some(timer) = old.timer {
                timers.cancel(timer, effects);
            }
        }
        self.next_id += 1;
        let id = self.next_id;
        let timer = timers.start(ttl, TimerPurpose::AutoDismiss(id), effects);
        self.current = Some(Notification {
            id,
            message,
            severity,
            phase: Phase::Visible,
            timer: Some(timer),
        });
        id
    }

    /// Starts the slide-out of notification `id` if it is current and still
    /// visible. Returns whether anything changed.
    pub(crate) fn begin_leave(
        &mut self,
        id: NotificationId,
        leave: Duration,
        timers: &mut TimerBook,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        if current.id != id || current.phase != Phase::Visible {
            return false;
        }
        if let Some(timer) = current.timer.take() {
            timers.cancel(timer, effects);
        }
        current.phase = Phase::Leaving;
        current.timer = Some(timers.start(leave, TimerPurpose::RemoveNotification(id), effects));
        true
    }

    /// Removes notification `id` if it is still the current one.
    pub(crate) fn remove(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|current| current.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(5);
    const LEAVE: Duration = Duration::from_millis(300);

    #[test]
    fn new_notification_cancels_old_timer() {
        let mut slot = NotificationSlot::default();
        let mut timers = TimerBook::default();
        let mut effects = Vec::new();
        slot.show("one".into(), Severity::Info, TTL, &mut timers, &mut effects);
        effects.clear();

        slot.show("two".into(), Severity::Error, TTL, &mut timers, &mut effects);

        assert_eq!(
            effects,
            vec![
                Effect::CancelTimer { timer: 1 },
                Effect::StartTimer {
                    timer: 2,
                    after: TTL
                },
            ]
        );
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("two"));
        assert_eq!(timers.pending_count(), 1);
    }

    #[test]
    fn leave_is_only_started_once() {
        let mut slot = NotificationSlot::default();
        let mut timers = TimerBook::default();
        let mut effects = Vec::new();
        let id = slot.show("hi".into(), Severity::Success, TTL, &mut timers, &mut effects);

        assert!(slot.begin_leave(id, LEAVE, &mut timers, &mut effects));
        assert!(!slot.begin_leave(id, LEAVE, &mut timers, &mut effects));
        assert_eq!(slot.current().map(|n| n.phase), Some(Phase::Leaving));
    }

    #[test]
    fn stale_removal_is_a_no_op() {
        let mut slot = NotificationSlot::default();
        let mut timers = TimerBook::default();
        let mut effects = Vec::new();
        let first = slot.show("a".into(), Severity::Info, TTL, &mut timers, &mut effects);
        let second = slot.show("b".into(), Severity::Info, TTL, &mut timers, &mut effects);

        assert!(!slot.remove(first));
        assert_eq!(slot.current().map(|n| n.id), Some(second));
        assert!(slot.remove(second));
        assert!(!slot.remove(second));
    }
}
