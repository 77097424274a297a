use std::time::Duration;

use crate::{ContactSubmission, NotificationId, RequestId};

pub type TimerId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire `Msg::TimerElapsed { timer }` once `after` has passed.
    StartTimer { timer: TimerId, after: Duration },
    /// Drop a timer started earlier. Unknown or already fired ids are fine.
    CancelTimer { timer: TimerId },
    /// Hand the form data to the external send operation. Exactly one
    /// `Msg::ContactSendFinished` with the same `request_id` is expected back.
    SendContactRequest {
        request_id: RequestId,
        submission: ContactSubmission,
    },
    ScrollStoryIntoView,
}

/// What a pending timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    AutoDismiss(NotificationId),
    RemoveNotification(NotificationId),
    CloseHelp,
    ShowWelcome,
    StartCardReveal,
    RevealCard(usize),
    ScrollToStory,
}
