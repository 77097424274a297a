use thiserror::Error;

pub type RequestId = u64;
pub type TimerId = u64;

/// Contact form data as handed to a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub confidential: bool,
    pub urgent: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SendCompleted {
        request_id: RequestId,
        result: Result<(), SendError>,
    },
    TimerElapsed {
        timer: TimerId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("delivery rejected: {0}")]
    Rejected(String),
    #[error("could not encode payload: {0}")]
    Encoding(String),
    #[error("engine stopped before the send completed")]
    Shutdown,
}
