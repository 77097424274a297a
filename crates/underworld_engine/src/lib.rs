//! Underworld engine: effect execution for the site core (sends and timers).
mod engine;
mod mailer;
mod payload;
mod timer;
mod types;

pub use engine::EngineHandle;
pub use mailer::{Mailer, MailerSettings, SimulatedMailer};
pub use payload::TemplateParams;
pub use timer::TimerService;
pub use types::{ContactRequest, EngineEvent, RequestId, SendError, TimerId};
