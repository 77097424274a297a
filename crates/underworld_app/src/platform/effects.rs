use site_logging::{site_debug, site_info, site_warn};
use underworld_core::{ContactSubmission, Effect, Msg, SendOutcome};
use underworld_engine::{ContactRequest, EngineEvent, EngineHandle};

use super::ui::constants::Slot;
use super::ui::surface::{Surface, SurfaceCommand};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Timers and sends go to the engine; scrolling is a surface concern.
    pub fn run(&self, effects: Vec<Effect>, surface: &mut dyn Surface) {
        for effect in effects {
            match effect {
                Effect::StartTimer { timer, after } => {
                    site_debug!("StartTimer timer={} after_ms={}", timer, after.as_millis());
                    self.engine.start_timer(timer, after);
                }
                Effect::CancelTimer { timer } => {
                    site_debug!("CancelTimer timer={}", timer);
                    self.engine.cancel_timer(timer);
                }
                Effect::SendContactRequest {
                    request_id,
                    submission,
                } => {
                    site_info!(
                        "SendContactRequest request_id={} urgent={}",
                        request_id,
                        submission.urgent
                    );
                    self.engine.send(request_id, map_submission(submission));
                }
                Effect::ScrollStoryIntoView => {
                    surface.apply(SurfaceCommand::ScrollIntoView(Slot::StoryContent));
                }
            }
        }
    }
}

fn map_submission(submission: ContactSubmission) -> ContactRequest {
    ContactRequest {
        name: submission.name,
        email: submission.email,
        phone: submission.phone,
        location: submission.location,
        service: submission.service,
        budget: submission.budget,
        timeline: submission.timeline,
        message: submission.message,
        confidential: submission.confidential,
        urgent: submission.urgent,
        timestamp: submission.timestamp,
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SendCompleted { request_id, result } => {
            let outcome = match result {
                Ok(()) => SendOutcome::Delivered,
                Err(err) => {
                    site_warn!("Send {} failed: {}", request_id, err);
                    SendOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };
            Msg::ContactSendFinished {
                request_id,
                outcome,
            }
        }
        EngineEvent::TimerElapsed { timer } => Msg::TimerElapsed { timer },
    }
}
