use std::time::Duration;

use site_logging::{site_info, site_warn};

use crate::payload::TemplateParams;
use crate::{ContactRequest, SendError};

#[derive(Debug, Clone)]
pub struct MailerSettings {
    /// Address the contact request is delivered to.
    pub recipient: String,
    /// How long the simulated delivery takes.
    pub send_delay: Duration,
    /// Make the simulated delivery fail, to exercise the error path.
    pub reject_all: bool,
}

impl Default for MailerSettings {
    fn default() -> Self {
        Self {
            recipient: "owner@example.com".to_string(),
            send_delay: Duration::from_secs(2),
            reject_all: false,
        }
    }
}

/// The external send operation. One call is one delivery attempt.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> Result<(), SendError>;
}

/// Stand-in for a real delivery service: logs the payload and resolves
/// after `send_delay`.
#[derive(Debug, Clone)]
pub struct SimulatedMailer {
    settings: MailerSettings,
}

impl SimulatedMailer {
    pub fn new(settings: MailerSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Mailer for SimulatedMailer {
    async fn send(&self, request: &ContactRequest) -> Result<(), SendError> {
        let payload = TemplateParams::new(&self.settings.recipient, request).to_json()?;
        site_info!("contact request to be emailed: {}", payload);

        tokio::time::sleep(self.settings.send_delay).await;

        if self.settings.reject_all {
            site_warn!("simulated mailer rejecting request from {}", request.email);
            return Err(SendError::Rejected("simulated rejection".to_string()));
        }
        Ok(())
    }
}
