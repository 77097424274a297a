use serde::Serialize;

use crate::{ContactRequest, SendError};

/// Template parameters in the shape the delivery template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams<'a> {
    pub to_email: &'a str,
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub service: &'a str,
    pub budget: &'a str,
    pub timeline: &'a str,
    pub message: &'a str,
    pub confidential: &'static str,
    pub urgent: &'static str,
    pub timestamp: &'a str,
}

impl<'a> TemplateParams<'a> {
    pub fn new(recipient: &'a str, request: &'a ContactRequest) -> Self {
        Self {
            to_email: recipient,
            from_name: &request.name,
            from_email: &request.email,
            phone: &request.phone,
            location: &request.location,
            service: &request.service,
            budget: &request.budget,
            timeline: &request.timeline,
            message: &request.message,
            confidential: yes_no(request.confidential),
            urgent: yes_no(request.urgent),
            timestamp: &request.timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, SendError> {
        serde_json::to_string(self).map_err(|err| SendError::Encoding(err.to_string()))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
