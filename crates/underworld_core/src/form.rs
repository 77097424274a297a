pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Location,
    Service,
    Budget,
    Timeline,
    Message,
}

impl FormField {
    pub fn parse(raw: &str) -> Option<Self> {
        let field = match raw {
            "name" => FormField::Name,
            "email" => FormField::Email,
            "phone" => FormField::Phone,
            "location" => FormField::Location,
            "service" => FormField::Service,
            "budget" => FormField::Budget,
            "timeline" => FormField::Timeline,
            "message" => FormField::Message,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFlag {
    Confidential,
    Urgent,
}

impl FormFlag {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "confidential" => Some(FormFlag::Confidential),
            "urgent" => Some(FormFlag::Urgent),
            _ => None,
        }
    }
}

/// Hiring request vs. free consultation. Only changes the form's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactKind {
    #[default]
    Hire,
    Consult,
}

impl ContactKind {
    pub fn message_label(self) -> &'static str {
        match self {
            ContactKind::Hire => "📜 Project Details *",
            ContactKind::Consult => "💬 Consultation Request *",
        }
    }

    pub fn message_placeholder(self) -> &'static str {
        match self {
            ContactKind::Hire => {
                "Describe your situation, requirements, and any specific details Kuzhi should know..."
            }
            ContactKind::Consult => "Briefly describe your situation for a free consultation...",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            ContactKind::Hire => "💼 Submit Hiring Request",
            ContactKind::Consult => "📞 Request Free Consultation",
        }
    }
}

/// Current contents of the contact form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
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
}

impl ContactForm {
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Location => &mut self.location,
            FormField::Service => &mut self.service,
            FormField::Budget => &mut self.budget,
            FormField::Timeline => &mut self.timeline,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn set_flag(&mut self, flag: FormFlag, checked: bool) {
        match flag {
            FormFlag::Confidential => self.confidential = checked,
            FormFlag::Urgent => self.urgent = checked,
        }
    }

    /// Required fields that are still empty.
    pub fn missing_required(&self) -> Vec<FormField> {
        [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_submission(&self, timestamp: String) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            service: self.service.clone(),
            budget: self.budget.clone(),
            timeline: self.timeline.clone(),
            message: self.message.clone(),
            confidential: self.confidential,
            urgent: self.urgent,
            timestamp,
        }
    }
}

/// The data bundle handed to the external send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
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
pub enum SendOutcome {
    Delivered,
    Failed { reason: String },
}

/// A send that has been handed off and not yet reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingSend {
    pub(crate) request_id: RequestId,
    /// Name as it was at submit time; the thank-you uses it even if edited since.
    pub(crate) name: String,
}
