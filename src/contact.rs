//! Contact form validation

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const ACCEPTED_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
pub const REJECTED_MESSAGE: &str = "Please fill in all fields.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected { missing: Vec<ContactField> },
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// Short reason, `None` when accepted
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected { .. } => Some("missing fields"),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationOutcome::Accepted => ACCEPTED_MESSAGE,
            ValidationOutcome::Rejected { .. } => REJECTED_MESSAGE,
        }
    }
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy of this form with surrounding whitespace removed
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }

    /// Accept iff every field is non-empty. Email syntax is not checked.
    #[must_use]
    pub fn validate(&self) -> ValidationOutcome {
        let missing: Vec<ContactField> = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::Rejected { missing }
        }
    }

    /// Validate and reset the fields once accepted
    pub fn submit(&mut self) -> ValidationOutcome {
        let outcome = self.validate();
        if outcome.is_accepted() {
            tracing::info!("Contact message accepted");
            self.clear();
        } else {
            tracing::debug!("Contact message rejected: {:?}", outcome);
        }
        outcome
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
