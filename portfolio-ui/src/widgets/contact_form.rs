//! Contact Form State
//!
//! The draft behind the contact form and what a submission result does to it.

use serde::Serialize;

/// Fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form control name, matching the JSON key sent to the server
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    /// `type` attribute for single-line inputs
    pub fn input_type(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Update the draft for a finished submission: cleared when sent,
    /// untouched when it failed.
    pub fn apply(&mut self, outcome: SubmitOutcome) {
        if outcome == SubmitOutcome::Sent {
            self.clear();
        }
    }
}

/// Result of one submission, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    /// Classify a server reply. A reply body that could not be read counts
    /// only by its status.
    pub fn from_reply(status_ok: bool, reported_success: Option<bool>) -> Self {
        if status_ok && reported_success.unwrap_or(true) {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        }
    }

    /// Notification text
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => "Message sent successfully!",
            SubmitOutcome::Failed => "Failed to send message. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::FirstName, "Ada");
        draft.set(ContactField::LastName, "Lovelace");
        draft.set(ContactField::Email, "ada@example.com");
        draft.set(ContactField::Subject, "Website");
        draft.set(ContactField::Message, "Hello there");
        draft
    }

    #[test]
    fn test_set_and_get() {
        let draft = filled();
        assert_eq!(draft.get(ContactField::Email), "ada@example.com");
        assert_eq!(draft.get(ContactField::Message), "Hello there");
        assert_eq!(draft.first_name, "Ada");
    }

    #[test]
    fn test_serializes_with_form_names() {
        let json = serde_json::to_value(filled()).unwrap();
        for field in ContactField::ALL {
            assert!(json.get(field.name()).is_some(), "missing {}", field.name());
        }
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_successful_submission_clears_draft() {
        let mut draft = filled();
        let outcome = SubmitOutcome::from_reply(true, Some(true));

        draft.apply(outcome);

        assert_eq!(outcome.notice(), "Message sent successfully!");
        for field in ContactField::ALL {
            assert_eq!(draft.get(field), "");
        }
    }

    #[test]
    fn test_failed_submission_keeps_draft() {
        let mut draft = filled();
        let outcome = SubmitOutcome::Failed;

        draft.apply(outcome);

        assert_eq!(draft, filled());
        assert_eq!(outcome.notice(), "Failed to send message. Please try again.");
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(SubmitOutcome::from_reply(true, Some(true)), SubmitOutcome::Sent);
        assert_eq!(SubmitOutcome::from_reply(true, None), SubmitOutcome::Sent);
        assert_eq!(SubmitOutcome::from_reply(true, Some(false)), SubmitOutcome::Failed);
        assert_eq!(SubmitOutcome::from_reply(false, Some(true)), SubmitOutcome::Failed);
        assert_eq!(SubmitOutcome::from_reply(false, None), SubmitOutcome::Failed);
    }

    #[test]
    fn test_email_field_type() {
        assert_eq!(ContactField::Email.input_type(), "email");
        assert_eq!(ContactField::Subject.input_type(), "text");
    }
}
