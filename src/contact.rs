use std::{str::FromStr, time::Duration};

use thiserror::Error;

/// How long "Message Sent!" stays up before the form resets.
pub const ACKNOWLEDGE_WINDOW: Duration = Duration::from_millis(3000);

pub fn acknowledge_window_ms() -> f64 {
    ACKNOWLEDGE_WINDOW.as_millis() as f64
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Identifies one acknowledgment window; only the matching ticket closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ticket: ResetTicket,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    acknowledged: bool,
    pending: Option<ResetTicket>,
    issued: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.pending.is_none()
    }

    /// Replaces one field. Ignored while a submission is being acknowledged.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        if self.pending.is_some() {
            return;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Opens an acknowledgment window, or returns `None` if one is already open.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.pending.is_some() {
            log::debug!("submit ignored, acknowledgment pending");
            return None;
        }
        self.issued += 1;
        let ticket = ResetTicket(self.issued);
        self.pending = Some(ticket);
        self.acknowledged = true;
        log::debug!("contact form submitted by {}", self.name);
        Some(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            ticket,
        })
    }

    /// Timer callback. Returns true if the form was reset.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.acknowledged = false;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        true
    }

    /// Cancels any open window so a late timer fire is a no-op.
    /// Typed fields are kept.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.acknowledged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Email, "ada@example.com");
        form.update_field(ContactField::Message, "Hi");
        form
    }

    #[test]
    fn test_window_length() {
        assert_eq!(acknowledge_window_ms(), 3000.0);
    }

    #[test]
    fn test_field_names() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
        assert!("phone".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_update_field_preserves_others() {
        let mut form = filled();
        form.update_field(ContactField::Email, "ada@lovelace.dev");
        assert_eq!(form.field(ContactField::Name), "Ada");
        assert_eq!(form.field(ContactField::Email), "ada@lovelace.dev");
        assert_eq!(form.field(ContactField::Message), "Hi");
    }

    #[test]
    fn test_submit_and_expire() {
        let mut form = filled();
        let submission = form.submit().expect("first submit should be accepted");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hi");
        assert!(form.acknowledged());
        assert!(!form.is_submit_enabled());

        assert!(form.expire(submission.ticket));
        assert!(!form.acknowledged());
        assert!(form.is_submit_enabled());
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(form.field(field), "");
        }
    }

    #[test]
    fn test_resubmit_blocked_while_pending() {
        let mut form = filled();
        let first = form.submit().unwrap();
        assert_eq!(form.submit(), None);
        assert!(form.expire(first.ticket));
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_fields_frozen_while_pending() {
        let mut form = filled();
        form.submit().unwrap();
        form.update_field(ContactField::Name, "Grace");
        assert_eq!(form.field(ContactField::Name), "Ada");
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = filled();
        let first = form.submit().unwrap();
        assert!(form.expire(first.ticket));
        assert!(!form.expire(first.ticket));

        form.update_field(ContactField::Name, "Grace");
        let second = form.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert!(!form.expire(first.ticket));
        assert!(form.acknowledged());
        assert!(form.expire(second.ticket));
    }

    #[test]
    fn test_teardown_cancels_reset() {
        let mut form = filled();
        let submission = form.submit().unwrap();
        form.teardown();
        form.teardown();
        assert!(!form.expire(submission.ticket));
        assert_eq!(form.field(ContactField::Name), "Ada");
        assert!(!form.acknowledged());
        assert!(form.is_submit_enabled());
    }
}
