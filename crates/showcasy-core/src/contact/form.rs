use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use super::transport::{Submission, SubmissionTransport};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Text inputs on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::Company => "Company Name",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Hello...",
            Field::Email => "Where can I reply?",
            Field::Company => "Your company or website?",
            Field::Message => "I want to build some..",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        };
        f.write_str(key)
    }
}

/// Field-level validation messages
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent
    Invalid,
    /// The transport accepted the submission
    Sent,
    /// The transport failed; all entered values are kept
    Failed(String),
}

/// Contact form values and validation state
///
/// Every mounted form gets its own `id`; clones share it, so a background
/// send can be matched back to the form it came from.
#[derive(Debug, Clone)]
pub struct ContactForm {
    id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub services: Vec<String>,
    pub budget: Option<String>,
    errors: FieldErrors,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            email: String::new(),
            company: String::new(),
            message: String::new(),
            services: Vec::new(),
            budget: None,
            errors: FieldErrors::new(),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of this form instance
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }

    /// Replace a field's value (one keystroke worth of change)
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Add or remove a service chip
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    pub fn is_service_selected(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Select a budget range (single choice)
    pub fn select_budget(&mut self, budget: &str) {
        self.budget = Some(budget.to_string());
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validate the current values, replacing the stored error map
    ///
    /// Name, email and message are required; email must look like an address.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !email_pattern().is_match(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email");
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required");
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Snapshot of the current values as a transport payload
    pub fn to_submission(&self) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            services: self.services.clone(),
            budget: self.budget.clone().unwrap_or_default(),
            message: self.message.trim().to_string(),
            submitted_at: Utc::now(),
        }
    }

    /// Validate and, when valid, hand the values to the transport
    ///
    /// Invalid forms never reach the transport. A transport failure leaves
    /// every entered value in place.
    pub async fn submit(&mut self, transport: &dyn SubmissionTransport) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Invalid;
        }
        let submission = self.to_submission();

        match transport.send(&submission).await {
            Ok(()) => {
                info!(id = %submission.id, "Contact form submitted");
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Clear values and errors after a successful send, keeping the identity
    pub fn reset(&mut self) {
        *self = Self {
            id: self.id,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::transport::tests::RecordingTransport;

    #[test]
    fn test_invalid_email_and_empty_name() {
        let mut form = ContactForm::new();
        form.set(Field::Email, "not-an-email");
        form.set(Field::Company, "Acme");
        form.set(Field::Message, "Hi there");

        assert!(!form.validate());
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.error(Field::Name), Some("Name is required"));
        assert_eq!(form.error(Field::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn test_message_required() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        assert!(!form.validate());
        assert_eq!(form.error(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_whitespace_name_is_empty() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "   ");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello");
        assert!(!form.validate());
        assert_eq!(form.errors().keys().copied().collect::<Vec<_>>(), vec![Field::Name]);
    }

    #[test]
    fn test_toggle_service_and_budget() {
        let mut form = ContactForm::new();
        form.toggle_service("Branding");
        form.toggle_service("Logo Design");
        form.toggle_service("Branding");
        assert_eq!(form.services, vec!["Logo Design".to_string()]);

        form.select_budget("$1k - $5k");
        form.select_budget(">$50k");
        assert_eq!(form.budget.as_deref(), Some(">$50k"));
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut form = ContactForm::new();
        let id = form.id();
        form.set(Field::Name, "Ada");
        let sending = form.clone();
        form.reset();

        assert_eq!(form.id(), id);
        assert_eq!(sending.id(), id);
        assert_eq!(form.name, "");
        assert_ne!(ContactForm::new().id(), id);
    }

    #[tokio::test]
    async fn test_submit_blocked_then_sent_once() {
        let transport = RecordingTransport::default();
        let mut form = ContactForm::new();
        form.set(Field::Email, "not-an-email");
        form.set(Field::Company, "Acme");
        form.set(Field::Message, "Let's build a site");

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 2);
        assert!(form.errors().contains_key(&Field::Name));
        assert!(form.errors().contains_key(&Field::Email));
        assert_eq!(transport.calls(), 0);

        form.set(Field::Name, "Ada Lovelace");
        form.set(Field::Email, "ada@example.com");
        form.toggle_service("Branding");
        form.select_budget("$5k - $10k");

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Sent);
        assert!(form.errors().is_empty());
        assert_eq!(transport.calls(), 1);

        let sent = transport.last().unwrap();
        assert_eq!(sent.name, "Ada Lovelace");
        assert_eq!(sent.email, "ada@example.com");
        assert_eq!(sent.company, "Acme");
        assert_eq!(sent.services, vec!["Branding".to_string()]);
        assert_eq!(sent.budget, "$5k - $10k");
        assert_eq!(sent.message, "Let's build a site");
    }

    #[tokio::test]
    async fn test_failure_keeps_entered_values() {
        let transport = RecordingTransport::failing();
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello");

        let outcome = form.submit(&transport).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hello");
        assert_eq!(transport.calls(), 1);
    }
}
