//! Contact form state, validation and submission

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use folio_core::prelude::*;
use regex::Regex;
use serde::Serialize;

/// How long the simulated delivery takes on the site
pub const SIMULATED_DELIVERY: Duration = Duration::from_millis(2000);

/// Minimum trimmed message length, in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name / id
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
    MessageTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(Field::Name) => f.write_str("Name is required"),
            FieldError::Required(Field::Email) => f.write_str("Email is required"),
            FieldError::Required(Field::Subject) => f.write_str("Subject is required"),
            FieldError::Required(Field::Message) => f.write_str("Message is required"),
            FieldError::InvalidEmail => f.write_str("Please enter a valid email address"),
            FieldError::MessageTooShort => write!(
                f,
                "Message must be at least {MIN_MESSAGE_CHARS} characters long"
            ),
        }
    }
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern regex")
});

/// Validate every field at once
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required(Field::Name));
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required(Field::Email));
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    if fields.subject.trim().is_empty() {
        errors.insert(Field::Subject, FieldError::Required(Field::Subject));
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::Required(Field::Message));
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(Field::Message, FieldError::MessageTooShort);
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Sends a validated message somewhere
#[trait_variant::make(ContactSubmitter: Send)]
pub trait LocalContactSubmitter {
    async fn deliver(&self, message: &ContactFields) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    errors: FieldErrors,
    status: SubmitStatus,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Inputs are disabled while this is true
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit a field. Clears that field's error only; the rest of the form
    /// is not revalidated.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Validate and, if the form is clean, enter the submitting state.
    ///
    /// Returns the payload to deliver, or `None` when validation failed or a
    /// submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.submitting {
            return None;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            debug!("Contact form has {} invalid fields", self.errors.len());
            return None;
        }

        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Some(self.fields.clone())
    }

    /// Record the delivery outcome. Success clears the form.
    pub fn finish_submit(&mut self, outcome: Result<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                info!("Contact message sent");
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                error!("Contact message failed: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// Full submit cycle against `submitter`
    pub async fn submit(&mut self, submitter: &impl LocalContactSubmitter) -> SubmitStatus {
        let Some(payload) = self.begin_submit() else {
            return self.status;
        };
        let outcome = submitter.deliver(&payload).await;
        self.finish_submit(outcome);
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Waits like the site does, then succeeds or fails
    struct DelayedSubmitter {
        fail: bool,
        calls: AtomicUsize,
    }

    impl DelayedSubmitter {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ContactSubmitter for DelayedSubmitter {
        async fn deliver(&self, _message: &ContactFields) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(SIMULATED_DELIVERY).await;
            if self.fail {
                Err(Error::delivery("simulated outage"))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada Lovelace");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Subject, "Collaboration");
        form.set_field(Field::Message, "Let's build an engine together.");
        form
    }

    #[test]
    fn test_empty_form_has_four_errors() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert_eq!(errors.get(&field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let fields = ContactFields {
            name: "   ".into(),
            email: "a@b.co".into(),
            subject: "\t".into(),
            message: "          \n".into(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::Required(Field::Name)));
        assert_eq!(
            errors.get(&Field::Message),
            Some(&FieldError::Required(Field::Message))
        );
        assert!(!errors.contains_key(&Field::Email));
    }

    #[test]
    fn test_email_shape() {
        let check = |email: &str| {
            let fields = ContactFields {
                email: email.into(),
                ..filled_form().fields
            };
            validate(&fields).get(&Field::Email).copied()
        };
        assert_eq!(check("ada@example.com"), None);
        assert_eq!(check("a.b+c@mail.example.org"), None);
        assert_eq!(check("ada@example"), Some(FieldError::InvalidEmail));
        assert_eq!(check("ada example.com"), Some(FieldError::InvalidEmail));
        assert_eq!(check("@example.com"), Some(FieldError::InvalidEmail));
        assert_eq!(check("ada@@example.com"), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn test_nine_character_message_is_the_only_error() {
        let mut form = filled_form();
        form.set_field(Field::Message, "123456789");

        assert!(form.begin_submit().is_none());

        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(Field::Message), Some(FieldError::MessageTooShort));
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn test_message_length_counts_characters_not_bytes() {
        let mut form = filled_form();
        form.set_field(Field::Message, "čćžšđčćžšđ");
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_typing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors().len(), 4);

        form.set_field(Field::Email, "not-an-email");

        // not revalidated: the bad email is not flagged until the next submit
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("phone"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submit_never_reaches_submitter() {
        let submitter = DelayedSubmitter::new(false);
        let mut form = ContactForm::new();

        let status = form.submit(&submitter).await;

        assert_eq!(status, SubmitStatus::Idle);
        assert_eq!(form.errors().len(), 4);
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_submit_clears_fields() {
        let submitter = DelayedSubmitter::new(false);
        let mut form = filled_form();

        let status = form.submit(&submitter).await;

        assert_eq!(status, SubmitStatus::Success);
        assert_eq!(form.fields, ContactFields::default());
        assert!(!form.is_submitting());
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submit_keeps_fields_for_retry() {
        let submitter = DelayedSubmitter::new(true);
        let mut form = filled_form();

        let status = form.submit(&submitter).await;

        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(form.fields.name, "Ada Lovelace");

        // retry by resubmitting
        let status = form.submit(&DelayedSubmitter::new(false)).await;
        assert_eq!(status, SubmitStatus::Success);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());

        form.finish_submit(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
    }
}
