//! Contact form state
//!
//! Field data, validation rules, and the submit cycle:
//!
//! ```text
//!  Editing --submit(valid)--> Submitted --finish_submission()--> Editing (cleared)
//!     |
//!     +--submit(invalid)--> Editing (errors shown, data kept)
//! ```
//!
//! The UI schedules `finish_submission()` [`SUBMITTED_DISPLAY`] after a
//! successful submit.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SiteResult;

/// How long the "Submitted!" state stays up before the form clears
pub const SUBMITTED_DISPLAY: Duration = Duration::from_millis(2000);

/// A contact form input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Input name / id attribute
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }
}

/// What the visitor typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Per-field validation messages; empty means the form is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<const N: usize> From<[(FormField, &str); N]> for FormErrors {
    fn from(entries: [(FormField, &str); N]) -> Self {
        Self(entries.into_iter().map(|(f, m)| (f, m.to_string())).collect())
    }
}

/// Check every field; the result is rebuilt from scratch each call.
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();

    if data.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    let email = data.email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(FormField::Email, "Email is invalid");
    }

    if data.message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required");
    }

    errors
}

/// `local@domain.tld` shape: no whitespace, something before an `@`, and a
/// `.` after it with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    email.match_indices('@').any(|(at, _)| {
        let domain = &email[at + 1..];
        at > 0
            && domain
                .match_indices('.')
                .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}

/// Where accepted submissions go
pub trait SubmissionSink {
    fn accept(&self, data: &FormData) -> SiteResult<()>;
}

/// Sink that records the submission in the log and reports success
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&self, data: &FormData) -> SiteResult<()> {
        tracing::info!(
            name = %data.name,
            email = %data.email,
            message_len = data.message.chars().count(),
            "Form submitted"
        );
        Ok(())
    }
}

/// Phase of the submit cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Accepted; shown briefly before the form clears
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handed to the sink; the form is now in [`FormStatus::Submitted`]
    Accepted,
    /// Validation failed; data kept, errors attached to the form
    Rejected(FormErrors),
    /// A previous submission is still on display
    Pending,
}

/// The contact form: data, current errors, and submit phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
    errors: FormErrors,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Record an input change. Errors stay until the next submit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Validate and, if clean, pass the data to `sink`.
    ///
    /// A sink error leaves the form untouched so the visitor can retry.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> SiteResult<SubmitOutcome> {
        if self.is_submitted() {
            return Ok(SubmitOutcome::Pending);
        }

        let errors = validate(&self.data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "Contact form rejected");
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        sink.accept(&self.data)?;
        self.errors.clear();
        self.status = FormStatus::Submitted;
        Ok(SubmitOutcome::Accepted)
    }

    /// End the submitted display: clear the data and return to editing.
    ///
    /// No-op unless a submission is on display.
    pub fn finish_submission(&mut self) {
        if self.is_submitted() {
            self.data = FormData::default();
            self.status = FormStatus::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<FormData>>);

    impl SubmissionSink for RecordingSink {
        fn accept(&self, data: &FormData) -> SiteResult<()> {
            self.0.borrow_mut().push(data.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn accept(&self, _data: &FormData) -> SiteResult<()> {
            Err(SiteError::Submission("offline".to_string()))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "A");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Message, "hi");
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&FormData::default());
        assert_eq!(
            errors,
            FormErrors::from([
                (FormField::Name, "Name is required"),
                (FormField::Email, "Email is required"),
                (FormField::Message, "Message is required"),
            ])
        );
    }

    #[test]
    fn bad_email_is_the_only_error() {
        let errors = validate(&FormData::new("A", "bad-email", "hi"));
        assert_eq!(errors, FormErrors::from([(FormField::Email, "Email is invalid")]));
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&FormData::new("A", "a@b.com", "hi")).is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&FormData::new("   ", " \t", "\n"));
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Message), Some("Message is required"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("ab.c"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_email() {
        assert!(validate(&FormData::new("A", "  a@b.com ", "hi")).is_empty());
    }

    #[test]
    fn rejected_submit_keeps_data() {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "nope");
        let sink = RecordingSink::default();

        let outcome = form.submit(&sink).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.len() == 2));
        assert_eq!(form.data().name, "Ada");
        assert_eq!(form.errors().get(FormField::Email), Some("Email is invalid"));
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn accepted_submit_then_finish_clears() {
        let mut form = filled();
        let sink = RecordingSink::default();

        assert_eq!(form.submit(&sink).unwrap(), SubmitOutcome::Accepted);
        assert!(form.is_submitted());
        assert!(form.errors().is_empty());
        assert_eq!(sink.0.borrow().len(), 1);

        form.finish_submission();
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(form.data().is_empty());
    }

    #[test]
    fn errors_clear_on_successful_submit() {
        let mut form = ContactForm::new();
        let sink = RecordingSink::default();
        form.submit(&sink).unwrap();
        assert_eq!(form.errors().len(), 3);

        form.set_field(FormField::Name, "A");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Message, "hi");
        assert_eq!(form.submit(&sink).unwrap(), SubmitOutcome::Accepted);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn second_submit_while_displayed_is_pending() {
        let mut form = filled();
        let sink = RecordingSink::default();
        form.submit(&sink).unwrap();
        assert_eq!(form.submit(&sink).unwrap(), SubmitOutcome::Pending);
        assert_eq!(sink.0.borrow().len(), 1);
    }

    #[test]
    fn sink_failure_leaves_form_editable() {
        let mut form = filled();
        let err = form.submit(&FailingSink).unwrap_err();
        assert!(matches!(err, SiteError::Submission(_)));
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.data().email, "a@b.com");
    }

    #[test]
    fn finish_without_submission_is_noop() {
        let mut form = filled();
        form.finish_submission();
        assert_eq!(form.data().name, "A");
    }

    #[test]
    fn log_sink_accepts() {
        assert!(LogSink.accept(&FormData::new("A", "a@b.com", "hi")).is_ok());
    }
}
