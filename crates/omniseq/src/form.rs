//! The contact form state machine.
//!
//! Validation order, rules, and user-facing messages mirror the site copy.
//! Deadlines live inside the state, so a superseding submit replaces the
//! pending revert instead of racing it.

use std::time::{Duration, Instant};

/// Form fields, in validation and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn previous(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// What the form is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// The first failing rule's message. Reverts to idle at the deadline
    /// without clearing the fields.
    ErrorShown { message: String, until: Instant },
    /// The thank-you message. Fields clear at the deadline.
    SuccessShown { message: String, until: Instant },
}

/// A validated, trimmed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

const ERROR_DELAY: Duration = Duration::from_secs(4);
const SUCCESS_DELAY: Duration = Duration::from_secs(5);

const MIN_NAME_CHARS: usize = 2;
const MIN_SUBJECT_CHARS: usize = 3;
const MIN_MESSAGE_CHARS: usize = 10;

/// The contact form: four text fields plus the display phase.
#[derive(Debug)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            phase: Phase::Idle,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn backspace(&mut self, field: Field) {
        self.field_mut(field).pop();
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Validate and submit. While the success message is showing, submits
    /// are ignored; during the error display a submit re-validates and
    /// replaces the pending revert.
    pub fn submit(&mut self, now: Instant) -> Option<Submission> {
        if matches!(self.phase, Phase::SuccessShown { .. }) {
            return None;
        }
        match self.validate() {
            Err(message) => {
                self.phase = Phase::ErrorShown {
                    message,
                    until: now + ERROR_DELAY,
                };
                None
            }
            Ok(submission) => {
                self.phase = Phase::SuccessShown {
                    message: format!(
                        "Thank you, {}! We've received your message and will contact you within 24 hours.",
                        submission.name
                    ),
                    until: now + SUCCESS_DELAY,
                };
                Some(submission)
            }
        }
    }

    /// Advance the timed reverts.
    pub fn tick(&mut self, now: Instant) {
        match &self.phase {
            Phase::ErrorShown { until, .. } if now >= *until => {
                self.phase = Phase::Idle;
            }
            Phase::SuccessShown { until, .. } if now >= *until => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    /// First failing rule wins; later fields are not inspected.
    fn validate(&self) -> Result<Submission, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please enter your name".to_string());
        }
        if name.chars().count() < MIN_NAME_CHARS {
            return Err("Name must be at least 2 characters".to_string());
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err("Please enter a valid email address".to_string());
        }
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err("Please enter a subject".to_string());
        }
        if subject.chars().count() < MIN_SUBJECT_CHARS {
            return Err("Subject must be at least 3 characters".to_string());
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err("Please enter your message".to_string());
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err("Message must be at least 10 characters".to_string());
        }
        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// `local@domain.tld`: non-empty local part, exactly one `@`, a dot in the
/// domain with text on both sides, no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        for c in "Al".chars() {
            form.push_char(Field::Name, c);
        }
        for c in "a@b.co".chars() {
            form.push_char(Field::Email, c);
        }
        for c in "Contact".chars() {
            form.push_char(Field::Subject, c);
        }
        for c in "Hello there, this is long enough".chars() {
            form.push_char(Field::Message, c);
        }
        form
    }

    fn set(form: &mut ContactForm, field: Field, value: &str) {
        while !form.field(field).is_empty() {
            form.backspace(field);
        }
        for c in value.chars() {
            form.push_char(field, c);
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut form = filled();
        set(&mut form, Field::Name, "");
        set(&mut form, Field::Email, "bad");
        assert!(form.submit(Instant::now()).is_none());
        match form.phase() {
            Phase::ErrorShown { message, .. } => assert_eq!(message, "Please enter your name"),
            other => panic!("expected error phase, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_valid_submission() {
        let mut form = filled();
        let submission = form.submit(Instant::now()).expect("should submit");
        assert_eq!(submission.name, "Al");
        match form.phase() {
            Phase::SuccessShown { message, .. } => assert!(message.contains("Al")),
            other => panic!("expected success phase, got {other:?}"),
        }
    }

    #[test]
    fn test_message_length_boundary() {
        let mut form = filled();
        set(&mut form, Field::Message, "123456789");
        assert!(form.submit(Instant::now()).is_none());
        match form.phase() {
            Phase::ErrorShown { message, .. } => {
                assert_eq!(message, "Message must be at least 10 characters");
            }
            other => panic!("expected error phase, got {other:?}"),
        }

        set(&mut form, Field::Message, "1234567890");
        assert!(form.submit(Instant::now()).is_some());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = filled();
        set(&mut form, Field::Name, "  Al  ");
        let submission = form.submit(Instant::now()).expect("should submit");
        assert_eq!(submission.name, "Al");
    }

    #[test]
    fn test_error_reverts_after_delay_keeping_fields() {
        let start = Instant::now();
        let mut form = filled();
        set(&mut form, Field::Email, "not-an-email");
        form.submit(start);

        form.tick(start + Duration::from_millis(3_999));
        assert!(matches!(form.phase(), Phase::ErrorShown { .. }));

        form.tick(start + Duration::from_secs(4));
        assert_eq!(*form.phase(), Phase::Idle);
        assert_eq!(form.field(Field::Email), "not-an-email");
    }

    #[test]
    fn test_success_clears_fields_after_delay() {
        let start = Instant::now();
        let mut form = filled();
        form.submit(start);

        form.tick(start + Duration::from_secs(4));
        assert!(matches!(form.phase(), Phase::SuccessShown { .. }));

        form.tick(start + Duration::from_secs(5));
        assert_eq!(*form.phase(), Phase::Idle);
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[test]
    fn test_resubmit_blocked_only_while_success_shows() {
        let start = Instant::now();
        let mut form = filled();
        form.submit(start);
        assert!(form.submit(start + Duration::from_secs(1)).is_none());
        assert!(matches!(form.phase(), Phase::SuccessShown { .. }));
    }

    #[test]
    fn test_resubmit_during_error_revalidates() {
        let start = Instant::now();
        let mut form = filled();
        set(&mut form, Field::Subject, "");
        form.submit(start);
        assert!(matches!(form.phase(), Phase::ErrorShown { .. }));

        set(&mut form, Field::Subject, "Contact");
        let submission = form.submit(start + Duration::from_secs(1));
        assert!(submission.is_some());
    }

    #[test]
    fn test_superseding_submit_replaces_deadline() {
        let start = Instant::now();
        let mut form = filled();
        set(&mut form, Field::Subject, "");
        form.submit(start);
        // Second failing submit two seconds later pushes the revert out.
        form.submit(start + Duration::from_secs(2));
        form.tick(start + Duration::from_secs(4));
        assert!(matches!(form.phase(), Phase::ErrorShown { .. }));
        form.tick(start + Duration::from_secs(6));
        assert_eq!(*form.phase(), Phase::Idle);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }
}
