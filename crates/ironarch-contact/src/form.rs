//! Contact form fields and validation.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Minimum trimmed name length, in UTF-16 code units.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed message length, in UTF-16 code units.
pub const MIN_MESSAGE_LEN: usize = 10;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Form field name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: Field,
    /// Text shown next to the field.
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

/// Contact form as entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Honeypot field (`_gotcha`). Hidden from humans; bots fill it in.
    pub gotcha: String,
}

impl ContactForm {
    /// Form with the three visible fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            gotcha: String::new(),
        }
    }

    /// Every validation failure, in field order. Empty when the form is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if utf16_len(self.name.trim()) < MIN_NAME_LEN {
            errors.push(FieldError {
                field: Field::Name,
                message: "Please enter your name (at least 2 characters).",
            });
        }

        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Please enter a valid email address.",
            });
        }

        if utf16_len(self.message.trim()) < MIN_MESSAGE_LEN {
            errors.push(FieldError {
                field: Field::Message,
                message: "Please enter a message (at least 10 characters).",
            });
        }

        errors
    }

    /// Whether the honeypot was filled in.
    pub fn is_spam(&self) -> bool {
        !self.gotcha.is_empty()
    }

    /// Trimmed `(field, value)` pairs sent to the relay.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            (Field::Name.name(), self.name.trim()),
            (Field::Email.name(), self.email.trim()),
            (Field::Message.name(), self.message.trim()),
        ]
    }
}

/// Length as a browser form reports it: astral characters count twice.
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// `local@domain.tld` with no whitespace and exactly one `@` before the dot.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn valid() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there, nice labs.")
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn all_errors_reported_together() {
        let form = ContactForm::new(" A ", "not-an-email", "short");

        let fields: Vec<_> = form.validate().into_iter().map(|e| e.field).collect();

        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let form = ContactForm::new("  Al  ", "a@b.co", "   0123456789   ");
        assert!(form.validate().is_empty());

        let form = ContactForm::new("A", "a@b.co", "  012345678  ");
        assert_eq!(form.validate().len(), 2);
    }

    #[test]
    fn lengths_count_utf16_units() {
        let crab = "\u{1f980}";
        let form = ContactForm::new(crab, "a@b.co", crab.repeat(5));
        assert!(form.validate().is_empty());

        let form = ContactForm::new("\u{e9}", "a@b.co", "\u{e9}".repeat(9));
        let fields: Vec<_> = form.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Message]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("  first.last@sub.example.org "));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email("x y@z.com"));
        assert!(!is_valid_email("x@@z.com"));
        assert!(!is_valid_email("@z.com"));
    }

    #[test]
    fn honeypot_marks_spam() {
        let mut form = valid();
        assert!(!form.is_spam());
        form.gotcha = "http://spam".to_string();
        assert!(form.is_spam());
    }

    #[test]
    fn fields_are_trimmed() {
        let form = ContactForm::new(" Ada ", " ada@example.com\n", "\tHello there, friend. ");
        assert_eq!(form.fields(), [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("message", "Hello there, friend."),
        ]);
    }

    proptest! {
        #[test]
        fn whitespace_in_email_is_invalid(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
            let email = format!("{local} x@{domain}.com");
            prop_assert!(!is_valid_email(&email));
        }
    }
}
