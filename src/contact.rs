//! Contact form validation and submission outcome handling.

use serde::Deserialize;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1_000;
pub const BANNER_TTL_MS: u32 = 5_000;
pub const SHAKE_MS: u32 = 500;
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_TTL_MS: u32 = 4_000;
pub const CONFETTI_COLORS: [&str; 5] = ["#667eea", "#764ba2", "#f5576c", "#4facfe", "#00f2fe"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form-data key sent to the endpoint.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "contactName",
            Self::Email => "contactEmail",
            Self::Message => "contactMessage",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter at least 2 characters",
            Self::Email => "Please enter a valid email address",
            Self::Message => "Please enter at least 10 characters",
        }
    }

    pub fn is_valid(self, raw: &str) -> bool {
        let value = raw.trim();
        match self {
            Self::Name => value.chars().count() >= NAME_MIN_CHARS,
            Self::Email => is_email(value),
            Self::Message => value.chars().count() >= MESSAGE_MIN_CHARS,
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain with at least one character on each side of it.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn after_blur(field: Field, value: &str) -> Self {
        if field.is_valid(value) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    /// Typing clears a visible error; a success mark stays until the next blur.
    pub fn after_input(self) -> Self {
        match self {
            Self::Invalid => Self::Pristine,
            other => other,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Pristine => None,
            Self::Valid => Some("success"),
            Self::Invalid => Some("error"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Status of every field, in [`Field::ALL`] order.
    pub fn validate(&self) -> [(Field, FieldStatus); 3] {
        Field::ALL.map(|field| (field, FieldStatus::after_blur(field, self.value(field))))
    }

    pub fn is_submittable(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| field.is_valid(self.value(field)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn for_length(length: usize) -> Self {
        if length * 10 > MESSAGE_MAX_CHARS * 9 {
            Self::Danger
        } else if length * 4 > MESSAGE_MAX_CHARS * 3 {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some("warning"),
            Self::Danger => Some("danger"),
        }
    }
}

pub fn counter_label(length: usize) -> String {
    format!("{length} / {MESSAGE_MAX_CHARS}")
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("contact endpoint unreachable: {0}")]
    Network(String),
    #[error("contact endpoint rejected the message with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("contact endpoint is not configured: {0}")]
    Unconfigured(String),
}

impl SubmitError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Rejected { .. } => "rejected",
            Self::Unconfigured(_) => "unconfigured",
        }
    }
}

#[derive(Deserialize)]
struct EndpointReply {
    #[serde(default)]
    errors: Vec<ReplyError>,
}

#[derive(Deserialize)]
struct ReplyError {
    message: String,
}

/// Maps the endpoint's answer onto success or a rejection carrying whatever
/// error messages its JSON body lists.
pub fn classify_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    Err(SubmitError::Rejected {
        status,
        detail: rejection_detail(body),
    })
}

fn rejection_detail(body: &str) -> Option<String> {
    let reply: EndpointReply = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = reply
        .errors
        .into_iter()
        .map(|error| error.message.trim().to_string())
        .filter(|message| !message.is_empty())
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Success,
    Failure,
}

impl Banner {
    pub fn for_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => Self::Success,
            Err(_) => Self::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_trimmed_characters() {
        assert!(Field::Name.is_valid("Al"));
        assert!(!Field::Name.is_valid("A"));
        assert!(!Field::Name.is_valid("  A  "));
    }

    #[test]
    fn email_pattern() {
        assert!(Field::Email.is_valid("a@b.co"));
        assert!(Field::Email.is_valid(" first.last@mail.example.org "));
        assert!(!Field::Email.is_valid("a@b"));
        assert!(!Field::Email.is_valid("@b.co"));
        assert!(!Field::Email.is_valid("a@.co"));
        assert!(!Field::Email.is_valid("a@b."));
        assert!(!Field::Email.is_valid("a@@b.co"));
        assert!(!Field::Email.is_valid("a b@c.co"));
    }

    #[test]
    fn message_needs_ten_characters() {
        assert!(Field::Message.is_valid("0123456789"));
        assert!(!Field::Message.is_valid("012345678"));
    }

    #[test]
    fn input_clears_error_but_keeps_success() {
        assert_eq!(FieldStatus::Invalid.after_input(), FieldStatus::Pristine);
        assert_eq!(FieldStatus::Valid.after_input(), FieldStatus::Valid);
    }

    #[test]
    fn draft_blocks_submission_until_every_field_passes() {
        let mut draft = ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "short".to_string(),
        };
        assert!(!draft.is_submittable());
        assert_eq!(draft.validate()[2], (Field::Message, FieldStatus::Invalid));

        draft.set(Field::Message, "Hello there, nice portfolio!".to_string());
        assert!(draft.is_submittable());
        assert!(draft
            .validate()
            .iter()
            .all(|(_, status)| *status == FieldStatus::Valid));
    }

    #[test]
    fn counter_levels() {
        assert_eq!(CounterLevel::for_length(750), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_length(751), CounterLevel::Warning);
        assert_eq!(CounterLevel::for_length(900), CounterLevel::Warning);
        assert_eq!(CounterLevel::for_length(901), CounterLevel::Danger);
        assert_eq!(counter_label(12), "12 / 1000");
    }

    #[test]
    fn success_statuses() {
        assert_eq!(classify_response(200, ""), Ok(()));
        assert_eq!(classify_response(204, "not json"), Ok(()));
    }

    #[test]
    fn rejection_keeps_endpoint_messages() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"},{"message":" "}]}"#;
        let result = classify_response(422, body);

        assert_eq!(
            result,
            Err(SubmitError::Rejected {
                status: 422,
                detail: Some("should be an email".to_string()),
            })
        );
        assert_eq!(Banner::for_outcome(&result), Banner::Failure);
    }

    #[test]
    fn rejection_without_json_has_no_detail() {
        let result = classify_response(500, "<html>oops</html>");
        assert!(matches!(
            result,
            Err(SubmitError::Rejected { status: 500, detail: None })
        ));
    }
}
