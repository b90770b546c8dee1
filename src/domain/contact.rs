//! Contact form data and validation rules

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MESSAGE_MIN_LENGTH, NAME_MIN_LENGTH};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern")
});

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Fields that must be non-blank for the form to be valid
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Translation key suffix (`contact.field.<name>`)
    pub fn key(self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Required,
    MinLength,
    Email,
    Phone,
}

impl ValidationKind {
    /// Translation key of the localized message
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationKind::Required => "contact.validation.required",
            ValidationKind::MinLength => "contact.validation.min_length",
            ValidationKind::Email => "contact.validation.email",
            ValidationKind::Phone => "contact.validation.phone",
        }
    }
}

/// Raw contact form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFormData {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        }
    }

    /// Check one field against its rule
    pub fn validate(&self, field: ContactField) -> Option<ValidationKind> {
        let value = self.value(field);
        let trimmed = value.trim();
        match field {
            ContactField::FirstName | ContactField::LastName => {
                min_length_rule(trimmed, NAME_MIN_LENGTH)
            }
            ContactField::Email => {
                if trimmed.is_empty() {
                    Some(ValidationKind::Required)
                } else if !is_valid_email(value) {
                    Some(ValidationKind::Email)
                } else {
                    None
                }
            }
            ContactField::Phone => {
                (!value.is_empty() && !is_valid_phone(value)).then_some(ValidationKind::Phone)
            }
            ContactField::Message => min_length_rule(trimmed, MESSAGE_MIN_LENGTH),
            ContactField::Service => None,
        }
    }

    /// Every required field is non-blank
    pub fn has_required_fields(&self) -> bool {
        ContactField::REQUIRED
            .iter()
            .all(|field| !self.value(*field).trim().is_empty())
    }
}

fn min_length_rule(trimmed: &str, min: usize) -> Option<ValidationKind> {
    if trimmed.is_empty() {
        Some(ValidationKind::Required)
    } else if trimmed.chars().count() < min {
        Some(ValidationKind::MinLength)
    } else {
        None
    }
}

/// `local@domain.tld` with no whitespace and a single `@` per part
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional leading `+`, then up to 16 digits not starting with 0.
/// Spaces, dashes and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            first_name: "Ahmed".into(),
            last_name: "Salem".into(),
            email: "hello@avaghmedia.mr".into(),
            phone: "+222 45 00 00 00".into(),
            service: "media".into(),
            message: "We need a documentary.".into(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let data = filled();
        for field in ContactField::ALL {
            assert_eq!(data.validate(field), None, "{field:?}");
        }
        assert!(data.has_required_fields());
    }

    #[test]
    fn names_need_two_characters() {
        let mut data = filled();
        data.first_name = "  A ".into();
        assert_eq!(data.validate(ContactField::FirstName), Some(ValidationKind::MinLength));
        data.first_name = "   ".into();
        assert_eq!(data.validate(ContactField::FirstName), Some(ValidationKind::Required));
        // counted in characters, not bytes
        data.last_name = "عل".into();
        assert_eq!(data.validate(ContactField::LastName), None);
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn phone_is_optional_but_checked() {
        let mut data = filled();
        data.phone.clear();
        assert_eq!(data.validate(ContactField::Phone), None);
        data.phone = "0123".into();
        assert_eq!(data.validate(ContactField::Phone), Some(ValidationKind::Phone));
        assert!(is_valid_phone("(222) 45-00-00"));
        assert!(!is_valid_phone("+1234567890123456789"));
    }

    #[test]
    fn phone_accepts_ascii_digits_only() {
        assert!(is_valid_phone("+222450000"));
        assert!(!is_valid_phone("+2٢٢٤٥٠٠"));
        assert!(!is_valid_phone("٢٢٤٥٠٠٠٠"));
        assert!(!is_valid_phone("+2２２４５"));
    }

    #[test]
    fn message_needs_ten_characters() {
        let mut data = filled();
        data.message = "too short".into();
        assert_eq!(data.validate(ContactField::Message), Some(ValidationKind::MinLength));
    }
}
