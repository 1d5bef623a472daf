use regex::Regex;
use std::sync::OnceLock;

const EMAIL_MAX: usize = 254;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
    })
}

/// Per-field validation messages, looked up by field name in templates.
#[derive(Debug, Clone, Default)]
pub struct FormErrors(pub Vec<(String, String)>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`; the first message per field wins.
    pub fn add(&mut self, field: &str, message: Option<String>) {
        if let Some(message) = message {
            if !self.has(field) {
                self.0.push((field.to_string(), message));
            }
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|(f, _)| f == field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    if value.trim().chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Required, at most 254 chars, and shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > EMAIL_MAX {
        return Some(format!("Email must be at most {EMAIL_MAX} characters"));
    }
    if !email_re().is_match(trimmed) {
        return Some("Invalid email address".to_string());
    }
    None
}

/// New password is optional, but at least 8 characters when given.
pub fn validate_new_password(password: &str) -> Option<String> {
    if !password.is_empty() && password.chars().count() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

pub fn validate_password_match(new: &str, confirm: &str) -> Option<String> {
    if new != confirm {
        return Some("Passwords don't match.".to_string());
    }
    None
}
