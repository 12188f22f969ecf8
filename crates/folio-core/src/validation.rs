//! Contact form field validation.
//!
//! Rules are checked in a fixed order: required, minimum length, then
//! pattern, all on the trimmed value. The first failing check decides the
//! message. Fields without a rule are always valid.
//!
//! Lengths are UTF-16 code units, the unit the browser's `String.length`
//! and `minlength` use, so a character outside the BMP counts as two.

use regex::Regex;

use crate::error::FolioResult;

/// Field names validated by the contact form, in submission order
pub const FIELDS: [&str; 3] = ["name", "email", "message"];

/// Validation rule for one form field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    /// Shown when the pattern check fails
    pub message: String,
}

/// Outcome of validating one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// The contact form's rule table.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<(&'static str, FieldRule)>,
}

impl Validator {
    /// Build the stock rules for `name`, `email` and `message`.
    pub fn new() -> FolioResult<Self> {
        let rules = vec![
            (
                "name",
                FieldRule {
                    required: true,
                    min_length: Some(2),
                    pattern: Some(Regex::new(r"^[a-zA-Z\s]+$")?),
                    message: "Please enter a valid name (letters and spaces only, minimum 2 characters)"
                        .to_string(),
                },
            ),
            (
                "email",
                FieldRule {
                    required: true,
                    min_length: None,
                    pattern: Some(Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?),
                    message: "Please enter a valid email address".to_string(),
                },
            ),
            (
                "message",
                FieldRule {
                    required: true,
                    min_length: Some(10),
                    pattern: None,
                    message: "Please enter a message (minimum 10 characters)".to_string(),
                },
            ),
        ];
        Ok(Self { rules })
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rule)| rule)
    }

    /// Validate a raw field value against its rule.
    pub fn validate(&self, field: &str, raw: &str) -> ValidationResult {
        let Some(rule) = self.rule(field) else {
            return ValidationResult::valid();
        };
        let value = raw.trim();

        if rule.required && value.is_empty() {
            return ValidationResult::invalid(format!("{} is required", capitalize(field)));
        }

        if let Some(min) = rule.min_length {
            if value.encode_utf16().count() < min {
                return ValidationResult::invalid(format!(
                    "{} must be at least {} characters long",
                    capitalize(field),
                    min
                ));
            }
        }

        if let Some(pattern) = &rule.pattern {
            if !pattern.is_match(value) {
                return ValidationResult::invalid(rule.message.clone());
            }
        }

        ValidationResult::valid()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
