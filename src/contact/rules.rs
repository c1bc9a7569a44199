use regex::Regex;

use crate::core::FolioError;

pub const REQUIRED_MESSAGE: &str = "This field is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] =
        [FieldName::Name, FieldName::Email, FieldName::Subject, FieldName::Message];

    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Your Name",
            FieldName::Email => "Your Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldName::Message)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub message: &'static str,
}

impl ValidationRule {
    /// Checks in order: required, minimum length, pattern. Only the first failure is reported.
    /// Length and pattern apply to the trimmed value. Length is counted in UTF-16 code units,
    /// so a character outside the basic plane counts twice.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let trimmed = value.trim();

        if self.required && trimmed.is_empty() {
            return Err(REQUIRED_MESSAGE);
        }

        if let Some(min_length) = self.min_length {
            if trimmed.encode_utf16().count() < min_length {
                return Err(self.message);
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(trimmed) {
                return Err(self.message);
            }
        }

        Ok(())
    }
}

/// The fixed rule table for the contact form.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: [ValidationRule; 4],
}

impl RuleSet {
    pub fn standard() -> Result<Self, FolioError> {
        Ok(Self {
            rules: [
                ValidationRule {
                    required: true,
                    min_length: Some(2),
                    pattern: Some(Regex::new(r"^[a-zA-Z\s]+$")?),
                    message: "Name must be at least 2 characters and contain only letters",
                },
                ValidationRule {
                    required: true,
                    min_length: None,
                    pattern: Some(Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?),
                    message: "Please enter a valid email address",
                },
                ValidationRule {
                    required: true,
                    min_length: Some(3),
                    pattern: None,
                    message: "Subject must be at least 3 characters",
                },
                ValidationRule {
                    required: true,
                    min_length: Some(10),
                    pattern: None,
                    message: "Message must be at least 10 characters",
                },
            ],
        })
    }

    pub fn rule(&self, field: FieldName) -> &ValidationRule {
        &self.rules[field.index()]
    }
}
