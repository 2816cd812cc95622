//! Validated greeting text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a single greeting
const MAX_GREETING_LENGTH: usize = 500;

/// A validated greeting (non-blank, <=500 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Greeting(String);

impl Greeting {
    /// Create a new validated greeting.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The text is empty after trimming
    /// - The text exceeds 500 characters after trimming
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Greeting cannot be empty"));
        }
        if trimmed.chars().count() > MAX_GREETING_LENGTH {
            return Err(DomainError::validation(format!(
                "Greeting cannot exceed {} characters",
                MAX_GREETING_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap text already known to be valid (built-in constants).
    pub(super) fn from_static(text: &'static str) -> Self {
        Self(text.to_string())
    }

    /// Returns the greeting as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Greeting {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Greeting> for String {
    fn from(greeting: Greeting) -> String {
        greeting.0
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
