//! Validated agent name type.

use super::{ConfigurationError, DescriptorField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an agent name.
const MAX_NAME_LENGTH: usize = 100;

/// Names the harness uses for the human side of a conversation.
const RESERVED_NAMES: [&str; 1] = ["user"];

/// Validated agent identifier, used as the discovery key.
///
/// Agent names follow identifier rules (e.g. `strategy_agent`,
/// `WeatherAgent2`): ASCII letters, digits and underscores, never starting
/// with a digit. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentName(String);

impl AgentName {
    /// Creates a validated agent name.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyField`] when the value is empty after
    /// trimming, [`ConfigurationError::InvalidName`] when it is not an
    /// identifier, [`ConfigurationError::NameTooLong`] when it exceeds 100
    /// characters, or [`ConfigurationError::ReservedName`] for reserved names.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyField(DescriptorField::Name));
        }

        let mut chars = trimmed.chars();
        let starts_well = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let is_valid = starts_well && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !is_valid {
            return Err(ConfigurationError::InvalidName(raw));
        }

        // Identifiers are ASCII, so the byte length is the character count.
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(ConfigurationError::NameTooLong(raw));
        }

        if RESERVED_NAMES.contains(&trimmed) {
            return Err(ConfigurationError::ReservedName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the agent name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AgentName {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentName> for String {
    fn from(name: AgentName) -> Self {
        name.0
    }
}
