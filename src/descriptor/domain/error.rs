//! Error types for agent descriptor construction.

use std::fmt;
use thiserror::Error;

/// Identifies one of the four descriptor fields in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorField {
    /// The discovery key.
    Name,
    /// The backend model reference.
    ModelReference,
    /// The human-readable summary.
    Description,
    /// The behavioural directive sent to the model.
    Instruction,
}

impl DescriptorField {
    /// All descriptor fields in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::ModelReference,
        Self::Description,
        Self::Instruction,
    ];

    /// Returns the field name as it appears in the serialized descriptor.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ModelReference => "model",
            Self::Description => "description",
            Self::Instruction => "instruction",
        }
    }
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while assembling an agent descriptor.
///
/// Every variant is a defect in the fixed configuration supplied at
/// definition time. None of them is retryable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A required field was never supplied.
    #[error("agent descriptor field '{0}' is required")]
    MissingField(DescriptorField),

    /// A required field is empty after trimming.
    #[error("agent descriptor field '{0}' must not be empty")]
    EmptyField(DescriptorField),

    /// The agent name is not a valid identifier.
    #[error(
        "agent name '{0}' is not a valid identifier (letters, digits and underscores, not starting with a digit)"
    )]
    InvalidName(String),

    /// The agent name exceeds the 100-character limit.
    #[error("agent name exceeds 100 character limit: {0}")]
    NameTooLong(String),

    /// The agent name collides with a name the harness reserves.
    #[error("agent name '{0}' is reserved")]
    ReservedName(String),
}

impl ConfigurationError {
    /// Returns the field this error concerns.
    #[must_use]
    pub const fn field(&self) -> DescriptorField {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) => *field,
            Self::InvalidName(_) | Self::NameTooLong(_) | Self::ReservedName(_) => {
                DescriptorField::Name
            }
        }
    }
}

/// Error returned when a model reference is not in the known catalogue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown model reference: {0}")]
pub struct ParseKnownModelError(pub String);
