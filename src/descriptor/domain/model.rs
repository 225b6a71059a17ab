//! Opaque backend model reference and the catalogue of known models.

use super::{ConfigurationError, DescriptorField, ParseKnownModelError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the hosted language model answering for an agent
/// (e.g. `gemini-2.0-flash`).
///
/// The reference is opaque: it is only checked for emptiness here and is
/// resolved against a live backend by the harness at invocation time.
/// References outside [`KnownModel`] are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelReference(String);

impl ModelReference {
    /// Creates a model reference from a trimmed, non-empty value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyField`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let reference = value.into().trim().to_owned();
        if reference.is_empty() {
            return Err(ConfigurationError::EmptyField(
                DescriptorField::ModelReference,
            ));
        }
        Ok(Self(reference))
    }

    /// Returns the model reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the catalogue entry for this reference, if there is one.
    #[must_use]
    pub fn known(&self) -> Option<KnownModel> {
        KnownModel::try_from(self.as_str()).ok()
    }
}

impl AsRef<str> for ModelReference {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ModelReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ModelReference {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelReference> for String {
    fn from(reference: ModelReference) -> Self {
        reference.0
    }
}

impl From<KnownModel> for ModelReference {
    fn from(model: KnownModel) -> Self {
        Self(model.as_str().to_owned())
    }
}

/// Hosted models agents are commonly bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KnownModel {
    /// `gemini-2.5-pro`
    Gemini25Pro,
    /// `gemini-2.5-flash`
    Gemini25Flash,
    /// `gemini-2.5-flash-preview-09-2025`
    Gemini25FlashPreview,
    /// `gemini-2.5-flash-lite`
    Gemini25FlashLite,
    /// `gemini-2.5-flash-lite-preview-09-2025`
    Gemini25FlashLitePreview,
    /// `gemini-2.0-flash`
    Gemini20Flash,
    /// `gemini-2.0-flash-lite`
    Gemini20FlashLite,
}

impl KnownModel {
    /// Every catalogue entry.
    pub const ALL: [Self; 7] = [
        Self::Gemini25Pro,
        Self::Gemini25Flash,
        Self::Gemini25FlashPreview,
        Self::Gemini25FlashLite,
        Self::Gemini25FlashLitePreview,
        Self::Gemini20Flash,
        Self::Gemini20FlashLite,
    ];

    /// Returns the backend model identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini25Pro => "gemini-2.5-pro",
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini25FlashPreview => "gemini-2.5-flash-preview-09-2025",
            Self::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Self::Gemini25FlashLitePreview => "gemini-2.5-flash-lite-preview-09-2025",
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Gemini20FlashLite => "gemini-2.0-flash-lite",
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for KnownModel {
    type Error = ParseKnownModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == normalized)
            .ok_or_else(|| ParseKnownModelError(value.to_owned()))
    }
}

impl TryFrom<String> for KnownModel {
    type Error = ParseKnownModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<KnownModel> for String {
    fn from(model: KnownModel) -> Self {
        model.as_str().to_owned()
    }
}
