//! Configuration record from which descriptors are assembled.

use super::{AgentDescriptor, ConfigurationError};
use serde::Deserialize;

/// Named-field configuration for a single agent descriptor.
///
/// Every field is optional here so that an absent value can be reported as
/// [`ConfigurationError::MissingField`] instead of being impossible to
/// express. [`AgentDescriptorConfig::build`] validates all four eagerly.
///
/// # Examples
///
/// ```
/// use agent_descriptor::descriptor::domain::AgentDescriptorConfig;
///
/// let descriptor = AgentDescriptorConfig::new()
///     .with_name("weather_agent")
///     .with_model_reference("gemini-2.0-flash")
///     .with_description("Answers weather questions.")
///     .with_instruction("You report the weather.")
///     .build()
///     .expect("all fields are populated");
/// assert_eq!(descriptor.name().as_str(), "weather_agent");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentDescriptorConfig {
    /// Discovery key of the agent.
    pub name: Option<String>,
    /// Backend model reference.
    #[serde(rename = "model")]
    pub model_reference: Option<String>,
    /// Human-readable summary of the agent's purpose.
    pub description: Option<String>,
    /// Behavioural directive for the backend model.
    pub instruction: Option<String>,
}

impl AgentDescriptorConfig {
    /// Creates a configuration with every field absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            model_reference: None,
            description: None,
            instruction: None,
        }
    }

    /// Sets the agent name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the backend model reference.
    #[must_use]
    pub fn with_model_reference(mut self, model_reference: impl Into<String>) -> Self {
        self.model_reference = Some(model_reference.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the instruction.
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Validates the configuration and assembles an immutable descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when any field is absent, blank, or (for
    /// the name) not a valid identifier.
    pub fn build(self) -> Result<AgentDescriptor, ConfigurationError> {
        AgentDescriptor::try_from(self)
    }
}
