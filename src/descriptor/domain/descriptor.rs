//! Immutable agent descriptor.

use super::{
    AgentDescriptorConfig, AgentName, ConfigurationError, DescriptorField, ModelReference,
};
use serde::{Deserialize, Serialize};

/// Declarative record naming an agent, its backend model and its
/// instructions.
///
/// Fields are private and only exposed through borrowing accessors, so a
/// descriptor cannot change after construction. Deserialization goes through
/// [`AgentDescriptorConfig`] and applies the same validation as
/// [`AgentDescriptor::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AgentDescriptorConfig")]
pub struct AgentDescriptor {
    name: AgentName,
    #[serde(rename = "model")]
    model_reference: ModelReference,
    description: String,
    instruction: String,
}

impl AgentDescriptor {
    /// Creates a descriptor from four required values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a value is blank or the name is not
    /// a valid identifier.
    pub fn new(
        name: impl Into<String>,
        model_reference: impl Into<String>,
        description: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        AgentDescriptorConfig::new()
            .with_name(name)
            .with_model_reference(model_reference)
            .with_description(description)
            .with_instruction(instruction)
            .build()
    }

    /// Starts an empty configuration record.
    #[must_use]
    pub const fn builder() -> AgentDescriptorConfig {
        AgentDescriptorConfig::new()
    }

    /// Returns the discovery key.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        &self.name
    }

    /// Returns the backend model reference.
    #[must_use]
    pub const fn model_reference(&self) -> &ModelReference {
        &self.model_reference
    }

    /// Returns the human-readable summary.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the behavioural directive for the backend model.
    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

impl TryFrom<AgentDescriptorConfig> for AgentDescriptor {
    type Error = ConfigurationError;

    fn try_from(config: AgentDescriptorConfig) -> Result<Self, Self::Error> {
        let AgentDescriptorConfig {
            name,
            model_reference,
            description,
            instruction,
        } = config;

        let agent_name = AgentName::new(require(name, DescriptorField::Name)?)?;
        let model =
            ModelReference::new(require(model_reference, DescriptorField::ModelReference)?)?;
        let summary = required_text(description, DescriptorField::Description)?;
        let directive = required_text(instruction, DescriptorField::Instruction)?;

        Ok(Self {
            name: agent_name,
            model_reference: model,
            description: summary,
            instruction: directive,
        })
    }
}

fn require(value: Option<String>, field: DescriptorField) -> Result<String, ConfigurationError> {
    value.ok_or(ConfigurationError::MissingField(field))
}

fn required_text(
    value: Option<String>,
    field: DescriptorField,
) -> Result<String, ConfigurationError> {
    let text = require(value, field)?;
    if text.trim().is_empty() {
        return Err(ConfigurationError::EmptyField(field));
    }
    Ok(text)
}
