//! Built-in root agent published for the development harness.
//!
//! The harness discovers this agent through [`ROOT_AGENT`]; [`root_agent`]
//! performs the one-time initialisation on first read.

use crate::descriptor::domain::{AgentDescriptor, ConfigurationError, KnownModel};
use crate::discovery::DiscoverySlot;

/// Discovery key of the root agent.
pub const NAME: &str = "strategy_agent";

/// Catalogue entry of the backend model answering on the root agent's behalf.
pub const MODEL: KnownModel = KnownModel::Gemini20Flash;

/// Backend model reference of the root agent.
pub const MODEL_REFERENCE: &str = MODEL.as_str();

/// Summary shown by the harness.
pub const DESCRIPTION: &str = "Agent to answer questions about the time and weather in a city.";

/// Directive sent to the backend model.
pub const INSTRUCTION: &str = concat!(
    "You are a helpful agent who can answer user questions about the time and weather",
    " in a city."
);

/// Process-wide discovery point for the root agent.
pub static ROOT_AGENT: DiscoverySlot = DiscoverySlot::new();

/// Assembles a fresh root agent descriptor from the fixed literals.
///
/// Every call returns an independent descriptor equal by value to the
/// others.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if one of the literals above is blank.
pub fn build() -> Result<AgentDescriptor, ConfigurationError> {
    AgentDescriptor::builder()
        .with_name(NAME)
        .with_model_reference(MODEL)
        .with_description(DESCRIPTION)
        .with_instruction(INSTRUCTION)
        .build()
}

/// Reads the root agent from [`ROOT_AGENT`], publishing it on first access.
///
/// # Errors
///
/// Returns the [`ConfigurationError`] that aborted initialisation.
pub fn root_agent() -> Result<&'static AgentDescriptor, ConfigurationError> {
    ROOT_AGENT.get_or_publish(build)
}
