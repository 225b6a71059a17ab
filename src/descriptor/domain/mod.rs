//! Domain model for agent descriptors.
//!
//! A descriptor binds an agent name to a backend model reference and to the
//! natural-language instructions the model receives. Descriptors are
//! validated once, at assembly, and are immutable afterwards.

mod config;
mod descriptor;
mod error;
mod model;
mod name;

pub use config::AgentDescriptorConfig;
pub use descriptor::AgentDescriptor;
pub use error::{ConfigurationError, DescriptorField, ParseKnownModelError};
pub use model::{KnownModel, ModelReference};
pub use name::AgentName;
