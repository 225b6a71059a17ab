//! Registry port for publishing and discovering agent descriptors.

use crate::descriptor::domain::{AgentDescriptor, AgentName};
use std::sync::Arc;
use thiserror::Error;

/// Result type for descriptor registry operations.
pub type DescriptorRegistryResult<T> = Result<T, DescriptorRegistryError>;

/// Name-keyed discovery contract between descriptor owners and a harness.
///
/// Registry operations are synchronous: publication happens during startup
/// and involves no I/O.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorRegistry: Send + Sync {
    /// Publishes a descriptor under its name.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorRegistryError::DuplicateAgentName`] when a
    /// descriptor with the same name is already published.
    fn publish(&self, descriptor: &AgentDescriptor) -> DescriptorRegistryResult<()>;

    /// Finds a published descriptor by name.
    ///
    /// Returns `None` when no descriptor has the given name.
    fn find_by_name(&self, name: &AgentName) -> DescriptorRegistryResult<Option<AgentDescriptor>>;

    /// Returns every published descriptor.
    fn list(&self) -> DescriptorRegistryResult<Vec<AgentDescriptor>>;
}

/// Errors returned by descriptor registry implementations.
#[derive(Debug, Clone, Error)]
pub enum DescriptorRegistryError {
    /// A descriptor with the same name is already published.
    #[error("duplicate agent name: {0}")]
    DuplicateAgentName(AgentName),

    /// Registry storage failure.
    #[error("registry storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl DescriptorRegistryError {
    /// Wraps a storage error.
    #[must_use]
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
