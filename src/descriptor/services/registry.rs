//! Service layer for publishing and discovering agent descriptors.
//!
//! Provides [`DescriptorRegistryService`] which validates descriptor
//! configuration, publishes the result into a [`DescriptorRegistry`], and
//! serves name-based discovery to a harness.

use crate::descriptor::{
    domain::{AgentDescriptor, AgentDescriptorConfig, AgentName, ConfigurationError},
    ports::{DescriptorRegistry, DescriptorRegistryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for descriptor registry operations.
#[derive(Debug, Error)]
pub enum DescriptorRegistryServiceError {
    /// Descriptor configuration failed validation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Registry operation failed.
    #[error(transparent)]
    Registry(#[from] DescriptorRegistryError),
}

/// Result type for descriptor registry service operations.
pub type DescriptorRegistryServiceResult<T> = Result<T, DescriptorRegistryServiceError>;

/// Descriptor publication and discovery orchestration service.
#[derive(Clone)]
pub struct DescriptorRegistryService<R>
where
    R: DescriptorRegistry,
{
    registry: Arc<R>,
}

impl<R> DescriptorRegistryService<R>
where
    R: DescriptorRegistry,
{
    /// Creates a new descriptor registry service.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Validates a configuration record and publishes the resulting
    /// descriptor.
    ///
    /// Nothing is published when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorRegistryServiceError::Configuration`] when the
    /// configuration is incomplete, or
    /// [`DescriptorRegistryServiceError::Registry`] when the registry rejects
    /// publication.
    pub fn register(
        &self,
        config: AgentDescriptorConfig,
    ) -> DescriptorRegistryServiceResult<AgentDescriptor> {
        let descriptor = config.build()?;
        self.publish(&descriptor)?;
        Ok(descriptor)
    }

    /// Publishes an already-built descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorRegistryServiceError::Registry`] when a descriptor
    /// with the same name exists or storage fails.
    pub fn publish(&self, descriptor: &AgentDescriptor) -> DescriptorRegistryServiceResult<()> {
        match self.registry.publish(descriptor) {
            Ok(()) => {
                tracing::debug!(
                    agent = %descriptor.name(),
                    model = %descriptor.model_reference(),
                    "published agent descriptor"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    agent = %descriptor.name(),
                    error = %err,
                    "agent descriptor rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Finds a published descriptor by name.
    ///
    /// Returns `Ok(None)` when no descriptor has the given name.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorRegistryServiceError::Configuration`] when the
    /// name is not a valid agent name, or
    /// [`DescriptorRegistryServiceError::Registry`] when lookup fails.
    pub fn discover(
        &self,
        name: &str,
    ) -> DescriptorRegistryServiceResult<Option<AgentDescriptor>> {
        let agent_name = AgentName::new(name)?;
        Ok(self.registry.find_by_name(&agent_name)?)
    }

    /// Returns every published descriptor ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorRegistryServiceError::Registry`] when lookup fails.
    pub fn list(&self) -> DescriptorRegistryServiceResult<Vec<AgentDescriptor>> {
        let mut descriptors = self.registry.list()?;
        descriptors.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(descriptors)
    }
}
