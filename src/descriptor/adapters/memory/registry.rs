//! Thread-safe in-memory registry of published agent descriptors.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::descriptor::{
    domain::{AgentDescriptor, AgentName},
    ports::{DescriptorRegistry, DescriptorRegistryError, DescriptorRegistryResult},
};

/// In-memory descriptor registry keyed by agent name.
///
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDescriptorRegistry {
    descriptors: Arc<RwLock<HashMap<AgentName, AgentDescriptor>>>,
}

impl InMemoryDescriptorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> DescriptorRegistryError {
    DescriptorRegistryError::storage(std::io::Error::other(err.to_string()))
}

impl DescriptorRegistry for InMemoryDescriptorRegistry {
    fn publish(&self, descriptor: &AgentDescriptor) -> DescriptorRegistryResult<()> {
        let mut descriptors = self.descriptors.write().map_err(|err| poisoned(&err))?;

        if descriptors.contains_key(descriptor.name()) {
            return Err(DescriptorRegistryError::DuplicateAgentName(
                descriptor.name().clone(),
            ));
        }

        descriptors.insert(descriptor.name().clone(), descriptor.clone());
        Ok(())
    }

    fn find_by_name(&self, name: &AgentName) -> DescriptorRegistryResult<Option<AgentDescriptor>> {
        let descriptors = self.descriptors.read().map_err(|err| poisoned(&err))?;
        Ok(descriptors.get(name).cloned())
    }

    fn list(&self) -> DescriptorRegistryResult<Vec<AgentDescriptor>> {
        let descriptors = self.descriptors.read().map_err(|err| poisoned(&err))?;
        Ok(descriptors.values().cloned().collect())
    }
}
