//! Shared world state for descriptor discovery BDD scenarios.

use std::sync::Arc;

use agent_descriptor::descriptor::{
    adapters::memory::InMemoryDescriptorRegistry,
    domain::{AgentDescriptor, AgentDescriptorConfig},
    services::{DescriptorRegistryService, DescriptorRegistryServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRegistryService = DescriptorRegistryService<InMemoryDescriptorRegistry>;

/// Scenario world for descriptor discovery behaviour tests.
pub struct DescriptorWorld {
    /// The registry service under test.
    pub service: TestRegistryService,
    /// Configuration assembled by `given` steps.
    pub config: AgentDescriptorConfig,
    /// Result of the last registration attempt.
    pub last_register_result: Option<Result<AgentDescriptor, DescriptorRegistryServiceError>>,
    /// Descriptor returned by the last successful discovery.
    pub last_discovered: Option<AgentDescriptor>,
}

impl DescriptorWorld {
    /// Creates a world with an empty registry and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: DescriptorRegistryService::new(Arc::new(InMemoryDescriptorRegistry::new())),
            config: AgentDescriptorConfig::new(),
            last_register_result: None,
            last_discovered: None,
        }
    }
}

impl Default for DescriptorWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DescriptorWorld {
    DescriptorWorld::default()
}
