//! Port contracts for agent descriptor discovery.
//!
//! Ports define infrastructure-agnostic interfaces a harness reads
//! descriptors through.

pub mod registry;

pub use registry::{DescriptorRegistry, DescriptorRegistryError, DescriptorRegistryResult};
#[cfg(test)]
pub use registry::MockDescriptorRegistry;
