//! In-memory descriptor registry.

mod registry;

pub use registry::InMemoryDescriptorRegistry;
