//! Application services for agent descriptor publication and discovery.

mod registry;

pub use registry::{
    DescriptorRegistryService, DescriptorRegistryServiceError, DescriptorRegistryServiceResult,
};
