//! Process-wide discovery point for agent descriptors.
//!
//! A [`DiscoverySlot`] is written at most once, on first access, and read
//! thereafter. Harnesses locate a slot by name (see
//! [`crate::strategy_agent::ROOT_AGENT`]) rather than through explicit
//! wiring. Callers that need their own discovery point can own a slot
//! directly.

use crate::descriptor::domain::{AgentDescriptor, ConfigurationError};
use std::sync::OnceLock;

/// One-time-initialised, read-only binding holding a single descriptor.
///
/// The first access decides the outcome for the rest of the process: either
/// a published descriptor, or the configuration failure that aborted
/// initialisation. A failed slot never exposes a descriptor and never retries.
#[derive(Debug, Default)]
pub struct DiscoverySlot {
    outcome: OnceLock<Result<AgentDescriptor, ConfigurationError>>,
}

impl DiscoverySlot {
    /// Creates an empty slot. Usable in `static` items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    /// Returns the published descriptor, running `build` first if the slot
    /// has never been accessed.
    ///
    /// `build` runs at most once per slot; concurrent first readers block
    /// until it completes.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] produced by the first `build`, on
    /// this and every later access.
    pub fn get_or_publish<F>(&self, build: F) -> Result<&AgentDescriptor, ConfigurationError>
    where
        F: FnOnce() -> Result<AgentDescriptor, ConfigurationError>,
    {
        self.outcome
            .get_or_init(|| {
                let built = build();
                match &built {
                    Ok(descriptor) => tracing::debug!(
                        agent = %descriptor.name(),
                        model = %descriptor.model_reference(),
                        "agent descriptor published for discovery"
                    ),
                    Err(err) => tracing::error!(
                        field = %err.field(),
                        error = %err,
                        "agent descriptor initialisation failed"
                    ),
                }
                built
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the published descriptor, or `None` when the slot is
    /// uninitialised or its initialisation failed.
    #[must_use]
    pub fn get(&self) -> Option<&AgentDescriptor> {
        self.outcome.get().and_then(|outcome| outcome.as_ref().ok())
    }

    /// Returns whether a descriptor has been published.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.get().is_some()
    }
}
