//! Agent descriptors for development harnesses.
//!
//! This crate assembles validated, immutable descriptors that name an
//! agent, bind it to a backend language-model reference and attach its
//! behavioural instructions, then exposes them at discovery points a
//! harness reads without per-agent integration code.
//!
//! # Architecture
//!
//! The descriptor module follows hexagonal architecture principles:
//!
//! - **Domain**: Descriptor types and their validation rules
//! - **Ports**: The registry contract a harness discovers descriptors through
//! - **Adapters**: Concrete registry implementations
//!
//! # Modules
//!
//! - [`descriptor`]: Descriptor construction, registry and discovery service
//! - [`discovery`]: One-time-initialised process-wide discovery slots
//! - [`strategy_agent`]: The built-in root agent

pub mod descriptor;
pub mod discovery;
pub mod strategy_agent;
