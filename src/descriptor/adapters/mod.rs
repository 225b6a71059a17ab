//! Adapter implementations for descriptor discovery ports.

pub mod memory;
