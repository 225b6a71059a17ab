//! Step definitions for descriptor discovery behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
