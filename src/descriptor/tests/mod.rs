//! Unit tests for the agent descriptor module.
