//! Shared test utilities for square-models integration tests.

pub mod fixtures;
