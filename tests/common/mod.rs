//! Common test utilities for treenav CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: Reusable tree documents

pub mod env;

pub use env::*;
pub use fixtures::*;
