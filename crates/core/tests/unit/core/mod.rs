//! Unit tests for the CPU core.

/// Execution engine tests.
pub mod cpu;
