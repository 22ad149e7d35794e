//! Unit tests for the execution engine.



/// Load/store stubs and fence/system program-counter policy.
pub mod memoryless;

/// Zero-register write discarding across instruction shapes.
pub mod zero_register;
