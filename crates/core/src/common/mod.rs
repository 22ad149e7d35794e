//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by both the decoder and the
//! execution engine:
//! 1. **Register file:** The 32-entry architectural register array.
//! 2. **Error types:** Decode, execution, and load error definitions.

/// Error types for decoding, execution, and program loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{DecodeError, ExecError, LoadError};
pub use reg::RegisterFile;
