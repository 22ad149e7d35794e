//! CPU core.
//!
//! Architectural state and the execution engine that drives it.

/// Machine state and execution loop.
pub mod cpu;

pub use cpu::Cpu;
