//! Simulation driver: program loading and the top-level run loop.

/// Program file loading.
pub mod loader;

/// Top-level simulator type.
pub mod simulator;

pub use simulator::Simulator;
