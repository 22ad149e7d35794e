//! Unit tests for the simulation driver.

/// Whole-program runs from source text.
pub mod end_to_end;
