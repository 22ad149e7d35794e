//! Unit tests for the assembly front end.

/// Line decoding, tokenization, and operand parsing tests.
pub mod decode;
