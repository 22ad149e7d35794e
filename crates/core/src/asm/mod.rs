//! Assembly text front end.
//!
//! Decodes mnemonic lines into the structured instruction model. The decoder
//! is a separate pass from execution: the whole program is decoded (and
//! validated) before the first instruction runs.

/// Line tokenizer, operand parsing, and shape dispatch.
pub mod decode;

/// Static mnemonic classification tables.
pub mod tables;

pub use decode::{decode_line, decode_program};
