//! Program loader.
//!
//! Reads an assembly listing from disk and decodes it into the instruction
//! sequence the execution engine consumes.

use std::fs;
use std::path::Path;

use crate::asm;
use crate::common::LoadError;
use crate::isa::Instruction;

/// Loads and decodes a program file.
///
/// # Arguments
///
/// * `path` - Path to the assembly listing (one instruction per line).
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Decode`] if any line fails to decode.
pub fn load_program(path: &Path) -> Result<Vec<Instruction>, LoadError> {
    let source = fs::read_to_string(path)?;
    let program = asm::decode_program(&source)?;
    Ok(program)
}
