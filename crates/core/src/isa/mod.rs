//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the structured instruction model and the named field constants
//! (opcodes, function codes, ABI register names) shared between the assembly
//! decoder and the execution engine.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// funct3 field constants, grouped by opcode.
pub mod funct3;

/// funct7 field constants (base, alternate, and M-extension encodings).
pub mod funct7;

/// Instruction value and closed operand union.
pub mod instruction;

/// Major opcode constants.
pub mod opcodes;

pub use instruction::{Instruction, Operands};
