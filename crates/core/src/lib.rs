//! Two-stage text-assembly simulator for a 32-bit RISC-V subset.
//!
//! This crate implements the simulator in two strictly ordered stages:
//! 1. **Decoder:** Turns mnemonic lines into structured instructions (a
//!    closed union over the architectural encoding shapes).
//! 2. **Execution engine:** Interprets the decoded sequence against a
//!    32-register file and a program counter, fetching by `pc / 4` until the
//!    counter leaves the sequence.
//!
//! No memory bus is modeled: loads retire with the destination cleared,
//! stores retire without effect. See the module docs for the exact
//! per-opcode semantics.

/// Assembly text decoding (tokenizer, operand parsing, mnemonic tables).
pub mod asm;

/// Common types (register file, error definitions).
pub mod common;

/// CPU core (machine state, execution loop).
pub mod core;

/// Instruction set definitions (opcodes, function codes, instruction model).
pub mod isa;

/// Simulation driver (program loader, top-level simulator).
pub mod sim;

/// Run statistics collection.
pub mod stats;

/// Main CPU type; holds the register file, program counter, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; decodes a source and runs it to completion.
pub use crate::sim::Simulator;
