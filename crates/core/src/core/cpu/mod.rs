//! CPU architectural state.
//!
//! This module holds the machine state of the simulated hart: the 32-entry
//! register file and the program counter. State is owned by exactly one
//! execution loop and is mutated in place by every retired instruction.

use crate::common::RegisterFile;
use crate::stats::SimStats;

/// Execution engine (fetch loop and per-instruction semantics).
pub mod execution;

/// The simulated processor.
///
/// Holds the architectural state (registers + pc) plus retirement statistics.
/// Construction puts the machine in its reset state: every register zero and
/// the program counter at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Program counter: byte offset of the instruction selected for
    /// execution; the fetch index is `pc / 4`.
    pub pc: u32,
    /// Retirement statistics for the current run.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    pub const fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            stats: SimStats::new(),
        }
    }
}
