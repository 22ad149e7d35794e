//! Simulator: owns the CPU and the decoded program side-by-side.
//!
//! The two decode/execute passes never interleave: the full program is
//! decoded (and validated) before the CPU retires its first instruction.

use crate::asm;
use crate::common::{DecodeError, ExecError};
use crate::core::Cpu;
use crate::isa::Instruction;

/// Top-level simulator: CPU architectural state + decoded program.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, pc, stats).
    pub cpu: Cpu,
    program: Vec<Instruction>,
}

impl Simulator {
    /// Creates a simulator over an already-decoded program.
    pub fn new(program: Vec<Instruction>) -> Self {
        Self {
            cpu: Cpu::new(),
            program,
        }
    }

    /// Decodes a program source and creates a simulator over it.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] of the first malformed line; no partial
    /// program is ever executed.
    pub fn from_source(source: &str) -> Result<Self, DecodeError> {
        asm::decode_program(source).map(Self::new)
    }

    /// Runs the program until the program counter leaves the sequence.
    pub fn run(&mut self) {
        self.cpu.run(&self.program);
        self.cpu.stats.summarize();
    }

    /// Runs the program, retiring at most `budget` instructions.
    ///
    /// Branch and jump offsets can form cycles; embedders that need a
    /// termination guarantee run with a budget.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::StepLimitExceeded`] if the budget runs out first.
    pub fn run_with_budget(&mut self, budget: u64) -> Result<(), ExecError> {
        let outcome = self.cpu.run_with_budget(&self.program, budget);
        self.cpu.stats.summarize();
        outcome
    }

    /// Returns the final program counter.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// Returns the register array in index order.
    pub const fn registers(&self) -> &[u32; 32] {
        self.cpu.regs.snapshot()
    }
}
