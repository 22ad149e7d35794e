//! Architectural register file.
//!
//! This module implements the general-purpose register file for the simulated
//! RV32 machine. It performs the following:
//! 1. **Storage:** Maintains 32 unsigned 32-bit registers (`x0`-`x31`).
//! 2. **Invariant enforcement:** Register `x0` reads as zero and discards writes.
//! 3. **Observability:** Exposes a snapshot of the full register array for the
//!    final state dump.

/// General-purpose register file.
///
/// Contains the 32 architectural registers. Register `x0` is hardwired to
/// zero; the hardwiring is enforced here so every execution path that writes
/// a destination register gets the invariant for free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; 32],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// Writes to `x0` are silently discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns the full register array in index order.
    pub const fn snapshot(&self) -> &[u32; 32] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Useful for debugging a run without disturbing the stdout contract.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            eprintln!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
