//! Run statistics collection.
//!
//! This module tracks retirement counts for a simulation run. It provides:
//! 1. **Totals:** Instructions retired across the whole run.
//! 2. **Instruction mix:** Counts by category (ALU, load, store,
//!    branch/jump, fence/system).
//! 3. **Branch behavior:** How many conditional branches were taken.

use tracing::info;

/// Statistics for a single simulation run.
///
/// Updated once per retired instruction by the execution engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total number of instructions retired.
    pub instructions_retired: u64,
    /// Register/immediate/upper-immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Load instructions retired.
    pub inst_load: u64,
    /// Store instructions retired.
    pub inst_store: u64,
    /// Branch and jump instructions retired.
    pub inst_branch: u64,
    /// Fence and system instructions retired.
    pub inst_system: u64,
    /// Conditional branches whose condition held.
    pub branches_taken: u64,
}

impl SimStats {
    /// Creates a zeroed statistics record.
    pub const fn new() -> Self {
        Self {
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }

    /// Emits the run summary as a structured log event.
    pub fn summarize(&self) {
        info!(
            retired = self.instructions_retired,
            alu = self.inst_alu,
            load = self.inst_load,
            store = self.inst_store,
            branch = self.inst_branch,
            system = self.inst_system,
            branches_taken = self.branches_taken,
            "run complete"
        );
    }
}
