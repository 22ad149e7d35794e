//! RV32 Function Codes (funct7).
//!
//! The `funct7` field further refines register-register operations,
//! separating the base encoding from the alternate (SUB/SRA) and the
//! M-extension multiply/divide group.

/// Standard encoding (ADD, SLL, SRL, etc.).
pub const BASE: u32 = 0b0000000;

/// M-extension multiply/divide group (MUL, DIV, REM, etc.).
pub const MULDIV: u32 = 0b0000001;

/// Alternate encoding (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;
