//! Error definitions.
//!
//! This module defines the error taxonomy of the simulator:
//! 1. **Decode errors:** Malformed assembly lines, surfaced before execution
//!    begins (fail fast; no partial program is ever executed).
//! 2. **Execution errors:** Only the optional step-budget exhaustion; the
//!    instruction semantics themselves are total (division by zero, shifts,
//!    and out-of-range program counters all have defined outcomes).
//! 3. **Load errors:** I/O or decode failures while loading a program file.

use thiserror::Error;

/// Error produced while decoding a line of assembly text.
///
/// Every variant carries the 1-based line number of the offending input line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The mnemonic is not part of the supported instruction set.
    #[error("line {line}: unrecognized mnemonic `{mnemonic}`")]
    UnknownMnemonic {
        /// 1-based source line number.
        line: usize,
        /// The unrecognized mnemonic token.
        mnemonic: String,
    },

    /// A recognized mnemonic was given fewer operands than it requires.
    #[error("line {line}: `{mnemonic}` expects {expected} operands, found {found}")]
    MissingOperands {
        /// 1-based source line number.
        line: usize,
        /// The mnemonic of the instruction.
        mnemonic: String,
        /// Number of operands the instruction requires.
        expected: usize,
        /// Number of operands present on the line.
        found: usize,
    },

    /// An immediate operand is not a valid decimal or hexadecimal literal.
    #[error("line {line}: invalid immediate `{token}`")]
    BadImmediate {
        /// 1-based source line number.
        line: usize,
        /// The offending operand token.
        token: String,
    },

    /// A register operand names no known register, or indexes past x31.
    #[error("line {line}: invalid register `{token}`")]
    BadRegister {
        /// 1-based source line number.
        line: usize,
        /// The offending operand token.
        token: String,
    },
}

/// Error produced by a budgeted execution run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The step budget ran out before the program counter left the
    /// instruction sequence.
    #[error("step budget of {budget} exhausted at pc={pc:#x}")]
    StepLimitExceeded {
        /// The budget that was exhausted.
        budget: u64,
        /// Program counter at the moment the budget ran out.
        pc: u32,
    },
}

/// Error produced while loading a program from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("could not read program: {0}")]
    Io(#[from] std::io::Error),

    /// The input file did not decode into a valid program.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
