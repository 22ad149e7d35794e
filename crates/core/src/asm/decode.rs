//! Assembly text decoder.
//!
//! This module turns mnemonic lines into structured [`Instruction`] values.
//! It performs the following:
//! 1. **Tokenization:** Splits a line on whitespace and commas, discarding
//!    empty tokens; lines with no tokens produce no instruction.
//! 2. **Operand parsing:** Resolves register names (direct `xN`, ABI names,
//!    `rN` aliases) and signed decimal/hexadecimal immediates.
//! 3. **Shape dispatch:** Classifies the mnemonic through the static tables
//!    and builds the matching opcode/operand pair, failing fast on anything
//!    unrecognized or short of operands.

use tracing::debug;

use super::tables;
use crate::common::DecodeError;
use crate::isa::instruction::{FENCE_I, FENCE_O, FENCE_R, FENCE_W};
use crate::isa::{Instruction, Operands, abi, funct3, opcodes};

/// Decodes a full program, one instruction per non-blank line.
///
/// Decoding is a separate pass from execution: the first malformed line
/// aborts the decode and no partial program is returned.
///
/// # Arguments
///
/// * `source` - The program text; lines are separated by `\n`.
///
/// # Errors
///
/// Returns the [`DecodeError`] of the first offending line.
pub fn decode_program(source: &str) -> Result<Vec<Instruction>, DecodeError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(inst) = decode_line(line, idx + 1)? {
            program.push(inst);
        }
    }
    debug!(instructions = program.len(), "program decoded");
    Ok(program)
}

/// Decodes a single line of assembly text.
///
/// # Arguments
///
/// * `line` - The raw source line.
/// * `line_no` - 1-based line number, used in error reports.
///
/// # Returns
///
/// `Ok(None)` for blank (token-free) lines, `Ok(Some(_))` otherwise.
///
/// # Errors
///
/// Returns a [`DecodeError`] for unknown mnemonics, missing operands, and
/// malformed register or immediate tokens.
pub fn decode_line(line: &str, line_no: usize) -> Result<Option<Instruction>, DecodeError> {
    let tokens = tokenize(line);
    let Some((&mnemonic, operands)) = tokens.split_first() else {
        return Ok(None);
    };
    build_instruction(mnemonic, operands, line_no).map(Some)
}

/// Splits a line into mnemonic and operand tokens.
///
/// Separators are runs of whitespace and/or commas; empty tokens are dropped,
/// so `add a0 , a1,a2` and `add a0, a1, a2` tokenize identically.
fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Dispatches a mnemonic to its encoding shape and builds the instruction.
fn build_instruction(
    mnemonic: &str,
    operands: &[&str],
    line: usize,
) -> Result<Instruction, DecodeError> {
    if let Some((funct3, funct7)) = tables::register_op(mnemonic) {
        require(mnemonic, operands, 3, line)?;
        let operands = Operands::Register {
            rd: parse_register(operands[0], line)?,
            funct3,
            rs1: parse_register(operands[1], line)?,
            rs2: parse_register(operands[2], line)?,
            funct7,
        };
        return Ok(Instruction::new(mnemonic, opcodes::OP_REG, operands));
    }

    if let Some((funct3, bias)) = tables::immediate_op(mnemonic) {
        require(mnemonic, operands, 3, line)?;
        let operands = Operands::Immediate {
            rd: parse_register(operands[0], line)?,
            funct3,
            rs1: parse_register(operands[1], line)?,
            imm: parse_immediate(operands[2], line)?.wrapping_add(bias),
        };
        return Ok(Instruction::new(mnemonic, opcodes::OP_IMM, operands));
    }

    if let Some(funct3) = tables::branch_op(mnemonic) {
        require(mnemonic, operands, 3, line)?;
        let operands = Operands::Branch {
            funct3,
            rs1: parse_register(operands[0], line)?,
            rs2: parse_register(operands[1], line)?,
            imm: parse_immediate(operands[2], line)?,
        };
        return Ok(Instruction::new(mnemonic, opcodes::OP_BRANCH, operands));
    }

    if let Some(funct3) = tables::load_op(mnemonic) {
        require(mnemonic, operands, 3, line)?;
        let operands = Operands::Immediate {
            rd: parse_register(operands[0], line)?,
            funct3,
            rs1: parse_register(operands[2], line)?,
            imm: parse_immediate(operands[1], line)?,
        };
        return Ok(Instruction::new(mnemonic, opcodes::OP_LOAD, operands));
    }

    if let Some(funct3) = tables::store_op(mnemonic) {
        require(mnemonic, operands, 3, line)?;
        let operands = Operands::Store {
            funct3,
            rs1: parse_register(operands[2], line)?,
            rs2: parse_register(operands[0], line)?,
            imm: parse_immediate(operands[1], line)?,
        };
        return Ok(Instruction::new(mnemonic, opcodes::OP_STORE, operands));
    }

    match mnemonic {
        "jal" => {
            require(mnemonic, operands, 2, line)?;
            let operands = Operands::Jump {
                rd: parse_register(operands[0], line)?,
                imm: parse_immediate(operands[1], line)?,
            };
            Ok(Instruction::new(mnemonic, opcodes::OP_JAL, operands))
        }
        "jalr" => {
            require(mnemonic, operands, 3, line)?;
            let operands = Operands::Immediate {
                rd: parse_register(operands[0], line)?,
                funct3: funct3::ADD_SUB,
                rs1: parse_register(operands[1], line)?,
                imm: parse_immediate(operands[2], line)?,
            };
            Ok(Instruction::new(mnemonic, opcodes::OP_JALR, operands))
        }
        "lui" | "auipc" => {
            require(mnemonic, operands, 2, line)?;
            let shape = Operands::UpperImmediate {
                rd: parse_register(operands[0], line)?,
                imm: parse_immediate(operands[1], line)?,
            };
            let opcode = if mnemonic == "lui" {
                opcodes::OP_LUI
            } else {
                opcodes::OP_AUIPC
            };
            Ok(Instruction::new(mnemonic, opcode, shape))
        }
        "fence" => {
            require(mnemonic, operands, 2, line)?;
            let operands = Operands::Fence {
                pred: parse_fence_mask(operands[0], line)?,
                succ: parse_fence_mask(operands[1], line)?,
            };
            Ok(Instruction::new(mnemonic, opcodes::OP_MISC_MEM, operands))
        }
        _ if tables::is_system(mnemonic) => Ok(Instruction::new(
            mnemonic,
            opcodes::OP_SYSTEM,
            Operands::System,
        )),
        _ => Err(DecodeError::UnknownMnemonic {
            line,
            mnemonic: mnemonic.to_owned(),
        }),
    }
}

/// Checks that a mnemonic received at least the operands it requires.
///
/// Surplus operands on a line are ignored, not rejected.
fn require(
    mnemonic: &str,
    operands: &[&str],
    expected: usize,
    line: usize,
) -> Result<(), DecodeError> {
    if operands.len() < expected {
        return Err(DecodeError::MissingOperands {
            line,
            mnemonic: mnemonic.to_owned(),
            expected,
            found: operands.len(),
        });
    }
    Ok(())
}

/// Resolves a register operand token to its index.
///
/// Tokens starting with `x` parse the remaining digits directly; everything
/// else goes through the ABI name table. Out-of-range indices are rejected
/// rather than left to fault during execution.
fn parse_register(token: &str, line: usize) -> Result<usize, DecodeError> {
    let index = match token.strip_prefix('x') {
        Some(digits) => digits.parse::<usize>().ok().filter(|&n| n < 32),
        None => abi::lookup(token),
    };
    index.ok_or_else(|| DecodeError::BadRegister {
        line,
        token: token.to_owned(),
    })
}

/// Parses a signed immediate operand.
///
/// Grammar: optional leading `-`, then a `0x`/`0X` hexadecimal literal or a
/// decimal literal. The sign is applied after the magnitude parse, so
/// `-0x10` yields -16.
fn parse_immediate(token: &str, line: usize) -> Result<i32, DecodeError> {
    let bad = || DecodeError::BadImmediate {
        line,
        token: token.to_owned(),
    };

    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).map_err(|_| bad())?
    } else {
        body.parse::<u32>().map_err(|_| bad())?
    };

    let value = magnitude as i32;
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Parses a fence ordering mask token.
///
/// An all-digit token is taken as a decimal literal (truncated to 8 bits);
/// anything else is folded letter by letter into the 4-bit w/r/o/i mask.
/// Unrecognized letters contribute nothing, and an empty mask is valid.
fn parse_fence_mask(token: &str, line: usize) -> Result<u8, DecodeError> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let value = token.parse::<u32>().map_err(|_| DecodeError::BadImmediate {
            line,
            token: token.to_owned(),
        })?;
        return Ok(value as u8);
    }

    let mut mask = 0;
    for c in token.chars() {
        match c {
            'w' => mask |= FENCE_W,
            'r' => mask |= FENCE_R,
            'o' => mask |= FENCE_O,
            'i' => mask |= FENCE_I,
            _ => {}
        }
    }
    Ok(mask)
}
