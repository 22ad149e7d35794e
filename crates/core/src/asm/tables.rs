//! Static mnemonic classification tables.
//!
//! Each table maps a mnemonic to the fixed field values of its encoding
//! shape. The tables reproduce the canonical RV32I+M funct3/funct7 pairing
//! and are dispatched exhaustively, so an unknown mnemonic falls out as
//! `None` rather than as a half-built instruction.

use crate::isa::instruction::SHAMT_BITS;
use crate::isa::{funct3, funct7};

/// Looks up the (funct3, funct7) pair of a register-register operation.
///
/// Covers the RV32I arithmetic/logical group and the full M extension.
pub fn register_op(mnemonic: &str) -> Option<(u32, u32)> {
    let pair = match mnemonic {
        "add" => (funct3::ADD_SUB, funct7::BASE),
        "sub" => (funct3::ADD_SUB, funct7::ALT),
        "sll" => (funct3::SLL, funct7::BASE),
        "slt" => (funct3::SLT, funct7::BASE),
        "sltu" => (funct3::SLTU, funct7::BASE),
        "xor" => (funct3::XOR, funct7::BASE),
        "srl" => (funct3::SRL_SRA, funct7::BASE),
        "sra" => (funct3::SRL_SRA, funct7::ALT),
        "or" => (funct3::OR, funct7::BASE),
        "and" => (funct3::AND, funct7::BASE),
        "mul" => (funct3::ADD_SUB, funct7::MULDIV),
        "mulh" => (funct3::SLL, funct7::MULDIV),
        "mulhsu" => (funct3::SLT, funct7::MULDIV),
        "mulhu" => (funct3::SLTU, funct7::MULDIV),
        "div" => (funct3::XOR, funct7::MULDIV),
        "divu" => (funct3::SRL_SRA, funct7::MULDIV),
        "rem" => (funct3::OR, funct7::MULDIV),
        "remu" => (funct3::AND, funct7::MULDIV),
        _ => return None,
    };
    Some(pair)
}

/// Looks up the funct3 selector and immediate bias of an immediate-arithmetic
/// operation.
///
/// The bias is nonzero only for `srai`: shift-immediate instructions pack the
/// funct7 selector into bits 5-11 of the immediate, and `srai` carries the
/// alternate (arithmetic) encoding there, i.e. `0b0100000 << 5` = 1024.
pub fn immediate_op(mnemonic: &str) -> Option<(u32, i32)> {
    let entry = match mnemonic {
        "addi" => (funct3::ADD_SUB, 0),
        "slti" => (funct3::SLT, 0),
        "sltiu" => (funct3::SLTU, 0),
        "xori" => (funct3::XOR, 0),
        "ori" => (funct3::OR, 0),
        "andi" => (funct3::AND, 0),
        "slli" => (funct3::SLL, 0),
        "srli" => (funct3::SRL_SRA, 0),
        "srai" => (funct3::SRL_SRA, (funct7::ALT as i32) << SHAMT_BITS),
        _ => return None,
    };
    Some(entry)
}

/// Looks up the funct3 comparison selector of a conditional branch.
pub fn branch_op(mnemonic: &str) -> Option<u32> {
    let selector = match mnemonic {
        "beq" => funct3::BEQ,
        "bne" => funct3::BNE,
        "blt" => funct3::BLT,
        "bge" => funct3::BGE,
        "bltu" => funct3::BLTU,
        "bgeu" => funct3::BGEU,
        _ => return None,
    };
    Some(selector)
}

/// Looks up the funct3 width selector of a load.
pub fn load_op(mnemonic: &str) -> Option<u32> {
    let selector = match mnemonic {
        "lb" => funct3::LB,
        "lh" => funct3::LH,
        "lw" => funct3::LW,
        "lbu" => funct3::LBU,
        "lhu" => funct3::LHU,
        _ => return None,
    };
    Some(selector)
}

/// Looks up the funct3 width selector of a store.
pub fn store_op(mnemonic: &str) -> Option<u32> {
    let selector = match mnemonic {
        "sb" => funct3::SB,
        "sh" => funct3::SH,
        "sw" => funct3::SW,
        _ => return None,
    };
    Some(selector)
}

/// Reports whether a mnemonic belongs to the no-operand system group.
pub fn is_system(mnemonic: &str) -> bool {
    matches!(mnemonic, "ecall" | "ebreak" | "pause" | "fence.tso" | "nop")
}
