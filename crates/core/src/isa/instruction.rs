//! Instruction model.
//!
//! This module defines the structured instruction value produced by the
//! assembly decoder and consumed by the execution engine. It provides:
//! 1. **Closed operand union:** Exactly one of eight operand shapes, chosen
//!    jointly with the opcode at construction time.
//! 2. **Shift-immediate packing:** Constants describing how shift-immediate
//!    instructions fold the logical/arithmetic selector into the immediate.
//! 3. **Fence masks:** Bit assignments for the FENCE predecessor/successor sets.

/// Number of bits used for a shift amount; shifts operate modulo 32.
pub const SHAMT_BITS: u32 = 5;

/// Mask selecting the shift amount from a shift-immediate value.
pub const SHAMT_MASK: i32 = 0b11111;

/// Mask selecting the funct7 selector packed into bits 5-11 of a
/// shift-immediate value.
pub const SHIFT_FUNCT7_MASK: i32 = 0x7F;

/// Write bit of a fence ordering mask.
pub const FENCE_W: u8 = 0b0001;
/// Read bit of a fence ordering mask.
pub const FENCE_R: u8 = 0b0010;
/// Output bit of a fence ordering mask.
pub const FENCE_O: u8 = 0b0100;
/// Input bit of a fence ordering mask.
pub const FENCE_I: u8 = 0b1000;

/// Operand payload of a decoded instruction.
///
/// Exactly one shape is populated per instruction; the shape and the opcode
/// are determined together by the mnemonic, so the execution engine can
/// recover every operand with an exhaustive match and no runtime
/// reinterpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operands {
    /// Register-register form (ADD, SUB, MUL, DIV, etc.).
    Register {
        /// Destination register index.
        rd: usize,
        /// 3-bit operation selector.
        funct3: u32,
        /// First source register index.
        rs1: usize,
        /// Second source register index.
        rs2: usize,
        /// 7-bit operation variant selector.
        funct7: u32,
    },
    /// Immediate form (ADDI and friends, loads, JALR).
    ///
    /// For shift-immediate operations the immediate packs the shift amount in
    /// its low [`SHAMT_BITS`] bits and the funct7 selector in bits 5-11.
    Immediate {
        /// Destination register index.
        rd: usize,
        /// 3-bit operation selector.
        funct3: u32,
        /// Source register index.
        rs1: usize,
        /// Signed 32-bit immediate.
        imm: i32,
    },
    /// Store form (SB, SH, SW).
    Store {
        /// 3-bit width selector.
        funct3: u32,
        /// Base register index.
        rs1: usize,
        /// Value-source register index.
        rs2: usize,
        /// Signed byte offset.
        imm: i32,
    },
    /// Conditional branch form (BEQ, BNE, BLT, BGE, BLTU, BGEU).
    Branch {
        /// 3-bit comparison selector.
        funct3: u32,
        /// First compared register index.
        rs1: usize,
        /// Second compared register index.
        rs2: usize,
        /// Signed byte offset relative to the current pc.
        imm: i32,
    },
    /// Upper-immediate form (LUI, AUIPC).
    UpperImmediate {
        /// Destination register index.
        rd: usize,
        /// 20-bit immediate (stored unshifted; execution shifts left by 12).
        imm: i32,
    },
    /// Jump-and-link form (JAL).
    Jump {
        /// Destination register index for the link value.
        rd: usize,
        /// Signed byte offset relative to the current pc.
        imm: i32,
    },
    /// Memory ordering form (FENCE).
    Fence {
        /// Predecessor ordering mask (4 bits: w/r/o/i).
        pred: u8,
        /// Successor ordering mask (4 bits: w/r/o/i).
        succ: u8,
    },
    /// System form (ECALL, EBREAK, PAUSE, FENCE.TSO, NOP); no operands,
    /// the mnemonic itself identifies the instruction.
    System,
}

/// A decoded machine instruction.
///
/// Immutable once built: the decoder picks the opcode and operand shape from
/// the mnemonic, and the execution engine dispatches on them without ever
/// consulting the mnemonic string again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Human-readable mnemonic as written in the source line.
    pub mnemonic: String,
    /// 7-bit major opcode selecting the dispatch category.
    pub opcode: u32,
    /// Operand payload; always consistent with `opcode`.
    pub operands: Operands,
}

impl Instruction {
    /// Creates an instruction from its mnemonic, opcode, and operand payload.
    pub fn new(mnemonic: &str, opcode: u32, operands: Operands) -> Self {
        Self {
            mnemonic: mnemonic.to_owned(),
            opcode,
            operands,
        }
    }
}
