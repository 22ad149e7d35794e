//! Execution engine.
//!
//! This module implements the fetch-by-index/execute loop of the CPU. It
//! performs the following:
//! 1. **Dispatch:** Exhaustive match over the operand union, refined by the
//!    opcode, funct3, and funct7 fields where the shape is shared.
//! 2. **Arithmetic semantics:** Register bit patterns are reinterpreted as
//!    signed or unsigned per operation; division by zero and shift amounts
//!    have defined results, never faults.
//! 3. **Program counter policy:** Every non-branching instruction (fence and
//!    system included) advances the pc by 4; branches and jumps redirect it.
//!
//! Execution stops when `pc / 4` leaves the instruction sequence - that is
//! the normal termination signal, not an error.

use tracing::trace;

use super::Cpu;
use crate::common::ExecError;
use crate::isa::instruction::{SHAMT_BITS, SHAMT_MASK, SHIFT_FUNCT7_MASK};
use crate::isa::{Instruction, Operands, funct3, funct7, opcodes};

/// Number of bits to promote an upper immediate by (LUI/AUIPC).
const UPPER_IMM_SHIFT: u32 = 12;

impl Cpu {
    /// Runs the program to completion.
    ///
    /// Fetches the instruction at index `pc / 4` and executes it until the
    /// index falls outside the sequence. A program whose branches form a
    /// cycle never terminates; use [`Cpu::run_with_budget`] when an upper
    /// bound is required.
    pub fn run(&mut self, program: &[Instruction]) {
        while let Some(inst) = program.get((self.pc / 4) as usize) {
            self.step(inst);
        }
    }

    /// Runs the program, retiring at most `budget` instructions.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::StepLimitExceeded`] if the budget runs out while
    /// the program counter is still in bounds. The machine state reflects
    /// every instruction retired up to that point.
    pub fn run_with_budget(
        &mut self,
        program: &[Instruction],
        budget: u64,
    ) -> Result<(), ExecError> {
        let mut steps = 0;
        while let Some(inst) = program.get((self.pc / 4) as usize) {
            if steps == budget {
                return Err(ExecError::StepLimitExceeded {
                    budget,
                    pc: self.pc,
                });
            }
            self.step(inst);
            steps += 1;
        }
        Ok(())
    }

    /// Executes a single instruction, mutating registers and the pc.
    ///
    /// Writes to register 0 are discarded by the register file on every path.
    pub fn step(&mut self, inst: &Instruction) {
        let pc = self.pc;

        let next_pc = match inst.operands {
            Operands::Register {
                rd,
                funct3,
                rs1,
                rs2,
                funct7,
            } => {
                let result =
                    alu_register(self.regs.read(rs1), self.regs.read(rs2), funct3, funct7);
                if let Some(value) = result {
                    self.regs.write(rd, value);
                }
                self.stats.inst_alu += 1;
                pc.wrapping_add(4)
            }

            Operands::Immediate {
                rd,
                funct3,
                rs1,
                imm,
            } => match inst.opcode {
                // No memory bus is modeled; loads retire with rd cleared.
                opcodes::OP_LOAD => {
                    self.regs.write(rd, 0);
                    self.stats.inst_load += 1;
                    pc.wrapping_add(4)
                }
                // Link first, then compute the target: when rd aliases rs1
                // the target uses the freshly written link value.
                opcodes::OP_JALR => {
                    self.regs.write(rd, pc.wrapping_add(4));
                    self.stats.inst_branch += 1;
                    ((self.regs.read(rs1) as i32).wrapping_add(imm) as u32) & !1
                }
                _ => {
                    if let Some(value) = alu_immediate(self.regs.read(rs1), imm, funct3) {
                        self.regs.write(rd, value);
                    }
                    self.stats.inst_alu += 1;
                    pc.wrapping_add(4)
                }
            },

            // Stores have no memory bus to reach; they retire without
            // touching any register.
            Operands::Store { .. } => {
                self.stats.inst_store += 1;
                pc.wrapping_add(4)
            }

            Operands::Branch {
                funct3,
                rs1,
                rs2,
                imm,
            } => {
                self.stats.inst_branch += 1;
                if branch_taken(self.regs.read(rs1), self.regs.read(rs2), funct3) {
                    self.stats.branches_taken += 1;
                    (pc as i32).wrapping_add(imm) as u32
                } else {
                    pc.wrapping_add(4)
                }
            }

            Operands::UpperImmediate { rd, imm } => {
                let value = if inst.opcode == opcodes::OP_LUI {
                    (imm as u32) << UPPER_IMM_SHIFT
                } else {
                    (pc as i32).wrapping_add(imm.wrapping_shl(UPPER_IMM_SHIFT)) as u32
                };
                self.regs.write(rd, value);
                self.stats.inst_alu += 1;
                pc.wrapping_add(4)
            }

            Operands::Jump { rd, imm } => {
                self.regs.write(rd, pc.wrapping_add(4));
                self.stats.inst_branch += 1;
                (pc as i32).wrapping_add(imm) as u32
            }

            // Ordering and environment instructions are architectural no-ops
            // here; they still advance the pc so straight-line programs
            // containing them terminate.
            Operands::Fence { .. } | Operands::System => {
                self.stats.inst_system += 1;
                pc.wrapping_add(4)
            }
        };

        self.stats.instructions_retired += 1;
        trace!(pc, next_pc, mnemonic = %inst.mnemonic, "retired");
        self.pc = next_pc;
    }
}

/// Computes a register-register ALU result.
///
/// Returns `None` for (funct3, funct7) pairs outside the encoded set; the
/// instruction still retires, it just writes nothing.
fn alu_register(rs1: u32, rs2: u32, funct3: u32, funct7: u32) -> Option<u32> {
    let srs1 = rs1 as i32;
    let srs2 = rs2 as i32;

    let value = match (funct3, funct7) {
        (funct3::ADD_SUB, funct7::BASE) => srs1.wrapping_add(srs2) as u32,
        (funct3::ADD_SUB, funct7::ALT) => srs1.wrapping_sub(srs2) as u32,
        (funct3::ADD_SUB, funct7::MULDIV) => (i64::from(srs1) * i64::from(srs2)) as u32,

        (funct3::SLL, funct7::BASE) => rs1 << (rs2 & SHAMT_MASK as u32),
        (funct3::SLL, funct7::MULDIV) => ((i64::from(srs1) * i64::from(srs2)) >> 32) as u32,

        (funct3::SLT, funct7::BASE) => (srs1 < srs2) as u32,
        (funct3::SLT, funct7::MULDIV) => {
            // Signed x unsigned: the signed operand is sign-extended into the
            // 64-bit product, the unsigned one is zero-extended.
            ((i64::from(srs1) as u64).wrapping_mul(u64::from(rs2)) >> 32) as u32
        }

        (funct3::SLTU, funct7::BASE) => (rs1 < rs2) as u32,
        (funct3::SLTU, funct7::MULDIV) => ((u64::from(rs1) * u64::from(rs2)) >> 32) as u32,

        (funct3::XOR, funct7::BASE) => rs1 ^ rs2,
        (funct3::XOR, funct7::MULDIV) => {
            if rs2 == 0 {
                u32::MAX
            } else {
                srs1.wrapping_div(srs2) as u32
            }
        }

        (funct3::SRL_SRA, funct7::BASE) => rs1 >> (rs2 & SHAMT_MASK as u32),
        (funct3::SRL_SRA, funct7::ALT) => (srs1 >> (rs2 & SHAMT_MASK as u32)) as u32,
        (funct3::SRL_SRA, funct7::MULDIV) => if rs2 == 0 { u32::MAX } else { rs1 / rs2 },

        (funct3::OR, funct7::BASE) => rs1 | rs2,
        (funct3::OR, funct7::MULDIV) => {
            if rs2 == 0 {
                rs1
            } else {
                srs1.wrapping_rem(srs2) as u32
            }
        }

        (funct3::AND, funct7::BASE) => rs1 & rs2,
        (funct3::AND, funct7::MULDIV) => if rs2 == 0 { rs1 } else { rs1 % rs2 },

        _ => return None,
    };
    Some(value)
}

/// Computes an immediate-arithmetic ALU result.
///
/// Shift-immediate operations unpack the shift amount from the low bits of
/// the immediate and the funct7 selector from bits 5-11; an unrecognized
/// selector writes nothing.
fn alu_immediate(rs1: u32, imm: i32, funct3: u32) -> Option<u32> {
    let srs1 = rs1 as i32;

    let value = match funct3 {
        funct3::ADD_SUB => srs1.wrapping_add(imm) as u32,
        funct3::SLT => (srs1 < imm) as u32,
        funct3::SLTU => (rs1 < imm as u32) as u32,
        funct3::XOR => rs1 ^ imm as u32,
        funct3::OR => rs1 | imm as u32,
        funct3::AND => rs1 & imm as u32,
        funct3::SLL | funct3::SRL_SRA => {
            let shamt = (imm & SHAMT_MASK) as u32;
            let selector = ((imm >> SHAMT_BITS) & SHIFT_FUNCT7_MASK) as u32;
            return match (funct3, selector) {
                (funct3::SLL, funct7::BASE) => Some(rs1 << shamt),
                (funct3::SRL_SRA, funct7::BASE) => Some(rs1 >> shamt),
                (funct3::SRL_SRA, funct7::ALT) => Some((srs1 >> shamt) as u32),
                _ => None,
            };
        }
        _ => return None,
    };
    Some(value)
}

/// Evaluates a branch comparison on two register values.
fn branch_taken(rs1: u32, rs2: u32, funct3: u32) -> bool {
    match funct3 {
        funct3::BEQ => rs1 == rs2,
        funct3::BNE => rs1 != rs2,
        funct3::BLT => (rs1 as i32) < (rs2 as i32),
        funct3::BGE => (rs1 as i32) >= (rs2 as i32),
        funct3::BLTU => rs1 < rs2,
        funct3::BGEU => rs1 >= rs2,
        _ => false,
    }
}
