//! # Decoder Tests
//!
//! Tests for line tokenization, operand parsing, shape dispatch, and the
//! decode error taxonomy.

use pretty_assertions::assert_eq;
use rvasm_core::asm::{decode_line, decode_program};
use rvasm_core::common::DecodeError;
use rvasm_core::isa::{Operands, opcodes};

use crate::common::decode_one;

#[test]
fn register_form_operand_order() {
    let inst = decode_one("add a2, a0, a1");
    assert_eq!(inst.mnemonic, "add");
    assert_eq!(inst.opcode, opcodes::OP_REG);
    assert_eq!(
        inst.operands,
        Operands::Register {
            rd: 12,
            funct3: 0,
            rs1: 10,
            rs2: 11,
            funct7: 0,
        }
    );
}

#[test]
fn tokenizer_accepts_mixed_separators() {
    let plain = decode_one("add a2, a0, a1");
    assert_eq!(decode_one("add a2 a0 a1"), plain);
    assert_eq!(decode_one("add   a2 ,  a0,a1"), plain);
    assert_eq!(decode_one("\tadd a2,\ta0, a1"), plain);
}

#[test]
fn blank_lines_produce_nothing() {
    assert_eq!(decode_line("", 1).unwrap(), None);
    assert_eq!(decode_line("   ", 2).unwrap(), None);
    assert_eq!(decode_line(" , ,, ", 3).unwrap(), None);
}

#[test]
fn load_operand_order_is_rd_imm_base() {
    let inst = decode_one("lw a0, 8, sp");
    assert_eq!(inst.opcode, opcodes::OP_LOAD);
    assert_eq!(
        inst.operands,
        Operands::Immediate {
            rd: 10,
            funct3: 0b010,
            rs1: 2,
            imm: 8,
        }
    );
}

#[test]
fn store_operand_order_is_src_imm_base() {
    let inst = decode_one("sw a0, 8, sp");
    assert_eq!(inst.opcode, opcodes::OP_STORE);
    assert_eq!(
        inst.operands,
        Operands::Store {
            funct3: 0b010,
            rs1: 2,
            rs2: 10,
            imm: 8,
        }
    );
}

#[test]
fn srai_packs_arithmetic_selector_into_immediate() {
    let inst = decode_one("srai a0, a1, 3");
    assert_eq!(
        inst.operands,
        Operands::Immediate {
            rd: 10,
            funct3: 0b101,
            rs1: 11,
            imm: 1027,
        }
    );
}

#[test]
fn srli_immediate_is_unbiased() {
    let inst = decode_one("srli a0, a1, 3");
    assert_eq!(
        inst.operands,
        Operands::Immediate {
            rd: 10,
            funct3: 0b101,
            rs1: 11,
            imm: 3,
        }
    );
}

#[test]
fn jalr_is_immediate_form_with_zero_selector() {
    let inst = decode_one("jalr ra, t0, 16");
    assert_eq!(inst.opcode, opcodes::OP_JALR);
    assert_eq!(
        inst.operands,
        Operands::Immediate {
            rd: 1,
            funct3: 0,
            rs1: 5,
            imm: 16,
        }
    );
}

#[test]
fn jal_is_jump_form() {
    let inst = decode_one("jal ra, -8");
    assert_eq!(inst.opcode, opcodes::OP_JAL);
    assert_eq!(inst.operands, Operands::Jump { rd: 1, imm: -8 });
}

#[test]
fn upper_immediate_forms() {
    let lui = decode_one("lui a0, 0xFFFFF");
    assert_eq!(lui.opcode, opcodes::OP_LUI);
    assert_eq!(
        lui.operands,
        Operands::UpperImmediate {
            rd: 10,
            imm: 0xF_FFFF,
        }
    );

    let auipc = decode_one("auipc a0, 1");
    assert_eq!(auipc.opcode, opcodes::OP_AUIPC);
    assert_eq!(auipc.operands, Operands::UpperImmediate { rd: 10, imm: 1 });
}

#[test]
fn immediates_parse_decimal_and_hex_with_late_sign() {
    let decimal = decode_one("addi a0, zero, -5");
    assert_eq!(
        decimal.operands,
        Operands::Immediate {
            rd: 10,
            funct3: 0,
            rs1: 0,
            imm: -5,
        }
    );

    let hex = decode_one("addi a0, zero, 0x10");
    assert!(matches!(hex.operands, Operands::Immediate { imm: 16, .. }));

    let negative_hex = decode_one("addi a0, zero, -0x10");
    assert!(matches!(
        negative_hex.operands,
        Operands::Immediate { imm: -16, .. }
    ));

    let upper_hex = decode_one("addi a0, zero, 0X1F");
    assert!(matches!(
        upper_hex.operands,
        Operands::Immediate { imm: 31, .. }
    ));
}

#[test]
fn direct_register_names_bypass_the_table() {
    let inst = decode_one("add x31, x0, x15");
    assert_eq!(
        inst.operands,
        Operands::Register {
            rd: 31,
            funct3: 0,
            rs1: 0,
            rs2: 15,
            funct7: 0,
        }
    );
}

#[test]
fn fence_letter_masks_fold_wroi_bits() {
    let inst = decode_one("fence rw, io");
    assert_eq!(inst.opcode, opcodes::OP_MISC_MEM);
    assert_eq!(
        inst.operands,
        Operands::Fence {
            pred: 0b0011,
            succ: 0b1100,
        }
    );
}

#[test]
fn fence_decimal_masks_parse_directly() {
    let inst = decode_one("fence 3, 12");
    assert_eq!(
        inst.operands,
        Operands::Fence {
            pred: 3,
            succ: 12,
        }
    );
}

#[test]
fn fence_unknown_letters_fold_to_nothing() {
    // Unrecognized letters are ignored and an empty mask is valid.
    let inst = decode_one("fence xyz, w");
    assert_eq!(inst.operands, Operands::Fence { pred: 0, succ: 1 });
}

#[test]
fn system_mnemonics_carry_no_operands() {
    for mnemonic in ["ecall", "ebreak", "pause", "fence.tso", "nop"] {
        let inst = decode_one(mnemonic);
        assert_eq!(inst.mnemonic, mnemonic);
        assert_eq!(inst.opcode, opcodes::OP_SYSTEM);
        assert_eq!(inst.operands, Operands::System);
    }
}

#[test]
fn unknown_mnemonic_is_an_error() {
    let err = decode_line("frobnicate a0, a1", 7).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownMnemonic {
            line: 7,
            mnemonic: "frobnicate".to_owned(),
        }
    );
}

#[test]
fn missing_operands_are_an_error() {
    let err = decode_line("add a0, a1", 3).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingOperands {
            line: 3,
            mnemonic: "add".to_owned(),
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn bad_register_tokens_are_an_error() {
    assert_eq!(
        decode_line("add a0, a1, q7", 1).unwrap_err(),
        DecodeError::BadRegister {
            line: 1,
            token: "q7".to_owned(),
        }
    );
    assert_eq!(
        decode_line("add x32, a1, a2", 1).unwrap_err(),
        DecodeError::BadRegister {
            line: 1,
            token: "x32".to_owned(),
        }
    );
}

#[test]
fn bad_immediates_are_an_error() {
    assert_eq!(
        decode_line("addi a0, a1, five", 1).unwrap_err(),
        DecodeError::BadImmediate {
            line: 1,
            token: "five".to_owned(),
        }
    );
    assert_eq!(
        decode_line("addi a0, a1, 0x", 1).unwrap_err(),
        DecodeError::BadImmediate {
            line: 1,
            token: "0x".to_owned(),
        }
    );
}

#[test]
fn program_decode_skips_blanks_and_reports_line_numbers() {
    let source = "addi a0, zero, 1\n\n   \naddi a1, zero, 2\nbogus a0\n";
    let err = decode_program(source).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownMnemonic {
            line: 5,
            mnemonic: "bogus".to_owned(),
        }
    );

    let clean = "addi a0, zero, 1\n\naddi a1, zero, 2\n";
    let program = decode_program(clean).unwrap();
    assert_eq!(program.len(), 2);
}
