//! # Memoryless Instruction Tests
//!
//! With no memory bus attached, loads write zero to the destination,
//! stores touch no register at all, and fence/system instructions only
//! advance the program counter.

use rvasm_core::Cpu;

use crate::common::{cpu_with, step};

#[test]
fn loads_write_zero_to_the_destination() {
    for line in [
        "lb a0, 0, a1",
        "lh a0, 0, a1",
        "lw a0, 0, a1",
        "lbu a0, 0, a1",
        "lhu a0, 0, a1",
    ] {
        let mut cpu = cpu_with(&[(10, 0xDEAD_BEEF), (11, 64)]);
        step(&mut cpu, line);
        assert_eq!(cpu.regs.read(10), 0, "{line}");
        assert_eq!(cpu.pc, 4, "{line}");
    }
}

#[test]
fn stores_leave_the_register_file_untouched() {
    for line in ["sb a0, 0, a1", "sh a0, 4, a1", "sw a0, -8, a1"] {
        let mut cpu = cpu_with(&[(10, 0xDEAD_BEEF), (11, 64)]);
        let before = *cpu.regs.snapshot();
        step(&mut cpu, line);
        assert_eq!(*cpu.regs.snapshot(), before, "{line}");
        assert_eq!(cpu.pc, 4, "{line}");
    }
}

#[test]
fn fence_only_advances_pc() {
    let mut cpu = cpu_with(&[(10, 7)]);
    step(&mut cpu, "fence rw, io");
    assert_eq!(cpu.regs.read(10), 7);
    assert_eq!(cpu.pc, 4);
}

#[test]
fn system_instructions_only_advance_pc() {
    for line in ["ecall", "ebreak", "pause", "fence.tso", "nop"] {
        let mut cpu = cpu_with(&[(10, 7)]);
        step(&mut cpu, line);
        assert_eq!(cpu.regs.read(10), 7, "{line}");
        assert_eq!(cpu.pc, 4, "{line}");
    }
}
