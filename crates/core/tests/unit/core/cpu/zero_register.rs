//! Zero-register tests: writes to `x0` are discarded whichever
//! instruction shape produces them, and reads always return zero.

use rvasm_core::Cpu;

use crate::common::{cpu_with, step};

#[test]
fn alu_writes_to_zero_are_discarded() {
    let mut cpu = cpu_with(&[(10, 5), (11, 7)]);
    step(&mut cpu, "add zero, a0, a1");
    assert_eq!(cpu.regs.read(0), 0);
}

#[test]
fn immediate_writes_to_zero_are_discarded() {
    let mut cpu = Cpu::new();
    step(&mut cpu, "addi x0, x0, 42");
    assert_eq!(cpu.regs.read(0), 0);
}

#[test]
fn jump_links_to_zero_are_discarded() {
    let mut cpu = Cpu::new();
    step(&mut cpu, "jal zero, 8");
    assert_eq!(cpu.regs.read(0), 0);
    assert_eq!(cpu.pc, 8);
}

#[test]
fn load_writes_to_zero_are_discarded() {
    let mut cpu = cpu_with(&[(11, 64)]);
    step(&mut cpu, "lw zero, 0, a1");
    assert_eq!(cpu.regs.read(0), 0);
}

#[test]
fn zero_reads_as_zero_after_any_program() {
    let mut cpu = cpu_with(&[(10, 9)]);
    step(&mut cpu, "lui zero, 1048575");
    step(&mut cpu, "sub x0, x0, a0");
    assert_eq!(cpu.regs.read(0), 0);
}
