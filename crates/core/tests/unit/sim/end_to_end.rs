//! # End-to-End Simulation Tests
//!
//! Whole programs decoded from source text and run to completion: final
//! register state, program-counter position, retirement counts, and the
//! step-budget guard for non-terminating programs.

use pretty_assertions::assert_eq;
use rvasm_core::Simulator;
use rvasm_core::common::{DecodeError, ExecError};
use rvasm_core::isa::abi;

fn run_source(source: &str) -> Simulator {
    let mut sim = match Simulator::from_source(source) {
        Ok(sim) => sim,
        Err(e) => panic!("decode failed: {e}"),
    };
    sim.run();
    sim
}

#[test]
fn single_addi_round_trip() {
    let sim = run_source("addi a0, zero, 5");
    assert_eq!(sim.registers()[abi::REG_A0], 5);
    assert_eq!(sim.pc(), 4);
}

#[test]
fn straight_line_program_retires_every_instruction() {
    let source = "addi a0, zero, 1\n\
                  addi a1, zero, 2\n\
                  add a2, a0, a1\n\
                  mul a3, a2, a2";
    let sim = run_source(source);
    assert_eq!(sim.registers()[12], 3);
    assert_eq!(sim.registers()[13], 9);
    assert_eq!(sim.pc(), 16);
    assert_eq!(sim.cpu.stats.instructions_retired, 4);
}

#[test]
fn blank_lines_do_not_occupy_program_slots() {
    let source = "addi a0, zero, 1\n\n   \naddi a1, zero, 2\n";
    let sim = run_source(source);
    assert_eq!(sim.registers()[10], 1);
    assert_eq!(sim.registers()[11], 2);
    assert_eq!(sim.pc(), 8);
}

#[test]
fn backward_branch_loop_terminates() {
    // Count a0 down from 3; the loop body runs three times.
    let source = "addi a0, zero, 3\n\
                  addi a1, a1, 1\n\
                  addi a0, a0, -1\n\
                  bne a0, zero, -8";
    let sim = run_source(source);
    assert_eq!(sim.registers()[10], 0);
    assert_eq!(sim.registers()[11], 3);
    assert_eq!(sim.pc(), 16);
    assert_eq!(sim.cpu.stats.instructions_retired, 10);
}

#[test]
fn taken_branch_off_the_front_terminates() {
    let source = "addi a0, zero, 8\n\
                  beq a0, a0, -16";
    let sim = run_source(source);
    // pc = 4 + (-16) wraps far outside the program.
    assert_eq!(sim.cpu.stats.instructions_retired, 2);
}

#[test]
fn budget_stops_a_non_terminating_program() {
    let mut sim = match Simulator::from_source("jal zero, 0") {
        Ok(sim) => sim,
        Err(e) => panic!("decode failed: {e}"),
    };
    let err = sim.run_with_budget(10).unwrap_err();
    assert_eq!(err, ExecError::StepLimitExceeded { budget: 10, pc: 0 });
    assert_eq!(sim.cpu.stats.instructions_retired, 10);
}

#[test]
fn budget_is_not_charged_to_terminating_programs() {
    let mut sim = match Simulator::from_source("addi a0, zero, 5") {
        Ok(sim) => sim,
        Err(e) => panic!("decode failed: {e}"),
    };
    assert!(sim.run_with_budget(10).is_ok());
    assert_eq!(sim.registers()[10], 5);
}

#[test]
fn decode_failure_is_fail_fast() {
    let source = "addi a0, zero, 1\nbogus a0, a1\naddi a1, zero, 2";
    let err = match Simulator::from_source(source) {
        Ok(_) => panic!("expected a decode error"),
        Err(e) => e,
    };
    assert_eq!(
        err,
        DecodeError::UnknownMnemonic {
            line: 2,
            mnemonic: "bogus".to_owned(),
        }
    );
}

#[test]
fn empty_source_runs_to_an_empty_final_state() {
    let sim = run_source("");
    assert_eq!(sim.pc(), 0);
    assert_eq!(sim.registers(), &[0u32; 32]);
    assert_eq!(sim.cpu.stats.instructions_retired, 0);
}
