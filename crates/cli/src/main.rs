//! Text-assembly RISC-V simulator CLI.
//!
//! This binary is thin glue around `rvasm-core`. It performs:
//! 1. **Argument parsing:** A single required `--asm <path>` flag.
//! 2. **Loading:** Reads and decodes the listing, failing fast before any
//!    instruction executes.
//! 3. **State dump:** Prints the final program counter on its own line, then
//!    the 32 register values in index order, each followed by a space. The
//!    byte layout is a stable contract for golden-output testing.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use rvasm_core::Simulator;
use rvasm_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "rvasm",
    author,
    version,
    about = "Text-assembly simulator for a 32-bit RISC-V subset",
    long_about = "Decode a text assembly listing (one instruction per line) and interpret it \
                  against a 32-register machine with no memory bus.\n\nExample:\n  rvasm --asm program.s"
)]
struct Cli {
    /// Assembly listing to execute (one instruction per line).
    #[arg(long)]
    asm: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let program = match loader::load_program(&cli.asm) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    };

    let mut sim = Simulator::new(program);
    sim.run();

    if let Err(e) = print_final_state(sim.pc(), sim.registers()) {
        eprintln!("[!] FATAL: could not write final state: {e}");
        process::exit(1);
    }
}

/// Writes the final machine state to stdout.
///
/// Format: the program counter and a newline, then every register value
/// followed by a single space, with no trailing newline.
fn print_final_state(pc: u32, regs: &[u32; 32]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{pc}")?;
    for value in regs {
        write!(stdout, "{value} ")?;
    }
    stdout.flush()
}
