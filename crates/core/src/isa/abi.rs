//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps the standard ABI register names (`zero`, `ra`, `sp`, `t0`-`t6`,
//! `s0`-`s11`, `a0`-`a7`) and the secondary numeric alias scheme (`r0`-`r31`)
//! to architectural register indices. Raw `xN` names are handled by the
//! decoder directly and never reach this table.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1).
pub const REG_A1: usize = 11;
/// Register x12 (third argument, a2).
pub const REG_A2: usize = 12;

/// Resolves a symbolic register name to its architectural index.
///
/// Accepts the standard ABI names (including the `fp` alias for `s0`) and the
/// numeric aliases `r0`-`r31`, which map directly to indices 0-31.
///
/// # Arguments
///
/// * `name` - The register name token, without surrounding whitespace.
///
/// # Returns
///
/// The register index (0-31), or `None` if the name is not in the table.
pub fn lookup(name: &str) -> Option<usize> {
    let index = match name {
        "zero" => 0,
        "ra" => 1,
        "sp" => 2,
        "gp" => 3,
        "tp" => 4,
        "t0" => 5,
        "t1" => 6,
        "t2" => 7,
        "s0" | "fp" => 8,
        "s1" => 9,
        "a0" => 10,
        "a1" => 11,
        "a2" => 12,
        "a3" => 13,
        "a4" => 14,
        "a5" => 15,
        "a6" => 16,
        "a7" => 17,
        "s2" => 18,
        "s3" => 19,
        "s4" => 20,
        "s5" => 21,
        "s6" => 22,
        "s7" => 23,
        "s8" => 24,
        "s9" => 25,
        "s10" => 26,
        "s11" => 27,
        "t3" => 28,
        "t4" => 29,
        "t5" => 30,
        "t6" => 31,
        _ => return numeric_alias(name),
    };
    Some(index)
}

/// Resolves the secondary `rN` alias scheme: `rN` maps to index `N` for
/// `N` in 0-31.
fn numeric_alias(name: &str) -> Option<usize> {
    let digits = name.strip_prefix('r')?;
    digits.parse::<usize>().ok().filter(|&n| n < 32)
}
