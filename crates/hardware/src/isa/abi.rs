//! SimpleRisc calling-convention register names.
//!
//! The reference assembler accepts `r0`-`r15` plus the aliases `sp` (`r14`) and
//! `ra` (`r15`). Arguments are passed starting at `r0` and results returned in `r1`.

/// Register r0 (first argument).
pub const REG_ARG0: usize = 0;
/// Register r1 (return value).
pub const REG_RESULT: usize = 1;
/// Register r14 (stack pointer, sp).
pub const REG_SP: usize = 14;
/// Register r15 (return address, ra).
pub const REG_RA: usize = 15;

/// Assembler names for r0–r15.
pub const REG_NAMES: [&str; 16] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "sp",
    "ra",
];

/// Returns the assembler name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r??")
}
