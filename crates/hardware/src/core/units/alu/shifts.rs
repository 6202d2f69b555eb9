//! ALU shift operations.
//!
//! Implements logical shift left (LSL), logical shift right (LSR) and arithmetic
//! shift right (ASR). The shift amount is taken from the low 5 bits of the second
//! operand (0–31), matching a 32-bit barrel shifter.

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted value, or `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let shamt = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Lsl => a.wrapping_shl(shamt),
        AluOp::Lsr => (a as u32).wrapping_shr(shamt) as i32,
        AluOp::Asr => a >> shamt,
        _ => 0,
    }
}
