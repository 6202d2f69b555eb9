//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, division and remainder on
//! 32-bit signed operands. Results wrap on overflow and the overflow condition is
//! reported alongside the value.
//!
//! Division follows the same conventions as RISC-V `DIV`/`REM`:
//! - divide by zero yields `-1` and the remainder is the dividend;
//! - `i32::MIN / -1` wraps to `i32::MIN` with remainder `0`.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result and whether signed overflow occurred. Returns
/// `(0, false)` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> (i32, bool) {
    match op {
        AluOp::Add => a.overflowing_add(b),
        AluOp::Sub | AluOp::Cmp => a.overflowing_sub(b),
        AluOp::Mul => a.overflowing_mul(b),
        AluOp::Div => {
            if b == 0 {
                (-1, false)
            } else {
                (a.wrapping_div(b), false)
            }
        }
        AluOp::Mod => {
            if b == 0 {
                (a, false)
            } else {
                (a.wrapping_rem(b), false)
            }
        }
        _ => (0, false),
    }
}
