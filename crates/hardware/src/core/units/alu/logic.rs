//! ALU logical operations.
//!
//! Implements bitwise AND, OR and NOT, and the `mov` pass-through of the second
//! operand. `not` and `mov` ignore the first operand.

use super::AluOp;

/// Executes a logical operation.
///
/// Returns `0` for non-logical opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Not => !b,
        AluOp::Mov => b,
        _ => 0,
    }
}
