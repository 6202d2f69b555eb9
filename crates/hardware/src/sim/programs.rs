//! Built-in demonstration programs.
//!
//! Programs are written as typed [`Instruction`]s and packed with the encoder,
//! so they always agree with what the decoder accepts.

use crate::common::error::EncodeError;
use crate::isa::encode::encode;
use crate::isa::instruction::{BinaryOp, Immediate, Instruction, Operand, Reg};

/// Recursive factorial of `n`, leaving the result in `r1` and ending in `hlt`.
///
/// The entry branch skips over the `fact` subroutine to a `main` that sets the
/// argument in `r0`, calls `fact` and halts. `fact` spills `r0` and `ra` to an
/// 8-byte stack frame around the recursive call.
///
/// ```
/// use simplerisc_core::sim::programs::factorial_program;
///
/// let words = factorial_program(10).unwrap();
/// assert_eq!(words[0], 0x9000_0010);
/// assert_eq!(words.last(), Some(&0xF800_0000));
/// ```
pub fn factorial_program(n: i16) -> Result<Vec<u32>, EncodeError> {
    let imm = |v: i16| Operand::Imm(Immediate::signed(v));

    let program = [
        // 0x00: jump to main
        Instruction::B { offset: 16 },
        // 0x04: fact
        Instruction::Cmp { rs1: Reg::R0, src: imm(1) },
        Instruction::Beq { offset: 12 },
        Instruction::Bgt { offset: 1 },
        Instruction::B { offset: 10 },
        // 0x14: recursive case
        Instruction::Binary { op: BinaryOp::Sub, rd: Reg::SP, rs1: Reg::SP, src: imm(8) },
        Instruction::St { rs: Reg::R0, base: Reg::SP, offset: Immediate::signed(0) },
        Instruction::St { rs: Reg::RA, base: Reg::SP, offset: Immediate::signed(4) },
        Instruction::Binary { op: BinaryOp::Sub, rd: Reg::R0, rs1: Reg::R0, src: imm(1) },
        Instruction::Call { offset: -9 },
        Instruction::Ld { rd: Reg::R0, base: Reg::SP, offset: Immediate::signed(0) },
        Instruction::Ld { rd: Reg::RA, base: Reg::SP, offset: Immediate::signed(4) },
        Instruction::Binary {
            op: BinaryOp::Mul,
            rd: Reg::R1,
            rs1: Reg::R0,
            src: Operand::Reg(Reg::R1),
        },
        Instruction::Binary { op: BinaryOp::Add, rd: Reg::SP, rs1: Reg::SP, src: imm(8) },
        Instruction::Ret,
        // 0x3c: base case
        Instruction::Mov { rd: Reg::R1, src: imm(1) },
        Instruction::Ret,
        // 0x44: main
        Instruction::Mov { rd: Reg::R0, src: imm(n) },
        Instruction::Call { offset: -18 },
        Instruction::Hlt,
    ];

    program.iter().map(encode).collect()
}
