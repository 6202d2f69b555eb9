//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU of the SimpleRisc datapath. Every
//! operation is total over `i32` operands: arithmetic wraps in two's complement
//! as the hardware adder and multiplier do, and division by zero produces a
//! defined value instead of trapping.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Cmp
//! - [`logic`]:      And, Or, Not, Mov
//! - [`shifts`]:     Lsl, Lsr, Asr

/// Integer arithmetic operations (add, subtract, multiply, divide, compare).
pub mod arithmetic;

/// Bitwise logical operations and operand pass-through (and, or, not, mov).
pub mod logic;

/// Shift operations (lsl, lsr, asr).
pub mod shifts;

/// Operation selected by the control unit for the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b` (low 32 bits)
    Mul,
    /// `a / b`, truncating toward zero
    Div,
    /// `a % b`, sign of the dividend
    Mod,
    /// `a - b`, evaluated only for its flags
    Cmp,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `!b`
    Not,
    /// `b`
    Mov,
    /// `a << b`
    Lsl,
    /// `a >> b`, zero fill
    Lsr,
    /// `a >> b`, sign fill
    Asr,
}

/// Condition flags produced alongside every ALU result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluFlags {
    /// Result is zero.
    pub zero: bool,
    /// Result is negative (bit 31 set).
    pub negative: bool,
    /// Signed overflow occurred (add, sub, cmp, mul only).
    pub overflow: bool,
}

/// Output of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// The 32-bit result.
    pub value: i32,
    /// Flags describing `value`.
    pub flags: AluFlags,
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (the `rs1` value)
    /// * `b`  - Second operand (`rs2` or the widened immediate; shift amount for shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use simplerisc_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8).value, 50);
    ///
    /// // Overflow wraps, as in hardware.
    /// let r = Alu::execute(AluOp::Add, i32::MAX, 1);
    /// assert_eq!(r.value, i32::MIN);
    /// assert!(r.flags.overflow);
    ///
    /// assert!(Alu::execute(AluOp::Cmp, 7, 7).flags.zero);
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> AluResult {
        let (value, overflow) = match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div | AluOp::Mod | AluOp::Cmp => {
                arithmetic::execute(op, a, b)
            }
            AluOp::And | AluOp::Or | AluOp::Not | AluOp::Mov => (logic::execute(op, a, b), false),
            AluOp::Lsl | AluOp::Lsr | AluOp::Asr => (shifts::execute(op, a, b), false),
        };

        AluResult {
            value,
            flags: AluFlags { zero: value == 0, negative: value < 0, overflow },
        }
    }
}
