//! The SimpleRisc `flags` register.
//!
//! `cmp` is the only instruction that writes the flags; `beq` and `bgt` are the
//! only ones that read them. The values persist until the next `cmp`.

use crate::core::units::alu::AluFlags;

/// Comparison result latched by the last `cmp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// `E`: the operands were equal.
    pub eq: bool,
    /// `GT`: the first operand was greater than the second (signed).
    pub gt: bool,
}

impl Flags {
    /// Derives `E` and `GT` from the ALU flags of `a - b`.
    ///
    /// `a > b` holds exactly when the difference is non-zero and its sign agrees
    /// with the overflow flag.
    pub const fn from_compare(alu: AluFlags) -> Self {
        Self {
            eq: alu.zero,
            gt: !alu.zero && (alu.negative == alu.overflow),
        }
    }
}
