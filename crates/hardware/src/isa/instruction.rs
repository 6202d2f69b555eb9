//! Instruction encoding and decoded-instruction types.
//!
//! Provides bit extraction functions for the SimpleRisc instruction fields and
//! the typed [`Instruction`] produced by the decoder.
//!
//! ```text
//!  31    27 26 25  22 21  18 17  14 13            0
//! | opcode | I |  rd  | rs1  | rs2  |    unused     |   register format
//! | opcode | I |  rd  | rs1  | mod  |  imm[15:0]    |   immediate format
//! | opcode |          offset[26:0]                 |   branch format
//! ```

use crate::common::constants::{NUM_REGS, WORD_BYTES};
use crate::isa::opcodes::Opcode;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 27;
/// Bit mask for the opcode field (after shifting).
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit position of the immediate flag (I bit).
pub const IMM_FLAG_SHIFT: u32 = 26;
/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 22;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 18;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 14;
/// Bit mask for any 4-bit register field (after shifting).
pub const REG_MASK: u32 = 0xF;
/// Bit position of the immediate modifier field.
pub const MODIFIER_SHIFT: u32 = 16;
/// Bit mask for the modifier field (after shifting).
pub const MODIFIER_MASK: u32 = 0x3;
/// Bit mask for the 16-bit immediate constant.
pub const IMM_MASK: u32 = 0xFFFF;
/// Width of the branch offset field in bits.
pub const OFFSET_BITS: u32 = 27;
/// Bit mask for the branch offset field.
pub const OFFSET_MASK: u32 = (1 << OFFSET_BITS) - 1;
/// Smallest encodable branch offset, in instruction words.
pub const OFFSET_MIN: i32 = -(1 << (OFFSET_BITS - 1));
/// Largest encodable branch offset, in instruction words.
pub const OFFSET_MAX: i32 = (1 << (OFFSET_BITS - 1)) - 1;

/// Field extraction for raw SimpleRisc instruction words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 27-31).
    fn opcode(&self) -> u32;

    /// Returns the immediate flag (bit 26); `true` selects the immediate operand.
    fn is_immediate(&self) -> bool;

    /// Extracts the destination register field (bits 22-25).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 18-21).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 14-17).
    fn rs2(&self) -> usize;

    /// Extracts the immediate modifier field (bits 16-17).
    fn modifier(&self) -> u32;

    /// Extracts the 16-bit immediate constant (bits 0-15).
    fn imm16(&self) -> u16;

    /// Extracts the branch offset (bits 0-26), sign-extended from 27 bits.
    fn offset(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn is_immediate(&self) -> bool {
        (self >> IMM_FLAG_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn modifier(&self) -> u32 {
        (self >> MODIFIER_SHIFT) & MODIFIER_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    /// Shifts the 27-bit field up to bit 31 and arithmetic-shifts it back down,
    /// replicating bit 26 into the upper five bits.
    #[inline(always)]
    fn offset(&self) -> i32 {
        let shift = 32 - OFFSET_BITS;
        ((self << shift) as i32) >> shift
    }
}

/// A general-purpose register index (`r0`-`r15`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// Register `r0`, the first argument register of the calling convention.
    pub const R0: Self = Self(0);
    /// Register `r1`, the result register of the calling convention.
    pub const R1: Self = Self(1);
    /// Stack pointer (`r14`).
    pub const SP: Self = Self(14);
    /// Return address (`r15`).
    pub const RA: Self = Self(15);

    /// Creates a register from an index, or `None` if `idx` is not below 16.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < NUM_REGS { Some(Self(idx as u8)) } else { None }
    }

    /// Creates a register from a raw 4-bit field, discarding any higher bits.
    pub const fn from_field(bits: usize) -> Self {
        Self((bits & REG_MASK as usize) as u8)
    }

    /// Register index (0-15).
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immediate modifier selecting how the 16-bit constant is widened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Sign-extend the constant (no suffix, bits `00`).
    Default,
    /// Zero-extend the constant (`u` suffix, bits `01`).
    Unsigned,
    /// Place the constant in the upper half-word (`h` suffix, bits `10`).
    High,
}

impl Modifier {
    /// Maps the 2-bit modifier field; the reserved pattern `11` yields `None`.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Default),
            0b01 => Some(Self::Unsigned),
            0b10 => Some(Self::High),
            _ => None,
        }
    }

    /// The 2-bit modifier field value.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Default => 0b00,
            Self::Unsigned => 0b01,
            Self::High => 0b10,
        }
    }

    /// Mnemonic suffix (`""`, `"u"` or `"h"`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Unsigned => "u",
            Self::High => "h",
        }
    }
}

/// A 16-bit immediate constant together with its modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Immediate {
    /// The raw 16-bit constant as encoded.
    pub raw: u16,
    /// How the constant is widened to 32 bits.
    pub modifier: Modifier,
}

impl Immediate {
    /// A sign-extended immediate.
    pub const fn signed(value: i16) -> Self {
        Self { raw: value as u16, modifier: Modifier::Default }
    }

    /// A zero-extended immediate (`u` modifier).
    pub const fn unsigned(value: u16) -> Self {
        Self { raw: value, modifier: Modifier::Unsigned }
    }

    /// An upper-half immediate (`h` modifier).
    pub const fn high(value: u16) -> Self {
        Self { raw: value, modifier: Modifier::High }
    }

    /// The 32-bit operand value seen by the ALU.
    pub const fn value(self) -> i32 {
        match self.modifier {
            Modifier::Default => self.raw as i16 as i32,
            Modifier::Unsigned => self.raw as i32,
            Modifier::High => ((self.raw as u32) << 16) as i32,
        }
    }
}

/// Second operand of an ALU-format instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Register operand (`rs2`, I bit clear).
    Reg(Reg),
    /// Immediate operand (I bit set).
    Imm(Immediate),
}

/// Two-operand arithmetic, logical and shift operations that write `rd`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`
    Div,
    /// `mod`
    Mod,
    /// `and`
    And,
    /// `or`
    Or,
    /// `lsl`
    Lsl,
    /// `lsr`
    Lsr,
    /// `asr`
    Asr,
}

impl BinaryOp {
    /// The opcode this operation is encoded with.
    pub const fn opcode(self) -> Opcode {
        match self {
            Self::Add => Opcode::Add,
            Self::Sub => Opcode::Sub,
            Self::Mul => Opcode::Mul,
            Self::Div => Opcode::Div,
            Self::Mod => Opcode::Mod,
            Self::And => Opcode::And,
            Self::Or => Opcode::Or,
            Self::Lsl => Opcode::Lsl,
            Self::Lsr => Opcode::Lsr,
            Self::Asr => Opcode::Asr,
        }
    }
}

/// A decoded SimpleRisc instruction.
///
/// Branch offsets are counted in instruction words relative to the address of
/// the following instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `op rd, rs1, src`
    Binary {
        /// Operation performed.
        op: BinaryOp,
        /// Destination register.
        rd: Reg,
        /// First source register.
        rs1: Reg,
        /// Second operand.
        src: Operand,
    },
    /// `cmp rs1, src`: sets the flags register.
    Cmp {
        /// First source register.
        rs1: Reg,
        /// Second operand.
        src: Operand,
    },
    /// `not rd, src`
    Not {
        /// Destination register.
        rd: Reg,
        /// Operand to invert.
        src: Operand,
    },
    /// `mov rd, src`
    Mov {
        /// Destination register.
        rd: Reg,
        /// Operand to copy.
        src: Operand,
    },
    /// `nop`
    Nop,
    /// `ld rd, offset[base]`
    Ld {
        /// Destination register.
        rd: Reg,
        /// Base address register.
        base: Reg,
        /// Byte offset added to the base.
        offset: Immediate,
    },
    /// `st rs, offset[base]`
    St {
        /// Register whose value is stored (encoded in the `rd` field).
        rs: Reg,
        /// Base address register.
        base: Reg,
        /// Byte offset added to the base.
        offset: Immediate,
    },
    /// `beq offset`: taken when the E flag is set.
    Beq {
        /// Offset in instruction words.
        offset: i32,
    },
    /// `bgt offset`: taken when the GT flag is set.
    Bgt {
        /// Offset in instruction words.
        offset: i32,
    },
    /// `b offset`: always taken.
    B {
        /// Offset in instruction words.
        offset: i32,
    },
    /// `call offset`: links `ra` and branches.
    Call {
        /// Offset in instruction words.
        offset: i32,
    },
    /// `ret`: jumps to `ra`.
    Ret,
    /// `hlt`: stops the machine.
    Hlt,
}

impl Instruction {
    /// The opcode this instruction is encoded with.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Binary { op, .. } => op.opcode(),
            Self::Cmp { .. } => Opcode::Cmp,
            Self::Not { .. } => Opcode::Not,
            Self::Mov { .. } => Opcode::Mov,
            Self::Nop => Opcode::Nop,
            Self::Ld { .. } => Opcode::Ld,
            Self::St { .. } => Opcode::St,
            Self::Beq { .. } => Opcode::Beq,
            Self::Bgt { .. } => Opcode::Bgt,
            Self::B { .. } => Opcode::B,
            Self::Call { .. } => Opcode::Call,
            Self::Ret => Opcode::Ret,
            Self::Hlt => Opcode::Hlt,
        }
    }

    /// Absolute target of a PC-relative branch located at `pc`.
    ///
    /// The offset counts instruction words from the fetch-incremented PC, so an
    /// offset of 0 targets `pc + 4`. Returns `None` for non-branch instructions
    /// (including `ret`, whose target comes from `ra`).
    pub const fn branch_target(&self, pc: u32) -> Option<u32> {
        match *self {
            Self::Beq { offset } | Self::Bgt { offset } | Self::B { offset } | Self::Call { offset } => {
                let next_pc = pc.wrapping_add(WORD_BYTES);
                Some(next_pc.wrapping_add((offset as u32).wrapping_mul(WORD_BYTES)))
            }
            _ => None,
        }
    }
}
