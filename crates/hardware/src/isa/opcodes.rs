//! SimpleRisc Opcodes.
//!
//! Defines the 5-bit major opcodes (bits 31-27) of the SimpleRisc instruction set.
//! Values 21-30 are unassigned; 31 is the simulator's halt extension.

/// A SimpleRisc major opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Opcode {
    /// Addition (`add`).
    Add = 0b00000,
    /// Subtraction (`sub`).
    Sub = 0b00001,
    /// Multiplication (`mul`).
    Mul = 0b00010,
    /// Signed division (`div`).
    Div = 0b00011,
    /// Signed remainder (`mod`).
    Mod = 0b00100,
    /// Compare, sets the flags register (`cmp`).
    Cmp = 0b00101,
    /// Bitwise AND (`and`).
    And = 0b00110,
    /// Bitwise OR (`or`).
    Or = 0b00111,
    /// Bitwise NOT (`not`).
    Not = 0b01000,
    /// Register/immediate move (`mov`).
    Mov = 0b01001,
    /// Logical shift left (`lsl`).
    Lsl = 0b01010,
    /// Logical shift right (`lsr`).
    Lsr = 0b01011,
    /// Arithmetic shift right (`asr`).
    Asr = 0b01100,
    /// No operation (`nop`).
    Nop = 0b01101,
    /// Load word (`ld`).
    Ld = 0b01110,
    /// Store word (`st`).
    St = 0b01111,
    /// Branch if equal (`beq`).
    Beq = 0b10000,
    /// Branch if greater than (`bgt`).
    Bgt = 0b10001,
    /// Unconditional branch (`b`).
    B = 0b10010,
    /// Call, links the return address into `ra` (`call`).
    Call = 0b10011,
    /// Return to the address in `ra` (`ret`).
    Ret = 0b10100,
    /// Stop the machine (`hlt`).
    Hlt = 0b11111,
}

impl Opcode {
    /// Every defined opcode, in encoding order.
    pub const ALL: [Self; 22] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Cmp,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Mov,
        Self::Lsl,
        Self::Lsr,
        Self::Asr,
        Self::Nop,
        Self::Ld,
        Self::St,
        Self::Beq,
        Self::Bgt,
        Self::B,
        Self::Call,
        Self::Ret,
        Self::Hlt,
    ];

    /// Maps a 5-bit opcode field to an opcode, or `None` if it is unassigned.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0b00000 => Self::Add,
            0b00001 => Self::Sub,
            0b00010 => Self::Mul,
            0b00011 => Self::Div,
            0b00100 => Self::Mod,
            0b00101 => Self::Cmp,
            0b00110 => Self::And,
            0b00111 => Self::Or,
            0b01000 => Self::Not,
            0b01001 => Self::Mov,
            0b01010 => Self::Lsl,
            0b01011 => Self::Lsr,
            0b01100 => Self::Asr,
            0b01101 => Self::Nop,
            0b01110 => Self::Ld,
            0b01111 => Self::St,
            0b10000 => Self::Beq,
            0b10001 => Self::Bgt,
            0b10010 => Self::B,
            0b10011 => Self::Call,
            0b10100 => Self::Ret,
            0b11111 => Self::Hlt,
            _ => return None,
        })
    }

    /// The 5-bit opcode field value.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Assembly mnemonic (without modifier suffix).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Cmp => "cmp",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Mov => "mov",
            Self::Lsl => "lsl",
            Self::Lsr => "lsr",
            Self::Asr => "asr",
            Self::Nop => "nop",
            Self::Ld => "ld",
            Self::St => "st",
            Self::Beq => "beq",
            Self::Bgt => "bgt",
            Self::B => "b",
            Self::Call => "call",
            Self::Ret => "ret",
            Self::Hlt => "hlt",
        }
    }
}
