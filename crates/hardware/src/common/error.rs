//! Error and Fault definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Decode Errors:** Instruction words that match no SimpleRisc instruction.
//! 2. **Encode Errors:** Instructions whose fields cannot be packed into a word.
//! 3. **Memory Errors:** Misaligned and out-of-range accesses.
//! 4. **Faults:** A decode or memory error latched together with the PC and cycle
//!    at which the control unit hit it.
//! 5. **Load Errors:** Problems reading or parsing a program image.

use std::fmt;
use std::io;

use thiserror::Error;

/// Failure to decode a 32-bit instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode bits (31..27) name no SimpleRisc instruction.
    #[error("unknown opcode {opcode:#07b} in word {word:#010x}")]
    UnknownOpcode {
        /// The raw instruction word.
        word: u32,
        /// The 5-bit opcode field.
        opcode: u8,
    },

    /// The immediate modifier bits (17..16) hold the reserved pattern `11`.
    #[error("invalid immediate modifier {modifier:#04b} in word {word:#010x}")]
    InvalidModifier {
        /// The raw instruction word.
        word: u32,
        /// The 2-bit modifier field.
        modifier: u8,
    },

    /// A load or store was encoded in register format (I bit clear).
    #[error("register operand form is not allowed for `{mnemonic}` (word {word:#010x})")]
    RegisterFormNotAllowed {
        /// The raw instruction word.
        word: u32,
        /// Mnemonic of the offending instruction.
        mnemonic: &'static str,
    },
}

/// Failure to encode an [`Instruction`](crate::isa::instruction::Instruction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Branch offset does not fit in the 27-bit signed offset field.
    #[error("branch offset {offset} does not fit in 27 signed bits")]
    OffsetOutOfRange {
        /// The requested offset, in instruction words.
        offset: i32,
    },
}

/// Invalid memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemError {
    /// Address is not a multiple of the word size.
    #[error("unaligned word access at {addr:#010x}")]
    Unaligned {
        /// The offending byte address.
        addr: u32,
    },

    /// Address lies outside of the memory array.
    #[error("access at {addr:#010x} is outside memory of {size} bytes")]
    OutOfBounds {
        /// The offending byte address.
        addr: u32,
        /// Size of the memory in bytes.
        size: usize,
    },
}

/// The error that moved the control unit into the faulted state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FaultKind {
    /// The fetched word did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An instruction fetch, load or store accessed memory illegally.
    #[error(transparent)]
    Memory(#[from] MemError),
}

/// A fatal error latched by the control unit, with the point at which it occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fault {
    /// What went wrong.
    pub kind: FaultKind,
    /// Address of the instruction being executed.
    pub pc: u32,
    /// Zero-based index of the cycle in which the fault was raised.
    pub cycle: u64,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at pc {:#010x} (cycle {})", self.kind, self.pc, self.cycle)
    }
}

impl std::error::Error for Fault {}

/// Failure to read or parse a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read program image: {0}")]
    Io(#[from] io::Error),

    /// A line of a text image is not a valid 32-bit word.
    #[error("line {line}: `{text}` is not a 32-bit hex or binary word")]
    InvalidWord {
        /// One-based line number.
        line: usize,
        /// The offending token.
        text: String,
    },

    /// A binary image length is not a multiple of four bytes.
    #[error("binary image of {len} bytes is not a whole number of words")]
    TruncatedBinary {
        /// Length of the image in bytes.
        len: usize,
    },
}
