//! Instruction Disassembler for SimpleRisc.
//!
//! Renders decoded instructions in the reference assembler's syntax for debug
//! tracing, the `disasm` CLI command and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use simplerisc_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0FB8_0008), "sub sp, sp, 8");
//! assert_eq!(disassemble(0x7FF8_0004), "st ra, 4[sp]");
//! assert_eq!(disassemble(0xA800_0000), "unknown");
//! ```

use std::fmt;

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{Immediate, Instruction, Modifier, Operand, Reg};

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(reg_name(self.index()))
    }
}

impl fmt::Display for Immediate {
    /// Signed immediates print in decimal; `u`/`h` constants print as raw hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            Modifier::Default => write!(f, "{}", self.raw as i16),
            Modifier::Unsigned | Modifier::High => write!(f, "{:#x}", self.raw),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reg(reg) => reg.fmt(f),
            Self::Imm(imm) => imm.fmt(f),
        }
    }
}

/// Mnemonic suffix implied by the operand's modifier.
fn suffix(src: Operand) -> &'static str {
    match src {
        Operand::Reg(_) => "",
        Operand::Imm(imm) => imm.modifier.suffix(),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mn = self.opcode().mnemonic();
        match *self {
            Self::Binary { rd, rs1, src, .. } => {
                write!(f, "{mn}{} {rd}, {rs1}, {src}", suffix(src))
            }
            Self::Cmp { rs1, src } => write!(f, "{mn}{} {rs1}, {src}", suffix(src)),
            Self::Not { rd, src } | Self::Mov { rd, src } => {
                write!(f, "{mn}{} {rd}, {src}", suffix(src))
            }
            Self::Ld { rd: reg, base, offset } | Self::St { rs: reg, base, offset } => {
                if offset.raw == 0 {
                    write!(f, "{mn}{} {reg}, [{base}]", offset.modifier.suffix())
                } else {
                    write!(f, "{mn}{} {reg}, {offset}[{base}]", offset.modifier.suffix())
                }
            }
            Self::Beq { offset }
            | Self::Bgt { offset }
            | Self::B { offset }
            | Self::Call { offset } => write!(f, "{mn} {offset}"),
            Self::Nop | Self::Ret | Self::Hlt => f.write_str(mn),
        }
    }
}

/// Disassembles a 32-bit SimpleRisc word into a human-readable string.
///
/// Returns a mnemonic like `"mul r1, r0, r1"` or `"unknown"` for words that do
/// not decode.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| String::from("unknown"), |inst| inst.to_string())
}

