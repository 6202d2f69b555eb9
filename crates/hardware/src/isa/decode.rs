//! SimpleRisc Instruction Decoder.
//!
//! This module turns a raw 32-bit word into a typed [`Instruction`]. It selects the
//! operand format from the opcode, picks the register or immediate second operand
//! from the I bit, widens immediates according to their modifier, and
//! sign-extends 27-bit branch offsets. Bits outside the fields an instruction
//! uses are ignored.

use crate::common::error::DecodeError;
use crate::isa::instruction::{
    BinaryOp, Immediate, Instruction, InstructionBits, Modifier, Operand, Reg,
};
use crate::isa::opcodes::Opcode;

/// Decodes a SimpleRisc instruction word.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding.
///
/// # Returns
///
/// The decoded instruction, or a [`DecodeError`] if the opcode is unassigned,
/// the immediate modifier is reserved, or a load/store uses register format.
///
/// # Examples
///
/// ```
/// use simplerisc_core::isa::decode::decode;
/// use simplerisc_core::isa::instruction::{Immediate, Instruction, Operand, Reg};
///
/// // mov r1, 1
/// let inst = decode(0x4C40_0001).unwrap();
/// assert_eq!(
///     inst,
///     Instruction::Mov { rd: Reg::R1, src: Operand::Imm(Immediate::signed(1)) }
/// );
/// ```
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let opcode_bits = word.opcode();
    let opcode = Opcode::from_bits(opcode_bits).ok_or(DecodeError::UnknownOpcode {
        word,
        opcode: opcode_bits as u8,
    })?;

    let rd = Reg::from_field(word.rd());
    let rs1 = Reg::from_field(word.rs1());

    let inst = match opcode {
        Opcode::Add => binary(BinaryOp::Add, rd, rs1, word)?,
        Opcode::Sub => binary(BinaryOp::Sub, rd, rs1, word)?,
        Opcode::Mul => binary(BinaryOp::Mul, rd, rs1, word)?,
        Opcode::Div => binary(BinaryOp::Div, rd, rs1, word)?,
        Opcode::Mod => binary(BinaryOp::Mod, rd, rs1, word)?,
        Opcode::And => binary(BinaryOp::And, rd, rs1, word)?,
        Opcode::Or => binary(BinaryOp::Or, rd, rs1, word)?,
        Opcode::Lsl => binary(BinaryOp::Lsl, rd, rs1, word)?,
        Opcode::Lsr => binary(BinaryOp::Lsr, rd, rs1, word)?,
        Opcode::Asr => binary(BinaryOp::Asr, rd, rs1, word)?,

        Opcode::Cmp => Instruction::Cmp { rs1, src: second_operand(word)? },
        Opcode::Not => Instruction::Not { rd, src: second_operand(word)? },
        Opcode::Mov => Instruction::Mov { rd, src: second_operand(word)? },
        Opcode::Nop => Instruction::Nop,

        Opcode::Ld => Instruction::Ld { rd, base: rs1, offset: memory_offset(word, opcode)? },
        Opcode::St => Instruction::St { rs: rd, base: rs1, offset: memory_offset(word, opcode)? },

        Opcode::Beq => Instruction::Beq { offset: word.offset() },
        Opcode::Bgt => Instruction::Bgt { offset: word.offset() },
        Opcode::B => Instruction::B { offset: word.offset() },
        Opcode::Call => Instruction::Call { offset: word.offset() },
        Opcode::Ret => Instruction::Ret,
        Opcode::Hlt => Instruction::Hlt,
    };

    Ok(inst)
}

/// Decodes a three-operand ALU instruction (`op rd, rs1, rs2/imm`).
fn binary(op: BinaryOp, rd: Reg, rs1: Reg, word: u32) -> Result<Instruction, DecodeError> {
    Ok(Instruction::Binary { op, rd, rs1, src: second_operand(word)? })
}

/// Selects `rs2` or the immediate according to the I bit.
fn second_operand(word: u32) -> Result<Operand, DecodeError> {
    if word.is_immediate() {
        Ok(Operand::Imm(immediate(word)?))
    } else {
        Ok(Operand::Reg(Reg::from_field(word.rs2())))
    }
}

/// Decodes the modifier and 16-bit constant of an immediate-format word.
fn immediate(word: u32) -> Result<Immediate, DecodeError> {
    let bits = word.modifier();
    let modifier = Modifier::from_bits(bits).ok_or(DecodeError::InvalidModifier {
        word,
        modifier: bits as u8,
    })?;
    Ok(Immediate { raw: word.imm16(), modifier })
}

/// Loads and stores only exist in immediate format.
fn memory_offset(word: u32, opcode: Opcode) -> Result<Immediate, DecodeError> {
    if !word.is_immediate() {
        return Err(DecodeError::RegisterFormNotAllowed { word, mnemonic: opcode.mnemonic() });
    }
    immediate(word)
}
