//! SimpleRisc Instruction Encoder.
//!
//! Packs a typed [`Instruction`] back into its canonical 32-bit word. Fields an
//! instruction does not use (the `rd` of `cmp`, the `rs1` of `mov`/`not`, the
//! trailing bits of register format, everything but the opcode of `nop`/`ret`/`hlt`)
//! are written as zero, so `encode(decode(w)) == w` for every canonical word.

use crate::common::error::EncodeError;
use crate::isa::instruction::{
    IMM_FLAG_SHIFT, IMM_MASK, Immediate, Instruction, MODIFIER_SHIFT, OFFSET_MASK, OFFSET_MAX,
    OFFSET_MIN, OPCODE_SHIFT, Operand, RD_SHIFT, RS1_SHIFT, RS2_SHIFT, Reg,
};

/// Encodes an instruction into a 32-bit word.
///
/// # Errors
///
/// Returns [`EncodeError::OffsetOutOfRange`] when a branch offset does not fit in
/// the 27-bit signed offset field.
///
/// # Examples
///
/// ```
/// use simplerisc_core::isa::encode::encode;
/// use simplerisc_core::isa::instruction::Instruction;
///
/// assert_eq!(encode(&Instruction::B { offset: 16 }).unwrap(), 0x9000_0010);
/// assert_eq!(encode(&Instruction::Ret).unwrap(), 0xA000_0000);
/// ```
pub fn encode(inst: &Instruction) -> Result<u32, EncodeError> {
    let opcode = inst.opcode().bits() << OPCODE_SHIFT;

    let fields = match *inst {
        Instruction::Binary { rd, rs1, src, .. } => alu_fields(rd, rs1, src),
        Instruction::Cmp { rs1, src } => alu_fields(Reg::R0, rs1, src),
        Instruction::Not { rd, src } | Instruction::Mov { rd, src } => {
            alu_fields(rd, Reg::R0, src)
        }
        Instruction::Ld { rd, base, offset } => alu_fields(rd, base, Operand::Imm(offset)),
        Instruction::St { rs, base, offset } => alu_fields(rs, base, Operand::Imm(offset)),
        Instruction::Beq { offset }
        | Instruction::Bgt { offset }
        | Instruction::B { offset }
        | Instruction::Call { offset } => branch_offset(offset)?,
        Instruction::Nop | Instruction::Ret | Instruction::Hlt => 0,
    };

    Ok(opcode | fields)
}

/// Packs the register/immediate fields shared by ALU and memory instructions.
fn alu_fields(rd: Reg, rs1: Reg, src: Operand) -> u32 {
    let regs = ((rd.index() as u32) << RD_SHIFT) | ((rs1.index() as u32) << RS1_SHIFT);
    match src {
        Operand::Reg(rs2) => regs | ((rs2.index() as u32) << RS2_SHIFT),
        Operand::Imm(imm) => regs | (1 << IMM_FLAG_SHIFT) | immediate_bits(imm),
    }
}

fn immediate_bits(imm: Immediate) -> u32 {
    (imm.modifier.bits() << MODIFIER_SHIFT) | (u32::from(imm.raw) & IMM_MASK)
}

fn branch_offset(offset: i32) -> Result<u32, EncodeError> {
    if !(OFFSET_MIN..=OFFSET_MAX).contains(&offset) {
        return Err(EncodeError::OffsetOutOfRange { offset });
    }
    Ok(offset as u32 & OFFSET_MASK)
}
