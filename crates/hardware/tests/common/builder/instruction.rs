//! Instruction word builders.
//!
//! Each helper packs one instruction through the library encoder so test
//! programs read like assembly.

use simplerisc_core::isa::encode::encode;
use simplerisc_core::isa::instruction::{BinaryOp, Immediate, Instruction, Operand, Reg};

pub fn r(idx: usize) -> Reg {
    Reg::new(idx).expect("register index out of range")
}

pub fn word(inst: Instruction) -> u32 {
    encode(&inst).expect("instruction does not encode")
}

fn imm(v: i16) -> Operand {
    Operand::Imm(Immediate::signed(v))
}

pub fn alu_rr(op: BinaryOp, rd: usize, rs1: usize, rs2: usize) -> u32 {
    word(Instruction::Binary { op, rd: r(rd), rs1: r(rs1), src: Operand::Reg(r(rs2)) })
}

pub fn alu_ri(op: BinaryOp, rd: usize, rs1: usize, v: i16) -> u32 {
    word(Instruction::Binary { op, rd: r(rd), rs1: r(rs1), src: imm(v) })
}

pub fn add(rd: usize, rs1: usize, rs2: usize) -> u32 {
    alu_rr(BinaryOp::Add, rd, rs1, rs2)
}

pub fn addi(rd: usize, rs1: usize, v: i16) -> u32 {
    alu_ri(BinaryOp::Add, rd, rs1, v)
}

pub fn movi(rd: usize, v: i16) -> u32 {
    word(Instruction::Mov { rd: r(rd), src: imm(v) })
}

pub fn mov_h(rd: usize, v: u16) -> u32 {
    word(Instruction::Mov { rd: r(rd), src: Operand::Imm(Immediate::high(v)) })
}

pub fn cmpi(rs1: usize, v: i16) -> u32 {
    word(Instruction::Cmp { rs1: r(rs1), src: imm(v) })
}

pub fn cmp(rs1: usize, rs2: usize) -> u32 {
    word(Instruction::Cmp { rs1: r(rs1), src: Operand::Reg(r(rs2)) })
}

pub fn ld(rd: usize, offset: i16, base: usize) -> u32 {
    word(Instruction::Ld { rd: r(rd), base: r(base), offset: Immediate::signed(offset) })
}

pub fn st(rs: usize, offset: i16, base: usize) -> u32 {
    word(Instruction::St { rs: r(rs), base: r(base), offset: Immediate::signed(offset) })
}

pub fn beq(offset: i32) -> u32 {
    word(Instruction::Beq { offset })
}

pub fn bgt(offset: i32) -> u32 {
    word(Instruction::Bgt { offset })
}

pub fn b(offset: i32) -> u32 {
    word(Instruction::B { offset })
}

pub fn call(offset: i32) -> u32 {
    word(Instruction::Call { offset })
}

pub fn ret() -> u32 {
    word(Instruction::Ret)
}

pub fn nop() -> u32 {
    word(Instruction::Nop)
}

pub fn hlt() -> u32 {
    word(Instruction::Hlt)
}
