//! Control unit tests.
//!
//! Each test loads a short program into a default machine and steps it cycle
//! by cycle, checking the architectural state after writeback.

use pretty_assertions::assert_eq;
use simplerisc_core::common::error::{DecodeError, FaultKind, MemError};
use simplerisc_core::isa::abi::{REG_RA, REG_SP};
use simplerisc_core::isa::instruction::BinaryOp;
use simplerisc_core::{CpuStatus, TerminalReason};

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn pc_advances_by_one_word() {
    let mut ctx = TestContext::new(&[nop(), nop(), hlt()]);
    assert_eq!(ctx.state.pc(), 0);
    ctx.run(2);
    assert_eq!(ctx.state.pc(), 8);
    assert_eq!(ctx.state.cycle(), 2);
}

#[test]
fn r0_holds_written_values() {
    let mut ctx = TestContext::new(&[movi(0, 7), addi(0, 0, 1), hlt()]);
    ctx.run(2);
    assert_eq!(ctx.get_reg(0), 8);
}

#[test]
fn reads_see_old_value_of_destination() {
    let mut ctx = TestContext::new(&[add(1, 1, 1), hlt()]);
    ctx.set_reg(1, 5);
    ctx.run(1);
    assert_eq!(ctx.get_reg(1), 10);
}

#[test]
fn load_into_its_own_base_register() {
    let mut ctx = TestContext::new(&[ld(2, 0, 2), hlt()]);
    ctx.set_reg(2, 0x100);
    ctx.state.memory_mut().store(0x100, 7).unwrap();
    ctx.run(1);
    assert_eq!(ctx.get_reg(2), 7);
}

#[test]
fn store_and_load_through_stack_pointer() {
    let program = [movi(3, -77), addi(REG_SP, REG_SP, -8), st(3, 4, REG_SP), ld(4, 4, REG_SP), hlt()];
    let mut ctx = TestContext::new(&program);
    ctx.run(4);
    let sp = ctx.get_reg(REG_SP);
    assert_eq!(sp, 0x1_0000 - 8);
    assert_eq!(ctx.get_reg(4), -77);
    assert_eq!(ctx.state.memory().load(sp as u32 + 4).unwrap(), -77);
}

#[test]
fn high_modifier_fills_upper_half() {
    let mut ctx = TestContext::new(&[mov_h(5, 0x1234), hlt()]);
    ctx.run(1);
    assert_eq!(ctx.get_reg(5), 0x1234_0000);
}

#[test]
fn cmp_only_touches_flags() {
    let mut ctx = TestContext::new(&[cmpi(0, 3), hlt()]);
    ctx.set_reg(0, 5);
    let before = ctx.state.regs().clone();
    ctx.run(1);
    assert_eq!(ctx.state.regs(), &before);
    assert!(ctx.state.flags().gt);
    assert!(!ctx.state.flags().eq);
}

#[test]
fn taken_branch_with_zero_offset_targets_next_instruction() {
    let mut ctx = TestContext::new(&[cmpi(0, 0), beq(0), hlt()]);
    ctx.run(2);
    assert_eq!(ctx.state.pc(), 8);
    assert_eq!(ctx.stats.branches_taken, 1);
    assert_eq!(ctx.step(), CpuStatus::Halted);
}

#[test]
fn untaken_branch_falls_through() {
    // 3 > 3 is false, so bgt falls through to the mov.
    let program = [cmp(0, 0), bgt(5), movi(1, 1), hlt()];
    let mut ctx = TestContext::new(&program);
    ctx.set_reg(0, 3);
    ctx.run(3);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.stats.branches_taken, 0);
    assert_eq!(ctx.step(), CpuStatus::Halted);
}

#[test]
fn forward_branch_skips_instructions() {
    let program = [b(1), movi(1, 1), movi(2, 2), hlt()];
    let mut ctx = TestContext::new(&program);
    ctx.run(3);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.state.status(), CpuStatus::Halted);
}

#[test]
fn backward_branch_forms_two_instruction_loop() {
    let mut ctx = TestContext::new(&[nop(), b(-2)]);
    ctx.run(2);
    assert_eq!(ctx.state.pc(), 0);
    ctx.run(2);
    assert_eq!(ctx.state.pc(), 0);

    let report = ctx.run_to_end(100);
    assert_eq!(report.reason, TerminalReason::CycleLimitExceeded { limit: 100 });
    assert_eq!(report.cycles, 100);
}

#[test]
fn call_links_and_ret_returns() {
    // 0x00 call +1 -> 0x08, 0x04 hlt, 0x08 mov r1, 42, 0x0c ret
    let program = [call(1), hlt(), movi(1, 42), ret()];
    let mut ctx = TestContext::new(&program);

    ctx.run(1);
    assert_eq!(ctx.state.pc(), 8);
    assert_eq!(ctx.get_reg(REG_RA), 4);

    ctx.run(2);
    assert_eq!(ctx.state.pc(), 4);
    assert_eq!(ctx.step(), CpuStatus::Halted);
    assert_eq!(ctx.get_reg(1), 42);
}

#[test]
fn unknown_opcode_faults_without_side_effects() {
    let mut ctx = TestContext::new(&[movi(1, 9), 0xA800_0000, hlt()]);
    ctx.run(1);
    let before = ctx.state.regs().clone();

    let status = ctx.step();
    let CpuStatus::Faulted(fault) = status else {
        panic!("expected a fault, got {status:?}");
    };
    assert_eq!(
        fault.kind,
        FaultKind::Decode(DecodeError::UnknownOpcode { word: 0xA800_0000, opcode: 21 })
    );
    assert_eq!(fault.pc, 4);
    assert_eq!(fault.cycle, 1);
    assert_eq!(ctx.state.regs(), &before);
    assert_eq!(ctx.state.pc(), 4);
    assert_eq!(ctx.stats.instructions_retired, 1);
    assert_eq!(ctx.stats.cycles, 2);
}

#[test]
fn out_of_bounds_load_faults() {
    // r2 = 0x10000, one past the end of the default 64 KiB memory.
    let mut ctx = TestContext::new(&[mov_h(2, 1), ld(1, 0, 2), hlt()]);
    ctx.run(2);
    let CpuStatus::Faulted(fault) = ctx.state.status() else {
        panic!("expected a fault");
    };
    assert_eq!(
        fault.kind,
        FaultKind::Memory(MemError::OutOfBounds { addr: 0x1_0000, size: 0x1_0000 })
    );
    assert_eq!(fault.pc, 4);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn faulting_store_leaves_registers_untouched() {
    let mut ctx = TestContext::new(&[st(1, 2, 0), hlt()]);
    ctx.set_reg(1, 5);
    let before = ctx.state.clone();
    let status = ctx.step();
    assert_eq!(
        status,
        CpuStatus::Faulted(simplerisc_core::common::error::Fault {
            kind: FaultKind::Memory(MemError::Unaligned { addr: 2 }),
            pc: 0,
            cycle: 0,
        })
    );
    assert_eq!(ctx.state.regs(), before.regs());
    assert_eq!(ctx.state.memory(), before.memory());
    assert_eq!(ctx.state.pc(), before.pc());
}

#[test]
fn ret_to_misaligned_address_faults_on_fetch() {
    let mut ctx = TestContext::new(&[ret()]);
    ctx.set_reg(REG_RA, 2);
    ctx.run(2);
    let CpuStatus::Faulted(fault) = ctx.state.status() else {
        panic!("expected a fault");
    };
    assert_eq!(fault.kind, FaultKind::Memory(MemError::Unaligned { addr: 2 }));
    assert_eq!(fault.pc, 2);
}

#[test]
fn execution_resumes_from_a_moved_pc() {
    let mut ctx = TestContext::new(&[movi(1, 1), movi(1, 2), hlt()]);
    ctx.state.set_pc(4);
    ctx.run(2);
    assert_eq!(ctx.state.status(), CpuStatus::Halted);
    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(ctx.state.pc(), 12);
}

#[test]
fn terminal_states_do_not_step() {
    let mut ctx = TestContext::new(&[hlt(), movi(1, 1)]);
    assert_eq!(ctx.step(), CpuStatus::Halted);
    let snapshot = ctx.state.clone();
    assert_eq!(ctx.step(), CpuStatus::Halted);
    assert_eq!(ctx.state, snapshot);
    assert_eq!(ctx.stats.cycles, 1);
}

#[test]
fn division_by_zero_does_not_fault() {
    let program = [movi(1, 10), alu_rr(BinaryOp::Div, 2, 1, 0), alu_rr(BinaryOp::Mod, 3, 1, 0), hlt()];
    let mut ctx = TestContext::new(&program);
    ctx.run(4);
    assert_eq!(ctx.state.status(), CpuStatus::Halted);
    assert_eq!(ctx.get_reg(2), -1);
    assert_eq!(ctx.get_reg(3), 10);
}
