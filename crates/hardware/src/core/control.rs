//! Control Unit: the fetch-decode-execute state machine.
//!
//! Each call to [`ControlUnit::step`] performs one single-cycle instruction:
//! 1. **Fetch:** Read the word at `PC`; the sequential successor is `PC + 4`.
//! 2. **Decode:** Turn the word into an [`Instruction`].
//! 3. **Execute:** Run the ALU, resolve branches, compute load/store addresses.
//! 4. **Writeback:** Commit the store, the register write, the flags and the new
//!    PC together at the end of the cycle.
//!
//! Execute only reads the state; every effect is collected in a writeback
//! latch first. An instruction that reads and writes the same register therefore
//! sees the old value, and a fault leaves the state exactly as it was before the
//! cycle (apart from the status and cycle counter).

use tracing::{info, trace, warn};

use crate::common::constants::WORD_BYTES;
use crate::common::error::{Fault, FaultKind};
use crate::core::arch::{Flags, RegisterFile};
use crate::core::state::{CpuStatus, ExecutionState};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::decode::decode;
use crate::isa::instruction::{BinaryOp, Immediate, Instruction, Operand, Reg};
use crate::stats::SimStats;

/// Effects of one instruction, committed at the end of the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Writeback {
    store: Option<(u32, i32)>,
    reg: Option<(Reg, i32)>,
    flags: Option<Flags>,
    next_pc: u32,
    taken: bool,
    halt: bool,
}

impl Writeback {
    const fn sequential(next_pc: u32) -> Self {
        Self { store: None, reg: None, flags: None, next_pc, taken: false, halt: false }
    }

    const fn jump(&mut self, target: u32) {
        self.next_pc = target;
        self.taken = true;
    }
}

/// Sequences fetch, decode, execute and writeback for one instruction per cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlUnit {
    trace: bool,
}

impl ControlUnit {
    /// Creates a control unit; `trace` logs every retired instruction at `TRACE` level.
    pub const fn new(trace: bool) -> Self {
        Self { trace }
    }

    /// Advances `state` by one cycle and returns the resulting status.
    ///
    /// A state that is already `Halted` or `Faulted` is returned unchanged and no
    /// cycle is counted.
    pub fn step(&self, state: &mut ExecutionState, stats: &mut SimStats) -> CpuStatus {
        if state.status.is_terminal() {
            return state.status;
        }

        let pc = state.pc;
        let cycle = state.cycle;
        state.cycle += 1;
        stats.cycles += 1;

        let outcome = Self::execute(state, pc).and_then(|(word, inst, wb)| {
            Self::commit(state, wb)?;
            Ok((word, inst, wb))
        });

        match outcome {
            Ok((word, inst, wb)) => {
                stats.retire(&inst, wb.taken);
                if self.trace {
                    trace!("{pc:#010x}: {word:#010x}  {inst}");
                }
                if wb.halt {
                    info!(cycles = state.cycle, "halted at pc {pc:#010x}");
                }
            }
            Err(kind) => {
                let fault = Fault { kind, pc, cycle };
                warn!("fault: {fault}");
                state.status = CpuStatus::Faulted(fault);
            }
        }

        state.status
    }

    /// Fetch, decode and execute; produces the writeback latch without touching the state.
    fn execute(
        state: &ExecutionState,
        pc: u32,
    ) -> Result<(u32, Instruction, Writeback), FaultKind> {
        let word = state.memory.fetch(pc)?;
        let inst = decode(word)?;

        let regs = &state.regs;
        let next_pc = pc.wrapping_add(WORD_BYTES);
        let mut wb = Writeback::sequential(next_pc);

        match inst {
            Instruction::Binary { op, rd, rs1, src } => {
                let result = Alu::execute(alu_op(op), regs.read(rs1.index()), operand(regs, src));
                wb.reg = Some((rd, result.value));
            }
            Instruction::Cmp { rs1, src } => {
                let result = Alu::execute(AluOp::Cmp, regs.read(rs1.index()), operand(regs, src));
                wb.flags = Some(Flags::from_compare(result.flags));
            }
            Instruction::Not { rd, src } => {
                wb.reg = Some((rd, Alu::execute(AluOp::Not, 0, operand(regs, src)).value));
            }
            Instruction::Mov { rd, src } => {
                wb.reg = Some((rd, Alu::execute(AluOp::Mov, 0, operand(regs, src)).value));
            }
            Instruction::Nop => {}
            Instruction::Ld { rd, base, offset } => {
                let addr = effective_address(regs, base, offset);
                wb.reg = Some((rd, state.memory.load(addr)?));
            }
            Instruction::St { rs, base, offset } => {
                let addr = effective_address(regs, base, offset);
                wb.store = Some((addr, regs.read(rs.index())));
            }
            Instruction::Beq { .. } | Instruction::Bgt { .. } | Instruction::B { .. } => {
                let cond = match inst {
                    Instruction::Beq { .. } => state.flags.eq,
                    Instruction::Bgt { .. } => state.flags.gt,
                    _ => true,
                };
                if cond && let Some(target) = inst.branch_target(pc) {
                    wb.jump(target);
                }
            }
            Instruction::Call { .. } => {
                wb.reg = Some((Reg::RA, next_pc as i32));
                if let Some(target) = inst.branch_target(pc) {
                    wb.jump(target);
                }
            }
            Instruction::Ret => wb.jump(regs.read(Reg::RA.index()) as u32),
            Instruction::Hlt => wb.halt = true,
        }

        Ok((word, inst, wb))
    }

    /// Commits the latch. The store goes first since it is the only fallible effect.
    fn commit(state: &mut ExecutionState, wb: Writeback) -> Result<(), FaultKind> {
        if let Some((addr, value)) = wb.store {
            state.memory.store(addr, value)?;
        }
        if let Some((rd, value)) = wb.reg {
            state.regs.write(rd.index(), value);
        }
        if let Some(flags) = wb.flags {
            state.flags = flags;
        }
        state.pc = wb.next_pc;
        if wb.halt {
            state.status = CpuStatus::Halted;
        }
        Ok(())
    }
}

/// Maps a decoded two-operand instruction to its ALU operation.
const fn alu_op(op: BinaryOp) -> AluOp {
    match op {
        BinaryOp::Add => AluOp::Add,
        BinaryOp::Sub => AluOp::Sub,
        BinaryOp::Mul => AluOp::Mul,
        BinaryOp::Div => AluOp::Div,
        BinaryOp::Mod => AluOp::Mod,
        BinaryOp::And => AluOp::And,
        BinaryOp::Or => AluOp::Or,
        BinaryOp::Lsl => AluOp::Lsl,
        BinaryOp::Lsr => AluOp::Lsr,
        BinaryOp::Asr => AluOp::Asr,
    }
}

/// Value of the second operand: `rs2` or the widened immediate.
fn operand(regs: &RegisterFile, src: Operand) -> i32 {
    match src {
        Operand::Reg(reg) => regs.read(reg.index()),
        Operand::Imm(imm) => imm.value(),
    }
}

/// `base + offset`, computed by the ALU adder (wrapping).
fn effective_address(regs: &RegisterFile, base: Reg, offset: Immediate) -> u32 {
    Alu::execute(AluOp::Add, regs.read(base.index()), offset.value()).value as u32
}
