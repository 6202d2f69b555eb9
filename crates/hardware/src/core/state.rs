//! Architectural execution state.
//!
//! [`ExecutionState`] bundles everything one run of the CPU owns: the register
//! file, main memory, the program counter, the flags register, the control
//! status and the cycle counter. A state is created from a program image,
//! handed by value to a run, and returned inside the run report, so no two runs
//! ever share mutable state.

use crate::common::error::Fault;
use crate::core::arch::{Flags, RegisterFile};
use crate::core::memory::Memory;

/// Control status of the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuStatus {
    /// Executing instructions.
    Running,
    /// A `hlt` instruction retired.
    Halted,
    /// A decode or memory error stopped the machine.
    Faulted(Fault),
}

impl CpuStatus {
    /// `Halted` and `Faulted` are terminal: no transition leaves them.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Architectural state of one simulated SimpleRisc CPU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionState {
    pub(crate) regs: RegisterFile,
    pub(crate) memory: Memory,
    pub(crate) pc: u32,
    pub(crate) flags: Flags,
    pub(crate) status: CpuStatus,
    pub(crate) cycle: u64,
}

impl ExecutionState {
    /// Creates a running state over `memory` with the PC at `pc` and all
    /// registers and flags cleared.
    pub fn new(memory: Memory, pc: u32) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory,
            pc,
            flags: Flags::default(),
            status: CpuStatus::Running,
            cycle: 0,
        }
    }

    /// The register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable access to the register file, for setting up a state before a run.
    pub fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Reads register `idx`.
    pub fn reg(&self, idx: usize) -> i32 {
        self.regs.read(idx)
    }

    /// Main memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to main memory, for setting up a state before a run.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Current program counter (byte address).
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Moves the program counter, for setting up a state before a run.
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// The flags register.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Current control status.
    pub const fn status(&self) -> CpuStatus {
        self.status
    }

    /// Number of cycles stepped since the state was created.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Prints the PC, flags and register file to stdout.
    pub fn dump(&self) {
        println!(
            "PC = {:#010x}  flags: E={} GT={}",
            self.pc, self.flags.eq as u8, self.flags.gt as u8
        );
        self.regs.dump();
    }
}
