//! Simulator: loads programs into fresh execution states and runs them.
//!
//! The simulator itself holds only configuration. Each run takes an
//! [`ExecutionState`] by value and hands it back inside the [`RunReport`], so
//! states are never shared between runs.

use std::fmt;

use tracing::{debug, warn};

use crate::common::error::{Fault, MemError};
use crate::config::Config;
use crate::core::control::ControlUnit;
use crate::core::memory::Memory;
use crate::core::state::{CpuStatus, ExecutionState};
use crate::isa::instruction::Reg;
use crate::stats::SimStats;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalReason {
    /// A `hlt` instruction retired.
    Halted,
    /// The CPU faulted.
    Faulted(Fault),
    /// The cycle bound was reached while the CPU was still running.
    CycleLimitExceeded {
        /// The bound that was hit.
        limit: u64,
    },
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halted => write!(f, "halted"),
            Self::Faulted(fault) => write!(f, "faulted: {fault}"),
            Self::CycleLimitExceeded { limit } => write!(f, "cycle limit of {limit} exceeded"),
        }
    }
}

/// Outcome of [`Simulator::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Final execution state.
    pub state: ExecutionState,
    /// Cycles stepped during this run.
    pub cycles: u64,
    /// Why the run stopped.
    pub reason: TerminalReason,
    /// Retire statistics for this run.
    pub stats: SimStats,
}

/// Top-level simulator.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a fresh execution state with `words` placed at `start_pc`, the PC
    /// pointing at the first word and `sp` set to the initial stack pointer.
    ///
    /// # Errors
    ///
    /// [`MemError`] when the image does not fit in memory.
    pub fn load_program(&self, words: &[u32]) -> Result<ExecutionState, MemError> {
        let start_pc = self.config.general.start_pc;
        let mut memory = Memory::new(self.config.memory.size_bytes);
        memory.load_words(start_pc, words)?;

        let mut state = ExecutionState::new(memory, start_pc);
        let sp = self.config.initial_sp();
        state.regs_mut().write(Reg::SP.index(), sp as i32);

        debug!(
            words = words.len(),
            start_pc = format_args!("{start_pc:#010x}"),
            sp = format_args!("{sp:#010x}"),
            "program loaded"
        );
        Ok(state)
    }

    /// Steps `state` until it halts, faults, or `max_cycles` cycles have run.
    ///
    /// The status is checked before the bound, so a program that halts on
    /// exactly its `max_cycles`-th cycle reports [`TerminalReason::Halted`].
    pub fn run(&self, mut state: ExecutionState, max_cycles: u64) -> RunReport {
        let control = ControlUnit::new(self.config.general.trace_instructions);
        let mut stats = SimStats::default();

        let reason = loop {
            match state.status() {
                CpuStatus::Halted => break TerminalReason::Halted,
                CpuStatus::Faulted(fault) => break TerminalReason::Faulted(fault),
                CpuStatus::Running => {}
            }
            if stats.cycles >= max_cycles {
                warn!(
                    limit = max_cycles,
                    pc = format_args!("{:#010x}", state.pc()),
                    "cycle limit exceeded"
                );
                break TerminalReason::CycleLimitExceeded { limit: max_cycles };
            }
            let _ = control.step(&mut state, &mut stats);
        };

        if reason == TerminalReason::Halted {
            debug!(cycles = stats.cycles, r1 = state.reg(Reg::R1.index()), "run complete");
        }

        RunReport { cycles: stats.cycles, state, reason, stats }
    }

    /// Loads `words` and runs them under the configured `max_cycles`.
    pub fn run_program(&self, words: &[u32]) -> Result<RunReport, MemError> {
        let state = self.load_program(words)?;
        Ok(self.run(state, self.config.general.max_cycles))
    }
}
