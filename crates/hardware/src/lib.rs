//! SimpleRisc instruction-set simulator library.
//!
//! This crate implements a single-cycle simulator for the 32-bit SimpleRisc ISA:
//! 1. **ISA:** Opcode table, bit-field layout, decoder, encoder and disassembler.
//! 2. **Core:** Register file, flags, ALU, byte-addressed memory and the control
//!    unit that sequences fetch, decode, execute and writeback.
//! 3. **Simulation:** Program loader, built-in programs, run loop and statistics.
//! 4. **Configuration:** JSON-deserializable machine parameters.

/// Common types and constants (word sizes, error taxonomy).
pub mod common;
/// Simulator configuration (defaults, JSON loading, validation).
pub mod config;
/// CPU core (arch state, ALU, memory, control unit).
pub mod core;
/// Instruction set (opcodes, decode, encode, disassembly, ABI names).
pub mod isa;
/// Program loading, built-in programs and the run loop.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Execution state owned by a single run, and its status.
pub use crate::core::{CpuStatus, ExecutionState};
/// Top-level simulator, its run report and terminal reasons.
pub use crate::sim::{RunReport, Simulator, TerminalReason};
/// Retire statistics.
pub use crate::stats::SimStats;
