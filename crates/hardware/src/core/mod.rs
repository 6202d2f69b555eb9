//! Core processor implementation.
//!
//! This module contains the SimpleRisc datapath and its sequencing:
//! 1. **Arch:** The register file and the flags register.
//! 2. **Units:** The ALU.
//! 3. **Memory:** Byte-addressed main memory shared by fetch and load/store.
//! 4. **State:** The execution state one run owns.
//! 5. **Control:** The single-cycle fetch/decode/execute/writeback sequencer.

/// Architecture-specific components (register file, flags).
pub mod arch;

/// Fetch, decode, execute and writeback sequencing.
pub mod control;

/// Main memory.
pub mod memory;

/// Execution state and CPU status.
pub mod state;

/// Execution units (ALU).
pub mod units;

pub use self::control::ControlUnit;
pub use self::memory::Memory;
pub use self::state::{CpuStatus, ExecutionState};
