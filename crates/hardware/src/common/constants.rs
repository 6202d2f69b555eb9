//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Instruction and data word widths.
//! 2. **Register Constants:** Size of the architectural register file.
//! 3. **Simulation Constants:** Default bounds for memory size and run length.

/// Size of a SimpleRisc instruction (and data word) in bytes.
pub const WORD_BYTES: u32 = 4;

/// Mask of the address bits that must be clear for a word-aligned access.
pub const WORD_ALIGN_MASK: u32 = WORD_BYTES - 1;

/// Number of general-purpose registers (`r0`-`r15`).
pub const NUM_REGS: usize = 16;

/// Default size of main memory in bytes (64 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 64 * 1024;

/// Default upper bound on cycles for a single run.
pub const DEFAULT_MAX_CYCLES: u64 = 1_000_000;
