//! Common utilities and types used throughout the SimpleRisc simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word size, register count and simulation defaults.
//! 2. **Error Handling:** Decode, encode, memory and load errors, and the fault record.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

pub use constants::{NUM_REGS, WORD_BYTES};
pub use error::{DecodeError, EncodeError, Fault, FaultKind, LoadError, MemError};
