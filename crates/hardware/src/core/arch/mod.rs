//! SimpleRisc architectural state components.
//!
//! This module contains the programmer-visible registers of the SimpleRisc CPU:
//! 1. **GPRs:** The 16-entry general-purpose register file.
//! 2. **Flags:** The `E`/`GT` flags register written by `cmp`.

/// Comparison flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::RegisterFile;
