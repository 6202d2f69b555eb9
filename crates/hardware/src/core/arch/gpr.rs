//! SimpleRisc General-Purpose Register File.
//!
//! This module implements the register file of the SimpleRisc datapath.
//! It performs the following:
//! 1. **Storage:** Maintains 16 signed 32-bit registers (`r0`-`r15`).
//! 2. **Aliases:** `r14` is the stack pointer and `r15` the return address; they
//!    are ordinary registers as far as storage is concerned.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! Unlike RISC-V, SimpleRisc does not hardwire `r0` to zero.

use std::fmt;

use crate::common::constants::NUM_REGS;
use crate::isa::abi::reg_name;

/// General-Purpose Register file.
///
/// Indices are masked to 4 bits, matching the width of the register fields in
/// an instruction word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; NUM_REGS] }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx % NUM_REGS]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx % NUM_REGS] = val;
    }

    /// Snapshot of all register values, indexed by register number.
    pub fn values(&self) -> [i32; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    /// Four registers per line, hex followed by the signed decimal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_REGS).step_by(4) {
            for idx in row..row + 4 {
                let val = self.regs[idx];
                write!(f, "{:>3}={:#010x} ({:<11})", reg_name(idx), val, val)?;
                if idx != row + 3 {
                    f.write_str("  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
