//! Simulation statistics collection and reporting.
//!
//! This module tracks retire-level metrics for the SimpleRisc simulator. It provides:
//! 1. **Cycles:** Total cycles stepped and instructions retired.
//! 2. **Instruction mix:** Counts by category (ALU, compare, load, store, branch, system).
//! 3. **Control flow:** How many branches were taken.

use std::fmt;

use crate::isa::instruction::Instruction;

/// Simulation statistics structure tracking retire-level metrics.
///
/// In the single-cycle model every retired instruction costs exactly one cycle;
/// a faulting instruction consumes a cycle but does not retire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles stepped.
    pub cycles: u64,
    /// Number of instructions that completed writeback.
    pub instructions_retired: u64,

    /// Count of arithmetic, logical, shift and move instructions retired.
    pub inst_alu: u64,
    /// Count of `cmp` instructions retired.
    pub inst_cmp: u64,
    /// Count of `ld` instructions retired.
    pub inst_load: u64,
    /// Count of `st` instructions retired.
    pub inst_store: u64,
    /// Count of branch, call and return instructions retired.
    pub inst_branch: u64,
    /// Count of `nop` and `hlt` instructions retired.
    pub inst_system: u64,

    /// Number of control-flow instructions that redirected the PC.
    pub branches_taken: u64,
}

impl SimStats {
    /// Records the retirement of `inst`; `taken` reports whether it redirected the PC.
    pub fn retire(&mut self, inst: &Instruction, taken: bool) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Binary { .. } | Instruction::Not { .. } | Instruction::Mov { .. } => {
                self.inst_alu += 1;
            }
            Instruction::Cmp { .. } => self.inst_cmp += 1,
            Instruction::Ld { .. } => self.inst_load += 1,
            Instruction::St { .. } => self.inst_store += 1,
            Instruction::Beq { .. }
            | Instruction::Bgt { .. }
            | Instruction::B { .. }
            | Instruction::Call { .. }
            | Instruction::Ret => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
            Instruction::Nop | Instruction::Hlt => self.inst_system += 1,
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instr = self.instructions_retired.max(1);
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "SIMPLERISC SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu))?;
        writeln!(f, "  op.cmp                 {} ({:.2}%)", self.inst_cmp, pct(self.inst_cmp))?;
        writeln!(f, "  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load))?;
        writeln!(f, "  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store))?;
        writeln!(
            f,
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            pct(self.inst_branch)
        )?;
        writeln!(
            f,
            "  op.system              {} ({:.2}%)",
            self.inst_system,
            pct(self.inst_system)
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "==========================================================")
    }
}
