//! Execution units and functional components.
//!
//! SimpleRisc is a single-cycle design with one functional unit, the ALU; the
//! branch unit and memory port are folded into the control unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
