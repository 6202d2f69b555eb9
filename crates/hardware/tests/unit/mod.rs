//! # Unit Components
//!
//! Per-module tests for the SimpleRisc simulator.

/// Configuration defaults, JSON loading and validation.
pub mod config;


/// Decoder, encoder and disassembler.
pub mod isa;


/// Retire statistics.
pub mod stats;
