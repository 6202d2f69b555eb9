//! Simulation driver and program loading.
//!
//! Provides:
//! 1. **Loader:** Reads text and raw binary program images into instruction words.
//! 2. **Programs:** Built-in demonstration programs assembled through the encoder.
//! 3. **Simulator:** Loads an image into a fresh execution state and runs it to a
//!    terminal condition.

pub mod loader;
pub mod programs;
pub mod simulator;

pub use self::simulator::{RunReport, Simulator, TerminalReason};
