//! Configuration system for the SimpleRisc simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline memory size, start address and cycle bound.
//! 2. **Structures:** `general` (tracing, start PC, cycle bound) and `memory`
//!    (size, initial stack pointer) sections.
//! 3. **Loading:** JSON deserialization through serde, followed by validation.
//!
//! Every field is optional in JSON; missing fields take their defaults, so
//! `Config::default()` and `Config::from_json_str("{}")` are the same machine.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::{
    DEFAULT_MAX_CYCLES, DEFAULT_MEMORY_SIZE, WORD_ALIGN_MASK, WORD_BYTES,
};

/// Error produced while loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The JSON did not match the configuration schema.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Memory size is not a whole number of words.
    #[error("memory size {0} is not a multiple of {WORD_BYTES}")]
    MemorySizeNotWordMultiple(usize),

    /// Memory is larger than the 32-bit address space.
    #[error("memory size {0} exceeds the 32-bit address space")]
    MemoryTooLarge(usize),

    /// The start PC is not word aligned.
    #[error("start pc {0:#010x} is not word aligned")]
    MisalignedStartPc(u32),
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use simplerisc_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.size_bytes, 64 * 1024);
/// assert_eq!(config.initial_sp(), 64 * 1024);
/// ```
///
/// Partial JSON keeps the defaults for everything it leaves out:
///
/// ```
/// use simplerisc_core::config::Config;
///
/// let config = Config::from_json_str(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, 1_000_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Main memory configuration
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks that memory is a whole number of words inside the 32-bit
    /// address space and that the start PC is aligned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size_bytes;
        if size % WORD_BYTES as usize != 0 {
            return Err(ConfigError::MemorySizeNotWordMultiple(size));
        }
        if size as u64 > u64::from(u32::MAX) + 1 {
            return Err(ConfigError::MemoryTooLarge(size));
        }
        if self.general.start_pc & WORD_ALIGN_MASK != 0 {
            return Err(ConfigError::MisalignedStartPc(self.general.start_pc));
        }
        Ok(())
    }

    /// Stack pointer value installed by the loader: `memory.initial_sp`, or the
    /// memory size when unset (an empty, full-descending stack).
    pub fn initial_sp(&self) -> u32 {
        self.memory
            .initial_sp
            .unwrap_or_else(|| u32::try_from(self.memory.size_bytes).unwrap_or(u32::MAX))
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log every retired instruction at `TRACE` level.
    pub trace_instructions: bool,
    /// Byte address the program is loaded at and execution starts from.
    pub start_pc: u32,
    /// Default cycle bound for a run.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { trace_instructions: false, start_pc: 0, max_cycles: DEFAULT_MAX_CYCLES }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Memory size in bytes.
    pub size_bytes: usize,
    /// Initial value of `sp`; the memory size when unset.
    pub initial_sp: Option<u32>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { size_bytes: DEFAULT_MEMORY_SIZE, initial_sp: None }
    }
}
