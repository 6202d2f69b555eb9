//! Main Memory.
//!
//! A flat, byte-addressable little-endian array shared by instruction fetch and
//! the load/store path. All accesses are 32-bit words and must be 4-byte
//! aligned; anything else is reported as a [`MemError`] rather than wrapping or
//! truncating.

use crate::common::constants::{WORD_ALIGN_MASK, WORD_BYTES};
use crate::common::error::MemError;

/// Byte-addressable main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory").field("size", &self.bytes.len()).finish_non_exhaustive()
    }
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self { bytes: vec![0; size] }
    }

    /// Size of the memory in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Fetches the raw instruction word at `addr`.
    pub fn fetch(&self, addr: u32) -> Result<u32, MemError> {
        let offset = self.check(addr)?;
        let mut word = [0u8; WORD_BYTES as usize];
        word.copy_from_slice(&self.bytes[offset..offset + WORD_BYTES as usize]);
        Ok(u32::from_le_bytes(word))
    }

    /// Loads the signed data word at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemError::Unaligned`] if `addr` is not a multiple of 4,
    /// [`MemError::OutOfBounds`] if the word does not lie entirely inside memory.
    pub fn load(&self, addr: u32) -> Result<i32, MemError> {
        self.fetch(addr).map(|word| word as i32)
    }

    /// Stores a data word at `addr`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Memory::load`]; memory is left untouched on error.
    pub fn store(&mut self, addr: u32, value: i32) -> Result<(), MemError> {
        let offset = self.check(addr)?;
        self.bytes[offset..offset + WORD_BYTES as usize].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Copies a sequence of words into memory starting at `base`.
    ///
    /// Nothing is written unless the whole image fits.
    pub fn load_words(&mut self, base: u32, words: &[u32]) -> Result<(), MemError> {
        let Some(last) = words.len().checked_sub(1) else {
            return Ok(());
        };
        let size = self.size();
        let last_addr = u32::try_from(base as usize + last * WORD_BYTES as usize)
            .map_err(|_| MemError::OutOfBounds { addr: u32::MAX, size })?;
        let _ = self.check(base)?;
        let _ = self.check(last_addr)?;

        for (i, word) in words.iter().enumerate() {
            let offset = base as usize + i * WORD_BYTES as usize;
            self.bytes[offset..offset + WORD_BYTES as usize].copy_from_slice(&word.to_le_bytes());
        }
        Ok(())
    }

    /// Validates alignment and bounds, returning the byte offset of the word.
    fn check(&self, addr: u32) -> Result<usize, MemError> {
        if addr & WORD_ALIGN_MASK != 0 {
            return Err(MemError::Unaligned { addr });
        }
        let offset = addr as usize;
        match offset.checked_add(WORD_BYTES as usize) {
            Some(end) if end <= self.bytes.len() => Ok(offset),
            _ => Err(MemError::OutOfBounds { addr, size: self.bytes.len() }),
        }
    }
}
