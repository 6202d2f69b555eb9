//! Program image loader.
//!
//! Two image formats are understood:
//! 1. **Text:** One word per line, written as 8 hex digits (optional `0x`
//!    prefix, `_` separators allowed) or as a 32-character binary string.
//!    Everything after `;`, `#` or `//` is a comment; blank lines are skipped.
//! 2. **Binary:** Files with a `.bin` extension hold raw little-endian words.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::common::error::LoadError;

const COMMENT_MARKERS: [&str; 3] = [";", "#", "//"];

/// Reads a program image from disk, choosing the format from the extension.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let is_binary = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));

    let words = if is_binary {
        parse_binary_image(&fs::read(path)?)?
    } else {
        parse_text_image(&fs::read_to_string(path)?)?
    };
    debug!(path = %path.display(), words = words.len(), "loaded program image");
    Ok(words)
}

/// Parses a text image.
///
/// ```
/// use simplerisc_core::sim::loader::parse_text_image;
///
/// let words = parse_text_image("0x4C40_0001 ; mov r1, 1\n\n11111000000000000000000000000000\n").unwrap();
/// assert_eq!(words, vec![0x4C40_0001, 0xF800_0000]);
/// ```
pub fn parse_text_image(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let token = strip_comment(raw).trim();
        if token.is_empty() {
            continue;
        }
        let word = parse_word(token).ok_or_else(|| LoadError::InvalidWord {
            line: idx + 1,
            text: token.to_owned(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Parses a raw little-endian binary image.
pub fn parse_binary_image(bytes: &[u8]) -> Result<Vec<u32>, LoadError> {
    let chunks = bytes.chunks_exact(WORD_BYTES as usize);
    if !chunks.remainder().is_empty() {
        return Err(LoadError::TruncatedBinary { len: bytes.len() });
    }
    Ok(chunks
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

fn strip_comment(line: &str) -> &str {
    let cut = COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

fn parse_word(token: &str) -> Option<u32> {
    let digits: String = token.chars().filter(|&c| c != '_').collect();

    if digits.len() == 32 && digits.bytes().all(|b| b == b'0' || b == b'1') {
        return u32::from_str_radix(&digits, 2).ok();
    }

    let hex = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);
    if hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return u32::from_str_radix(hex, 16).ok();
    }
    None
}
