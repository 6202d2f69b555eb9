//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the SimpleRisc opcode table, the bit-field layout of instruction
//! words, and the decoder, encoder and disassembler built on top of them.

/// Calling-convention register names (`sp`, `ra`, argument and result registers).
pub mod abi;

/// Instruction decoding logic for all SimpleRisc instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Canonical instruction encoding (the inverse of `decode`).
pub mod encode;

/// Instruction bit-field layout and decoded instruction types.
pub mod instruction;

/// The 5-bit major opcode table.
pub mod opcodes;

pub use decode::decode;
pub use encode::encode;
pub use instruction::Instruction;
pub use opcodes::Opcode;
