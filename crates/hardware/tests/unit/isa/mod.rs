
/// Disassembler mnemonic generation.
pub mod disasm;
