use rstest::rstest;

use simplerisc_core::isa::decode::decode;
use simplerisc_core::isa::disasm::disassemble;

#[rstest]
#[case(0x9000_0010, "b 16")]
#[case(0x2C00_0001, "cmp r0, 1")]
#[case(0x8000_000C, "beq 12")]
#[case(0x8800_0001, "bgt 1")]
#[case(0x0FB8_0008, "sub sp, sp, 8")]
#[case(0x7C38_0000, "st r0, [sp]")]
#[case(0x7FF8_0004, "st ra, 4[sp]")]
#[case(0x9FFF_FFF7, "call -9")]
#[case(0x7438_0000, "ld r0, [sp]")]
#[case(0x77F8_0004, "ld ra, 4[sp]")]
#[case(0x1040_4000, "mul r1, r0, r1")]
#[case(0x07B8_0008, "add sp, sp, 8")]
#[case(0xA000_0000, "ret")]
#[case(0x4C40_0001, "mov r1, 1")]
#[case(0x6800_0000, "nop")]
#[case(0xF800_0000, "hlt")]
fn factorial_mnemonics(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[rstest]
#[case(0x048C_FFFC, "add r2, r3, -4")]
#[case(0x4C41_FFFF, "movu r1, 0xffff")]
#[case(0x4C42_1234, "movh r1, 0x1234")]
#[case(0x4040_0000, "not r1, r0")]
#[case(0x5C84_0004, "lsr r2, r1, 4")]
fn operand_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}

#[test]
fn undecodable_words_print_unknown() {
    assert_eq!(disassemble(0xA800_0000), "unknown");
    assert_eq!(disassemble(0x0403_0000), "unknown");
    assert_eq!(disassemble(0x7000_0000), "unknown");
}

#[test]
fn display_matches_disassemble() {
    let inst = decode(0x7FF8_0004).unwrap();
    assert_eq!(inst.to_string(), disassemble(0x7FF8_0004));
}
