use pretty_assertions::assert_eq;

use simplerisc_core::SimStats;
use simplerisc_core::isa::decode::decode;

fn retire_word(stats: &mut SimStats, word: u32, taken: bool) {
    stats.retire(&decode(word).unwrap(), taken);
}

#[test]
fn classifies_instruction_mix() {
    let mut stats = SimStats::default();
    retire_word(&mut stats, 0x1040_4000, false); // mul
    retire_word(&mut stats, 0x4C40_0001, false); // mov
    retire_word(&mut stats, 0x2C00_0001, false); // cmp
    retire_word(&mut stats, 0x7438_0000, false); // ld
    retire_word(&mut stats, 0x7C38_0000, false); // st
    retire_word(&mut stats, 0x8000_000C, false); // beq, not taken
    retire_word(&mut stats, 0xA000_0000, true); // ret
    retire_word(&mut stats, 0x6800_0000, false); // nop
    retire_word(&mut stats, 0xF800_0000, false); // hlt

    assert_eq!(
        stats,
        SimStats {
            cycles: 0,
            instructions_retired: 9,
            inst_alu: 2,
            inst_cmp: 1,
            inst_load: 1,
            inst_store: 1,
            inst_branch: 2,
            inst_system: 2,
            branches_taken: 1,
        }
    );
}

#[test]
fn taken_flag_is_ignored_for_non_branches() {
    let mut stats = SimStats::default();
    retire_word(&mut stats, 0x1040_4000, true);
    assert_eq!(stats.branches_taken, 0);
}

#[test]
fn report_lists_counters() {
    let stats = SimStats { cycles: 125, instructions_retired: 125, inst_load: 18, ..SimStats::default() };
    let report = stats.to_string();
    assert!(report.contains("sim_cycles               125"));
    assert!(report.contains("op.load                18 (14.40%)"));
    assert!(report.contains("branch.taken"));
}

#[test]
fn empty_report_does_not_divide_by_zero() {
    let report = SimStats::default().to_string();
    assert!(report.contains("op.alu                 0 (0.00%)"));
}
