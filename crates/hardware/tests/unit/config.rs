use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use simplerisc_core::config::{Config, ConfigError, GeneralConfig, MemoryConfig};

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig { trace_instructions: false, start_pc: 0, max_cycles: 1_000_000 },
            memory: MemoryConfig { size_bytes: 64 * 1024, initial_sp: None },
        }
    );
    assert_eq!(config.initial_sp(), 0x1_0000);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_is_default() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let json = r#"{ "memory": { "size_bytes": 4096, "initial_sp": 2048 } }"#;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(config.memory.size_bytes, 4096);
    assert_eq!(config.initial_sp(), 2048);
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn rejects_memory_size_not_word_multiple() {
    let err = Config::from_json_str(r#"{ "memory": { "size_bytes": 1022 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::MemorySizeNotWordMultiple(1022)));
}

#[test]
fn rejects_misaligned_start_pc() {
    let err = Config::from_json_str(r#"{ "general": { "start_pc": 6 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::MisalignedStartPc(6)));
}

#[test]
fn rejects_malformed_json() {
    let err = Config::from_json_str(r#"{ "general": { "max_cycles": "many" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "trace_instructions": true, "max_cycles": 500 }} }}"#).unwrap();
    let config = Config::from_json_file(file.path()).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_cycles, 500);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(dir.path().join("sim.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
