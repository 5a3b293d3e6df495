use crate::shared::config::{EngineConfig, Settings, load_settings_from};
use std::io::Write;

#[test]
fn defaults_cover_every_section() {
    let settings = Settings::default();
    assert_eq!(settings.engine.partitions, 0);
    assert_eq!(settings.engine.cancelled_status, "X");
    assert_eq!(settings.engine.strike_airline, "FR");
    assert_eq!(settings.engine.berlin_airports, vec!["SXF", "BER"]);
    assert_eq!(settings.logging.log_dir, "logs");
    assert_eq!(settings.logging.stdout_level, "info");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let settings = load_settings_from("does/not/exist/airport_stats").unwrap();
    assert_eq!(settings.engine.strike_airline, "FR");
    assert_eq!(settings.logging.file_level, "debug");
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    write!(
        file,
        r#"
[engine]
partitions = 4
strike_airline = "LH"
berlin_airports = ["BER"]

[logging]
stdout_level = "warn"
"#
    )
    .unwrap();

    let settings = load_settings_from(file.path().to_str().unwrap()).unwrap();
    assert_eq!(settings.engine.partitions, 4);
    assert_eq!(settings.engine.strike_airline, "LH");
    assert_eq!(settings.engine.berlin_airports, vec!["BER"]);
    // untouched keys keep their defaults
    assert_eq!(settings.engine.cancelled_status, "X");
    assert_eq!(settings.logging.stdout_level, "warn");
    assert_eq!(settings.logging.log_dir, "logs");
}

#[test]
fn engine_config_default_matches_serde_defaults() {
    let from_empty: EngineConfig = serde_json::from_str("{}").unwrap();
    let default = EngineConfig::default();
    assert_eq!(from_empty.partitions, default.partitions);
    assert_eq!(from_empty.cancelled_status, default.cancelled_status);
    assert_eq!(from_empty.berlin_airports, default.berlin_airports);
}
