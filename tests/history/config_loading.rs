//! Building a manager from TOML configuration

use crate::common::*;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn manager_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "retention_secs = 2.5").unwrap();
    writeln!(file, "cleanup_interval_secs = 0.25").unwrap();

    let config = HistoryConfig::from_file(file.path()).unwrap();
    let clock = Arc::new(ManualClock::default());
    let manager = RetentionManager::from_config(clock, &config).unwrap();

    assert_eq!(manager.retention(), Duration::from_millis(2500));
    assert_eq!(manager.cleanup_interval(), Duration::from_millis(250));
}

#[test]
fn defaults_apply_to_missing_fields() {
    let config = HistoryConfig::from_toml_str("").unwrap();
    assert_eq!(config, HistoryConfig::default());
    let clock = Arc::new(ManualClock::default());
    let manager = RetentionManager::from_config(clock, &config).unwrap();
    assert_eq!(manager.retention(), Duration::from_secs(10));
    assert_eq!(manager.cleanup_interval(), Duration::from_secs(1));
}

#[test]
fn invalid_settings_are_rejected() {
    let clock: Arc<ManualClock> = Arc::new(ManualClock::default());
    for config in [
        HistoryConfig::new(-1.0, 1.0),
        HistoryConfig::new(f64::NAN, 1.0),
        HistoryConfig::new(10.0, 0.0),
        HistoryConfig::new(10.0, -2.0),
    ] {
        let err = RetentionManager::from_config(clock.clone(), &config).unwrap_err();
        assert!(matches!(err, HistoryError::InvalidConfig(_)), "{:?}", config);
    }
    assert_eq!(clock.pending_actions(), 0);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = HistoryConfig::from_toml_str("retention_secs = \"ten\"").unwrap_err();
    assert!(matches!(err, HistoryError::ConfigParse(_)));
}
