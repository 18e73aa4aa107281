use metals_analytics::config::{ApplicationConfig, Environment, Validator};
use metals_analytics::data_ingestion::processor::CalendarPolicy;
use serial_test::serial;
use std::path::Path;

fn config_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/config"))
}

#[test]
#[serial]
fn test_shipped_development_config() {
    let config = ApplicationConfig::load_from_dir(config_dir(), Environment::Development).unwrap();

    assert_eq!(config.log.level, "debug");
    assert_eq!(config.parser.calendar, CalendarPolicy::Permissive);
    assert!(config.assistant.api_key().is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_shipped_production_config() {
    let config = ApplicationConfig::load_from_dir(config_dir(), Environment::Production).unwrap();

    assert_eq!(config.log.format, "json");
    assert_eq!(config.parser.calendar, CalendarPolicy::Permissive);
    assert!(config.validate().is_ok());
}
