mod common;

use tempfile::TempDir;
use aegis_netengine::config::enums::configuration_error::ConfigurationError;
use aegis_netengine::config::structs::configuration::Configuration;

#[test]
fn test_config_save_and_reload_roundtrip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    let path = path.to_str().expect("utf-8 path");

    let mut config = common::create_test_config();
    config.engine.workers = 7;
    config.engine.process_timeout_ms = 250;
    Configuration::save_from_config(&config, path).expect("config should save");

    let loaded = Configuration::load_file(path).expect("config should load");
    assert_eq!(loaded.engine, config.engine);
    assert_eq!(loaded.udp_server.bind_address, "127.0.0.1:0");
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.toml");

    match Configuration::load_file(path.to_str().expect("utf-8 path")) {
        Err(ConfigurationError::IOError(_)) => {}
        other => panic!("Expected an IO error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_config_create_writes_defaults_and_refuses_to_start() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("fresh.toml");
    let path = path.to_str().expect("utf-8 path");

    assert!(Configuration::load_from_file(path, false).is_err());
    assert!(std::fs::metadata(path).is_err(), "Nothing is written without --create-config");

    assert!(Configuration::load_from_file(path, true).is_err(), "A freshly written file must be reviewed first");
    let written = Configuration::load_file(path).expect("default file should parse");
    assert_eq!(written.udp_server.bind_address, "0.0.0.0:9000");
    assert_eq!(written.http_server.bind_address, "0.0.0.0:9090");

    assert!(Configuration::load_from_file(path, false).is_ok(), "The written defaults are valid");
}

#[test]
fn test_config_invalid_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.toml");
    let mut config = Configuration::init();
    config.log_level = String::from("loud");
    Configuration::save_from_config(&config, path.to_str().expect("utf-8 path")).expect("config should save");

    assert!(Configuration::load_from_file(path.to_str().expect("utf-8 path"), false).is_err());
}
