use remote_blackjack::utils::validation::Validate;
use remote_blackjack::{GameError, Settings, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_toml_file_resolves_to_settings() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "https://deckofcardsapi.com/api"
deck_count = 6
timeout_seconds = 3

[game]
starting_hand_size = 2
"#
    )
    .unwrap();

    let toml = TomlConfig::from_file(file.path()).unwrap();
    toml.validate().unwrap();

    let settings = Settings::from_provider(&toml);
    assert_eq!(settings.deck_count, 6);
    assert_eq!(settings.timeout_seconds, 3);
    assert_eq!(settings.starting_hand_size, 2);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TomlConfig::from_file("/definitely/not/here/blackjack.toml").unwrap_err();
    assert!(matches!(err, GameError::IoError(_)));
}

#[test]
fn test_bundled_example_config_is_valid_without_env() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("blackjack.example.toml");
    let toml = TomlConfig::from_file(path).unwrap();
    toml.validate().unwrap();

    let settings = Settings::from_provider(&toml);
    assert_eq!(settings.api_base_url, "https://deckofcardsapi.com/api");
    assert!(settings.validate().is_ok());
}
