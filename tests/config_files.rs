use std::io::Write;

use tempfile::NamedTempFile;

use embedded_course::{ConfigError, CourseConfig, Platform};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
platform = "msp432"
verbose = false
data_set = [34, 201, 190, 154, 8]

[conversion]
base = 2
"#,
    );

    let config = CourseConfig::load(file.path()).unwrap();
    assert_eq!(config.platform, Platform::Msp432);
    assert!(!config.verbose);
    assert_eq!(config.data_set, vec![34, 201, 190, 154, 8]);
    assert_eq!(config.conversion.base, 2);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = CourseConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_config("data_set = \"not a list\"\n");
    assert!(matches!(
        CourseConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_or_default_without_path() {
    let config = CourseConfig::load_or_default(None).unwrap();
    assert_eq!(config, CourseConfig::default());
}
