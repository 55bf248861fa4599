//! Tests for settings resolution

use std::collections::HashMap;
use std::fs;

use dco_validator::config::{CONFIG_FILE, ConfigError, FileConfig, Settings};
use dco_validator::core::models::RepoCoordinates;
use serial_test::serial;
use tempfile::TempDir;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |name| vars.get(name).cloned()
}

// =============================================================================
// FILE CONFIG TESTS
// =============================================================================

#[test]
fn test_file_config_parses_all_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dco.toml");
    fs::write(
        &path,
        r#"
gpg_required = true
api_url = "https://ghe.example/api/v3"
check_name = "DCO"
docs_url = "https://docs.example/dco"
"#,
    )
    .unwrap();

    let file = FileConfig::from_path(&path).unwrap();
    assert_eq!(file.gpg_required, Some(true));
    assert_eq!(file.api_url.as_deref(), Some("https://ghe.example/api/v3"));
    assert_eq!(file.check_name.as_deref(), Some("DCO"));
    assert_eq!(file.docs_url.as_deref(), Some("https://docs.example/dco"));
}

#[test]
fn test_file_config_rejects_unknown_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dco.toml");
    fs::write(&path, "validate_gpg = true\n").unwrap();

    let err = FileConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = FileConfig::discover(Some(&temp.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
#[serial(cwd)]
fn test_discover_uses_working_directory_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE), "check_name = \"From cwd\"\n").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();
    let discovered = FileConfig::discover(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(discovered.unwrap().check_name.as_deref(), Some("From cwd"));
}

#[test]
#[serial(cwd)]
fn test_discover_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();
    let discovered = FileConfig::discover(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(discovered.unwrap(), FileConfig::default());
}

// =============================================================================
// ENVIRONMENT RESOLUTION TESTS
// =============================================================================

#[test]
fn test_workflow_environment() {
    let settings = Settings::resolve(
        FileConfig::default(),
        lookup(&[
            ("GITHUB_TOKEN", "ghs_token"),
            ("VALIDATE_GPG", "true"),
            ("GITHUB_EVENT_NAME", "pull_request"),
            ("GITHUB_EVENT_PATH", "/github/workflow/event.json"),
            ("GITHUB_REPOSITORY", "acme/widgets"),
            ("GITHUB_SHA", "merge-sha"),
            ("GITHUB_REF", "refs/pull/1/merge"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.token.as_deref(), Some("ghs_token"));
    assert!(settings.rules.gpg_required);
    assert_eq!(settings.event_name, "pull_request");
    assert_eq!(
        settings.event_path.as_deref(),
        Some(std::path::Path::new("/github/workflow/event.json"))
    );
    assert_eq!(settings.repository, Some(RepoCoordinates::new("acme", "widgets")));
    assert_eq!(settings.sha, "merge-sha");
    assert_eq!(settings.git_ref, "refs/pull/1/merge");
}

#[test]
fn test_empty_gpg_switch_disables_gpg_even_if_file_enables_it() {
    let file = FileConfig {
        gpg_required: Some(true),
        ..FileConfig::default()
    };
    let settings = Settings::resolve(file, lookup(&[("VALIDATE_GPG", "")])).unwrap();
    assert!(!settings.rules.gpg_required);
}

#[test]
fn test_invalid_gpg_switch_names_variable() {
    let err = Settings::resolve(FileConfig::default(), lookup(&[("VALIDATE_GPG", "sometimes")]))
        .unwrap_err();
    assert!(err.to_string().contains("VALIDATE_GPG"));
}

#[test]
fn test_trailing_slash_stripped_from_api_url() {
    let file = FileConfig {
        api_url: Some("https://ghe.example/api/v3/".to_string()),
        ..FileConfig::default()
    };
    let settings = Settings::resolve(file, lookup(&[])).unwrap();
    assert_eq!(settings.api_url, "https://ghe.example/api/v3");
}
