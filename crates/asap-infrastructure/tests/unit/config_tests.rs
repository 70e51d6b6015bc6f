//! Configuration loading and validation tests

use std::env;
use std::io::Write;

use asap_domain::error::Error;
use asap_domain::value_objects::{RulesetKey, SeverityPolicy};
use asap_infrastructure::config::loader::validate_app_config;
use asap_infrastructure::config::{AppConfig, ConfigLoader};
use asap_infrastructure::constants::{
    DEFAULT_ARTIFACT_BASE, DEFAULT_CONVERSION_PROVIDER, DEFAULT_ENGINE_COMMAND,
    DEFAULT_ENGINE_PROVIDER,
};

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.artifacts.base_location, DEFAULT_ARTIFACT_BASE);
    assert_eq!(config.engine.provider, DEFAULT_ENGINE_PROVIDER);
    assert_eq!(config.engine.command, DEFAULT_ENGINE_COMMAND);
    assert_eq!(config.conversion.provider, DEFAULT_CONVERSION_PROVIDER);
    assert_eq!(config.validation.default_ruleset, RulesetKey::Rev4);
    assert_eq!(config.validation.policy(), SeverityPolicy::default());
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_file_overrides_defaults_per_key() {
    let file = config_file(
        r#"
[artifacts]
base_location = "https://example.org/asap/"
cache_capacity = 4

[engine]
provider = "null"

[validation]
default_ruleset = "rev5"
blocking_roles = ["fatal"]
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.artifacts.base_location, "https://example.org/asap/");
    assert_eq!(config.artifacts.cache_capacity, 4);
    assert_eq!(config.engine.provider, "null");
    assert_eq!(config.engine.command, DEFAULT_ENGINE_COMMAND);
    assert_eq!(config.validation.default_ruleset, RulesetKey::Rev5);
    assert_eq!(config.validation.blocking_roles, vec!["fatal".to_string()]);
    assert!(config.validation.missing_role_is_blocking);
}

#[test]
fn test_summaries_layout_from_file() {
    let file = config_file(
        r#"
[summaries]
schematron_dir = "rules/src"
output_dir = "site/rules"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();
    let layout = config.summaries.layout();

    assert_eq!(
        layout.schematron_source(asap_domain::DocumentType::Sap),
        "rules/src/sap.sch"
    );
    assert_eq!(
        layout.assertion_view_output(asap_domain::DocumentType::Poam),
        "site/rules/assertion-views-poam.json"
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "got {err:?}");
}

#[test]
fn test_invalid_values_fail_fast() {
    for contents in [
        "[logging]\nlevel = \"loud\"\n",
        "[artifacts]\nbase_location = \"  \"\n",
        "[artifacts]\ncache_capacity = 0\n",
        "[engine]\ncommand = \"\"\n",
        "[validation]\nblocking_roles = []\nmissing_role_is_blocking = false\n",
        "[validation]\ndefault_ruleset = \"rev9\"\n",
    ] {
        let file = config_file(contents);
        let result = ConfigLoader::new().with_config_path(file.path()).load();
        assert!(
            matches!(result, Err(Error::Configuration { .. })),
            "{contents:?}: {result:?}"
        );
    }
}

#[test]
fn test_empty_command_allowed_without_xslt_providers() {
    let file = config_file("[engine]\nprovider = \"null\"\ncommand = \"\"\n");
    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();
    assert_eq!(config.engine.provider, "null");
}

#[test]
fn test_save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asap.toml");
    let mut config = AppConfig::default();
    config.engine.provider = "null".to_string();
    config.engine.args = vec!["-t".to_string()];
    config.validation.missing_role_is_blocking = false;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, config);
}

/// Run with: `cargo test -p asap-infrastructure --test unit env_ -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let file = config_file("[engine]\nprovider = \"xslt\"\n");
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("ASAP_TEST__ENGINE__PROVIDER", "null");
    }

    let config = ConfigLoader::new()
        .with_env_prefix("ASAP_TEST")
        .with_config_path(file.path())
        .load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("ASAP_TEST__ENGINE__PROVIDER");
    }
    assert_eq!(config.unwrap().engine.provider, "null");
}
