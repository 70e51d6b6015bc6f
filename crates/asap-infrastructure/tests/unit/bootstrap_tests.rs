//! Application context bootstrap tests

use std::sync::Arc;

use asap_domain::DocumentType;
use asap_domain::error::Error;
use asap_domain::value_objects::{RulesetKey, ValidationOutcome};
use asap_infrastructure::config::AppConfig;
use asap_infrastructure::di::{init_app, init_app_with_store};
use asap_providers::FileArtifactStore;

const SSP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<system-security-plan xmlns="http://csrc.nist.gov/ns/oscal/1.0" uuid="u-1">
  <metadata><title>Example</title></metadata>
</system-security-plan>
"#;

fn null_engine_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.engine.provider = "null".to_string();
    config
}

fn schematron(tag: &str) -> String {
    format!(
        r#"<sch:schema xmlns:sch="http://purl.oclc.org/dsdl/schematron">
  <sch:pattern id="{tag}-pattern">
    <sch:rule context="/">
      <sch:assert id="{tag}-has-title" role="error" test="title">A title is required.</sch:assert>
    </sch:rule>
  </sch:pattern>
</sch:schema>
"#
    )
}

#[test]
fn test_default_config_resolves_providers() {
    let context = init_app(AppConfig::default()).unwrap();
    assert_eq!(context.gateway().engine_name(), "xslt");
    assert_eq!(context.store().provider_name(), "location");
}

#[test]
fn test_unknown_engine_is_configuration_error() {
    let mut config = AppConfig::default();
    config.engine.provider = "jing".to_string();

    let err = init_app(config).unwrap_err();
    match err {
        Error::Configuration { message, .. } => {
            assert!(message.contains("jing"), "{message}");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_unknown_converter_is_configuration_error() {
    let mut config = null_engine_config();
    config.conversion.provider = "pandoc".to_string();

    assert!(matches!(
        init_app(config).unwrap_err(),
        Error::Configuration { .. }
    ));
}

#[test]
fn test_validation_settings_reach_the_service() {
    let mut config = null_engine_config();
    config.validation.default_ruleset = RulesetKey::Rev5;
    config.validation.blocking_roles = vec!["fatal".to_string()];

    let context = init_app(config).unwrap();
    let service = context.oscal_service();
    assert_eq!(service.default_ruleset(), RulesetKey::Rev5);
    assert_eq!(service.policy().blocking_roles, vec!["fatal".to_string()]);
}

#[tokio::test]
async fn test_validate_file_with_null_engine_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ssp.xml");
    std::fs::write(&path, SSP_XML).unwrap();

    let context = init_app(null_engine_config()).unwrap();
    let result = context
        .oscal_service()
        .validate_file(path.to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(result.outcome, ValidationOutcome::Pass);
    assert!(result.assertions.is_empty());
}

#[tokio::test]
async fn test_summaries_use_configured_layout() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let mut config = null_engine_config();
    config.summaries.schematron_dir = format!("{root}/sch");
    config.summaries.output_dir = format!("{root}/out");
    for document_type in DocumentType::ALL {
        let layout = config.summaries.layout();
        let source = layout.schematron_source(document_type);
        std::fs::create_dir_all(std::path::Path::new(&source).parent().unwrap()).unwrap();
        std::fs::write(&source, schematron(document_type.as_str())).unwrap();
    }

    let context = init_app_with_store(config, Arc::new(FileArtifactStore::new())).unwrap();
    let summaries = context
        .schematron_summary()
        .generate_all_summaries()
        .await
        .unwrap();

    assert_eq!(summaries.get(DocumentType::Sar).len(), 1);
    let written = std::fs::read_to_string(dir.path().join("out/ssp.json")).unwrap();
    assert!(written.contains("ssp-has-title"), "{written}");

    let catalogs = context.documentation().rule_catalogs().await.unwrap();
    assert!(catalogs.get(DocumentType::Poam).contains_key("poam-has-title"));
}
