//! Command surface tests

use std::path::Path;

use asap::cli::{Cli, Command, EXIT_FAIL, EXIT_MALFORMED, EXIT_PASS, execute, exit_code};
use asap::domain::{DocumentType, Error, RulesetKey, ValidationOutcome};
use asap::infrastructure::config::AppConfig;
use asap::infrastructure::di::{AppContext, init_app};
use clap::Parser;

const SSP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<system-security-plan xmlns="http://csrc.nist.gov/ns/oscal/1.0" uuid="u-1">
  <metadata><title>Example</title></metadata>
</system-security-plan>
"#;

const SAP_XSPEC: &str = r#"<x:description xmlns:x="http://www.jenitennison.com/xslt/xspec" schematron="sap.sch">
  <x:scenario label="metadata">
    <x:context><assessment-plan><metadata/></assessment-plan></x:context>
    <x:scenario label="without a title">
      <x:expect-assert id="sap-has-title" label="title is required"/>
    </x:scenario>
    <x:scenario label="with a title">
      <x:expect-not-assert id="sap-has-title" label="title is present"/>
    </x:scenario>
  </x:scenario>
</x:description>
"#;

fn context_in(root: &Path) -> AppContext {
    let mut config = AppConfig::default();
    config.engine.provider = "null".to_string();
    config.summaries.schematron_dir = format!("{}/sch", root.display());
    config.summaries.xspec_dir = format!("{}/xspec", root.display());
    config.summaries.output_dir = format!("{}/out", root.display());
    init_app(config).unwrap()
}

#[test]
fn test_parse_validate_with_options() {
    let cli = Cli::try_parse_from([
        "asap", "validate", "ssp.json", "--ruleset", "rev5", "--type", "ssp", "--json",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Command::Validate {
            oscal_file_path: "ssp.json".to_string(),
            ruleset: Some(RulesetKey::Rev5),
            document_type: Some(DocumentType::Ssp),
            json: true,
        }
    );
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_batch_commands() {
    let cli = Cli::try_parse_from(["asap", "--config", "asap.toml", "generate-schematron-summaries"])
        .unwrap();
    assert_eq!(cli.command, Command::GenerateSchematronSummaries);
    assert_eq!(cli.config.as_deref(), Some(Path::new("asap.toml")));

    let cli = Cli::try_parse_from(["asap", "create-assertion-view"]).unwrap();
    assert_eq!(cli.command, Command::CreateAssertionView);

    let cli = Cli::try_parse_from(["asap", "create-xspec-summaries", "sap"]).unwrap();
    assert_eq!(
        cli.command,
        Command::CreateXspecSummaries {
            document_type: "sap".to_string()
        }
    );
}

#[test]
fn test_parse_rejects_unknown_ruleset() {
    assert!(Cli::try_parse_from(["asap", "validate", "a.xml", "--ruleset", "rev9"]).is_err());
    assert!(Cli::try_parse_from(["asap", "validate"]).is_err());
}

#[test]
fn test_exit_codes() {
    assert_eq!(exit_code(ValidationOutcome::Pass), EXIT_PASS);
    assert_eq!(exit_code(ValidationOutcome::Fail), EXIT_FAIL);
    assert_eq!(exit_code(ValidationOutcome::Malformed), EXIT_MALFORMED);
}

#[tokio::test]
async fn test_validate_prints_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ssp.xml");
    std::fs::write(&path, SSP_XML).unwrap();
    let context = context_in(dir.path());

    let mut out = Vec::new();
    let code = execute(
        &context,
        Command::Validate {
            oscal_file_path: path.display().to_string(),
            ruleset: None,
            document_type: None,
            json: false,
        },
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(code, EXIT_PASS);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(": PASS (ssp, rev4)"), "{text}");
}

#[tokio::test]
async fn test_validate_json_output_is_a_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"system-security-plan": {"uuid": "u"}}"#).unwrap();
    let context = context_in(dir.path());

    let mut out = Vec::new();
    let code = execute(
        &context,
        Command::Validate {
            oscal_file_path: path.display().to_string(),
            ruleset: Some(RulesetKey::Rev5),
            document_type: None,
            json: true,
        },
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(code, EXIT_MALFORMED);
    let result: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(result["outcome"], "malformed");
    assert_eq!(result["ruleset"], "rev5");
    assert_eq!(result["assertions"], serde_json::json!([]));
}

#[tokio::test]
async fn test_validate_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let context = context_in(dir.path());

    let err = execute(
        &context,
        Command::Validate {
            oscal_file_path: dir.path().join("absent.xml").display().to_string(),
            ruleset: None,
            document_type: None,
            json: false,
        },
        &mut Vec::new(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_create_xspec_summaries_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("xspec")).unwrap();
    std::fs::write(dir.path().join("xspec/sap.xspec"), SAP_XSPEC).unwrap();
    let context = context_in(dir.path());

    let mut out = Vec::new();
    let code = execute(
        &context,
        Command::CreateXspecSummaries {
            document_type: "sap".to_string(),
        },
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(code, EXIT_PASS);
    assert!(String::from_utf8(out).unwrap().starts_with("sap: 2 scenarios"));
    let written = std::fs::read_to_string(dir.path().join("out/xspec-summary-sap.json")).unwrap();
    let scenarios: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(scenarios[0]["label"], "metadata without a title");
    assert_eq!(scenarios[1]["expectation"], "not-assert");
}

#[tokio::test]
async fn test_create_xspec_summaries_unknown_type() {
    let dir = tempfile::tempdir().unwrap();
    let context = context_in(dir.path());

    let err = execute(
        &context,
        Command::CreateXspecSummaries {
            document_type: "catalog".to_string(),
        },
        &mut Vec::new(),
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, Error::UnsupportedDocumentType { ref tag } if tag == "catalog"),
        "got {err:?}"
    );
}
