//! Tests for the validation orchestrator

use std::sync::Arc;

use asap_application::{DocumentTypeRegistry, OscalService, RuleEngineGateway};
use asap_domain::ports::{ArtifactStore, JsonToXmlConverter, RuleEngine};
use asap_domain::value_objects::{
    ArtifactLayout, Assertion, DocumentType, RawDocument, RulesetKey, SeverityPolicy,
    ValidationOutcome,
};
use asap_domain::{DocumentTypeMap, Error};

use crate::test_utils::fixtures::{SSP_JSON, SSP_JSON_WITHOUT_UUID, SSP_XML, service_with};
use crate::test_utils::mock_providers::{InMemoryArtifactStore, ScriptedRuleEngine, StubConverter};

fn passing_engine() -> Arc<ScriptedRuleEngine> {
    Arc::new(ScriptedRuleEngine::new(vec![
        Assertion::passed("ssp-has-title", "title present").with_role("error"),
        Assertion::passed("ssp-has-uuid", "uuid present"),
    ]))
}

fn service(engine: &Arc<ScriptedRuleEngine>) -> OscalService {
    service_with(engine.clone(), Arc::new(InMemoryArtifactStore::new()))
}

#[tokio::test]
async fn test_structural_document_without_violations_passes() {
    let engine = passing_engine();
    let result = service(&engine)
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();

    assert_eq!(result.outcome, ValidationOutcome::Pass);
    assert_eq!(result.document_type, Some(DocumentType::Ssp));
    assert_eq!(result.ruleset, RulesetKey::Rev4);
    assert!(!result.assertions.is_empty());
    assert!(result.assertions.iter().all(|a| a.passed));
}

#[tokio::test]
async fn test_blocking_failure_fails() {
    let engine = Arc::new(ScriptedRuleEngine::new(vec![
        Assertion::failed("ssp-has-title", "title missing").with_role("error"),
    ]));
    let result = service(&engine)
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Fail);
}

#[tokio::test]
async fn test_policy_decides_blocking_roles() {
    let engine = Arc::new(ScriptedRuleEngine::new(vec![
        Assertion::failed("ssp-has-version", "version missing").with_role("warning"),
    ]));
    let strict = SeverityPolicy {
        blocking_roles: vec!["warning".to_string()],
        missing_role_is_blocking: false,
    };

    let lenient = service(&engine)
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();
    let strict = service(&engine)
        .with_policy(strict)
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();

    assert_eq!(lenient.outcome, ValidationOutcome::Pass);
    assert_eq!(strict.outcome, ValidationOutcome::Fail);
}

#[tokio::test]
async fn test_validation_is_idempotent() {
    let engine = Arc::new(ScriptedRuleEngine::new(vec![
        Assertion::failed("b", "second").with_role("warning"),
        Assertion::passed("a", "first"),
    ]));
    let service = service(&engine);

    let first = service
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();
    let second = service
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.loads(), 1);
}

#[tokio::test]
async fn test_object_document_is_converted_then_evaluated() {
    let engine = passing_engine();
    let result = service(&engine)
        .validate(RawDocument::object(SSP_JSON), None)
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Pass);
    assert_eq!(result.document_type, Some(DocumentType::Ssp));
    assert_eq!(engine.evaluations(), 1);
}

#[tokio::test]
async fn test_conversion_failure_is_malformed_without_evaluation() {
    let engine = passing_engine();
    let result = service(&engine)
        .validate(RawDocument::object(SSP_JSON_WITHOUT_UUID), None)
        .await
        .unwrap();

    assert_eq!(result.outcome, ValidationOutcome::Malformed);
    assert!(result.assertions.is_empty());
    assert_eq!(result.document_type, Some(DocumentType::Ssp));
    assert!(result.diagnostic.unwrap().contains("uuid"));
    assert_eq!(engine.loads(), 0);
    assert_eq!(engine.evaluations(), 0);
}

#[tokio::test]
async fn test_broken_xml_is_malformed() {
    let engine = passing_engine();
    let result = service(&engine)
        .validate(RawDocument::structural("<system-security-plan><metadata>"), None)
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Malformed);
    assert_eq!(engine.evaluations(), 0);
}

#[tokio::test]
async fn test_broken_json_is_malformed() {
    let engine = passing_engine();
    let result = service(&engine)
        .validate(RawDocument::object("{\"system-security-plan\": "), None)
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Malformed);
}

#[tokio::test]
async fn test_declared_type_must_match_root() {
    let engine = passing_engine();
    let result = service(&engine)
        .validate(RawDocument::structural(SSP_XML), Some(DocumentType::Sar))
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Malformed);
    assert_eq!(result.document_type, Some(DocumentType::Sar));
}

#[tokio::test]
async fn test_unknown_root_is_unsupported() {
    let engine = passing_engine();
    let err = service(&engine)
        .validate(
            RawDocument::structural(r#"<catalog xmlns="http://csrc.nist.gov/ns/oscal/1.0"/>"#),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDocumentType { tag } if tag == "catalog"));

    let err = service(&engine)
        .validate(RawDocument::object(r#"{"catalog": {}}"#), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDocumentType { .. }));
}

#[tokio::test]
async fn test_engine_load_failure_is_not_downgraded() {
    let engine = Arc::new(ScriptedRuleEngine::failing_load());
    let err = service(&engine)
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RuleEngine { .. }));
}

#[tokio::test]
async fn test_ruleset_override() {
    let engine = passing_engine();
    let service = service(&engine).with_default_ruleset(RulesetKey::Rev5);
    let result = service
        .validate(RawDocument::structural(SSP_XML), None)
        .await
        .unwrap();
    assert_eq!(result.ruleset, RulesetKey::Rev5);

    let result = service
        .validate_with_ruleset(RawDocument::structural(SSP_XML), None, RulesetKey::Rev4)
        .await
        .unwrap();
    assert_eq!(result.ruleset, RulesetKey::Rev4);
}

#[tokio::test]
async fn test_validate_file_sniffs_content() {
    let engine = passing_engine();
    let store = Arc::new(InMemoryArtifactStore::new());
    store.insert("docs/ssp.json", SSP_JSON);
    store.insert("docs/ssp.xml.json", SSP_XML);
    store.insert("docs/notes.txt", "system security plan");
    let service = service_with(engine.clone(), store);

    let from_json = service.validate_file("docs/ssp.json").await.unwrap();
    assert_eq!(from_json.outcome, ValidationOutcome::Pass);

    let from_xml = service.validate_file("docs/ssp.xml.json").await.unwrap();
    assert_eq!(from_xml.outcome, ValidationOutcome::Pass);

    let unknown = service.validate_file("docs/notes.txt").await.unwrap();
    assert_eq!(unknown.outcome, ValidationOutcome::Malformed);
}

#[tokio::test]
async fn test_validate_file_missing_location_errors() {
    let engine = passing_engine();
    let err = service(&engine).validate_file("docs/missing.xml").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_registry_returns_a_converter_for_every_type() {
    let registry = crate::test_utils::fixtures::stub_registry();
    for document_type in DocumentType::ALL {
        assert_eq!(registry.converter(document_type).document_type(), document_type);
        assert!(registry.resolve(document_type.as_str()).is_ok());
    }
    assert!(matches!(
        registry.resolve("catalog"),
        Err(Error::UnsupportedDocumentType { .. })
    ));
}

#[test]
fn test_registry_rejects_misplaced_converter() {
    let converters: DocumentTypeMap<Arc<dyn JsonToXmlConverter>> =
        DocumentTypeMap::from_fn(|_| Arc::new(StubConverter::new(DocumentType::Ssp)) as Arc<dyn JsonToXmlConverter>);
    assert!(DocumentTypeRegistry::new(converters).is_err());
}

fn native_service(engine: &Arc<ScriptedRuleEngine>) -> OscalService {
    use asap_application::ports::registry::{ConverterProviderConfig, resolve_converter_provider};

    let registry = DocumentTypeRegistry::try_from_fn(|document_type| {
        resolve_converter_provider(&ConverterProviderConfig::new("native", document_type))
            .map_err(Error::internal)
    })
    .unwrap();
    let gateway = Arc::new(RuleEngineGateway::new(
        engine.clone() as Arc<dyn RuleEngine>,
        ArtifactLayout::new("dist"),
    ));
    let store: Arc<dyn ArtifactStore> = Arc::new(InMemoryArtifactStore::new());
    OscalService::new(registry, gateway, store)
}

const NATIVE_SSP_JSON: &str = r##"{
  "system-security-plan": {
    "uuid": "9f2b4ac4-4a1e-4c2e-9f6a-cc1f1c1e9d41",
    "metadata": { "title": "Example SSP", "version": "1.0", "oscal-version": "1.0.4" },
    "import-profile": { "href": "#baseline" },
    "system-characteristics": { "system-name": "Example" },
    "system-implementation": { "users": [] },
    "control-implementation": { "description": "Controls.", "implemented-requirements": [] }
  }
}"##;

#[tokio::test]
async fn test_native_conversion_round_trip_is_accepted_by_gateway() {
    let engine = passing_engine();
    let result = native_service(&engine)
        .validate(RawDocument::object(NATIVE_SSP_JSON), None)
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Pass);
    assert_eq!(engine.evaluations(), 1);
}

#[tokio::test]
async fn test_native_conversion_of_unrepresentable_members_is_malformed() {
    let engine = passing_engine();
    let service = native_service(&engine);

    for (key, value) in [
        ("bad key", serde_json::json!("x")),
        ("remarks-x", serde_json::json!("a\u{1}b")),
    ] {
        let mut json: serde_json::Value = serde_json::from_str(NATIVE_SSP_JSON).unwrap();
        json["system-security-plan"]["system-characteristics"][key] = value;
        let document = json.to_string();

        let result = service
            .validate(RawDocument::object(&document), None)
            .await
            .unwrap();
        assert_eq!(result.outcome, ValidationOutcome::Malformed, "{key}");
        assert!(result.assertions.is_empty());
    }
    assert_eq!(engine.evaluations(), 0);
}

#[tokio::test]
async fn test_structural_document_with_doctype_is_evaluated() {
    let engine = passing_engine();
    let xml = SSP_XML.replacen(
        "?>\n",
        "?>\n<!DOCTYPE system-security-plan [<!ENTITY org \"Example Agency\">]>\n",
        1,
    );
    assert!(xml.contains("<!DOCTYPE"));

    let result = service(&engine)
        .validate(RawDocument::structural(xml), None)
        .await
        .unwrap();
    assert_eq!(result.outcome, ValidationOutcome::Pass);
    assert_eq!(result.document_type, Some(DocumentType::Ssp));
    assert_eq!(engine.evaluations(), 1);
}
