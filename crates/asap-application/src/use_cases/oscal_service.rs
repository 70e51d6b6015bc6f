//! Validation Orchestrator
//!
//! Accepts a document in either representation, resolves its type, converts
//! object documents to structural markup, and folds the engine's assertions
//! into a [`ValidationResult`].
//!
//! ## Outcome policy
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Not well-formed XML or JSON | `Malformed` |
//! | Content neither XML nor JSON | `Malformed` |
//! | Converter rejects the object document | `Malformed` |
//! | Unknown OSCAL root | `Err(UnsupportedDocumentType)` |
//! | Rule artifact cannot be loaded or evaluated | `Err(RuleEngine)` |
//! | Blocking assertion failed | `Fail` |
//! | Otherwise | `Pass` |

use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::{
    DocumentType, RawDocument, Representation, RulesetKey, SeverityPolicy, StructuralDocument,
    ValidationResult,
};

use crate::domain_services::parse_document;

use super::document_registry::DocumentTypeRegistry;
use super::rule_engine_gateway::RuleEngineGateway;

/// Root resolution of a structural or object document
enum Resolution<T> {
    Resolved(T),
    Malformed(String),
}

/// Validation orchestrator
#[derive(Debug, Clone)]
pub struct OscalService {
    registry: DocumentTypeRegistry,
    gateway: Arc<RuleEngineGateway>,
    store: Arc<dyn ArtifactStore>,
    policy: SeverityPolicy,
    default_ruleset: RulesetKey,
}

impl OscalService {
    /// Create a service
    pub fn new(
        registry: DocumentTypeRegistry,
        gateway: Arc<RuleEngineGateway>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            registry,
            gateway,
            store,
            policy: SeverityPolicy::default(),
            default_ruleset: RulesetKey::default(),
        }
    }

    /// Use a severity policy other than the default
    #[must_use]
    pub fn with_policy(mut self, policy: SeverityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a default ruleset other than [`RulesetKey::default`]
    #[must_use]
    pub fn with_default_ruleset(mut self, ruleset: RulesetKey) -> Self {
        self.default_ruleset = ruleset;
        self
    }

    /// Ruleset used when callers do not choose one
    pub fn default_ruleset(&self) -> RulesetKey {
        self.default_ruleset
    }

    /// Severity policy applied when folding assertions
    pub fn policy(&self) -> &SeverityPolicy {
        &self.policy
    }

    /// Validate a document against the default ruleset
    pub async fn validate(
        &self,
        document: RawDocument,
        declared_type: Option<DocumentType>,
    ) -> Result<ValidationResult> {
        self.validate_with_ruleset(document, declared_type, self.default_ruleset)
            .await
    }

    /// Validate a document against a chosen ruleset
    pub async fn validate_with_ruleset(
        &self,
        document: RawDocument,
        declared_type: Option<DocumentType>,
        ruleset: RulesetKey,
    ) -> Result<ValidationResult> {
        let structural = match document.representation {
            Representation::Structural => {
                match resolve_structural(&document.content, declared_type)? {
                    Resolution::Resolved(document_type) => {
                        StructuralDocument::new(document_type, document.content)
                    }
                    Resolution::Malformed(diagnostic) => {
                        return Ok(self.malformed(declared_type, ruleset, diagnostic));
                    }
                }
            }
            Representation::Object => {
                let document_type = match resolve_object(&document.content, declared_type)? {
                    Resolution::Resolved(document_type) => document_type,
                    Resolution::Malformed(diagnostic) => {
                        return Ok(self.malformed(declared_type, ruleset, diagnostic));
                    }
                };
                let converter = self.registry.converter(document_type);
                match converter.convert(&document.content).await {
                    Ok(structural) => structural,
                    Err(e) if e.is_document_error() => {
                        return Ok(self.malformed(Some(document_type), ruleset, e.to_string()));
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        let document_type = structural.document_type;
        let assertions = self.gateway.evaluate(ruleset, &structural).await?;
        let result =
            ValidationResult::from_assertions(document_type, ruleset, assertions, &self.policy);
        tracing::info!(
            document_type = %document_type,
            ruleset = %ruleset,
            outcome = %result.outcome,
            assertions = result.assertions.len(),
            failures = result.failure_count(),
            "validation finished"
        );
        Ok(result)
    }

    /// Validate text whose representation is detected from its content
    ///
    /// Content that is neither XML nor JSON is reported as malformed.
    pub async fn validate_content(
        &self,
        content: &str,
        declared_type: Option<DocumentType>,
        ruleset: Option<RulesetKey>,
    ) -> Result<ValidationResult> {
        let ruleset = ruleset.unwrap_or(self.default_ruleset);
        match RawDocument::sniff(content) {
            Some(document) => {
                self.validate_with_ruleset(document, declared_type, ruleset)
                    .await
            }
            None => Ok(self.malformed(
                declared_type,
                ruleset,
                "content is neither XML nor JSON",
            )),
        }
    }

    /// Read a document from a location and validate it
    pub async fn validate_file(&self, location: &str) -> Result<ValidationResult> {
        self.validate_file_with(location, None, None).await
    }

    /// Read a document from a location and validate it with overrides
    pub async fn validate_file_with(
        &self,
        location: &str,
        declared_type: Option<DocumentType>,
        ruleset: Option<RulesetKey>,
    ) -> Result<ValidationResult> {
        tracing::debug!(location, "reading document");
        let content = self.store.read_to_string(location).await?;
        self.validate_content(&content, declared_type, ruleset).await
    }

    fn malformed(
        &self,
        document_type: Option<DocumentType>,
        ruleset: RulesetKey,
        diagnostic: impl Into<String>,
    ) -> ValidationResult {
        let result = ValidationResult::malformed(document_type, ruleset, diagnostic);
        tracing::warn!(
            ruleset = %ruleset,
            diagnostic = result.diagnostic.as_deref().unwrap_or_default(),
            "document is malformed"
        );
        result
    }
}

fn resolve_structural(
    content: &str,
    declared_type: Option<DocumentType>,
) -> Result<Resolution<DocumentType>> {
    let parsed = match parse_document(content) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Ok(Resolution::Malformed(format!(
                "document is not well-formed XML: {e}"
            )));
        }
    };
    let root = parsed.root_element().tag_name().name();
    resolve_root(root, declared_type)
}

fn resolve_object(
    content: &str,
    declared_type: Option<DocumentType>,
) -> Result<Resolution<DocumentType>> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            return Ok(Resolution::Malformed(format!(
                "document is not well-formed JSON: {e}"
            )));
        }
    };
    let Some(members) = value.as_object() else {
        return Ok(Resolution::Malformed(
            "document root is not a JSON object".to_string(),
        ));
    };
    if let Some(document_type) = declared_type {
        return Ok(Resolution::Resolved(document_type));
    }
    let mut keys = members.keys().filter(|k| k.as_str() != "$schema");
    match (keys.next(), keys.next()) {
        (Some(root), None) => resolve_root(root, None),
        (None, _) => Ok(Resolution::Malformed(
            "document has no OSCAL root member".to_string(),
        )),
        (Some(_), Some(_)) => Ok(Resolution::Malformed(
            "document has more than one root member".to_string(),
        )),
    }
}

fn resolve_root(
    root: &str,
    declared_type: Option<DocumentType>,
) -> Result<Resolution<DocumentType>> {
    let detected = DocumentType::from_root_element(root);
    match (declared_type, detected) {
        (Some(declared), Some(detected)) if declared != detected => {
            Ok(Resolution::Malformed(format!(
                "document declared as {declared} has root '{root}'"
            )))
        }
        (_, Some(detected)) => Ok(Resolution::Resolved(detected)),
        (Some(declared), None) => Ok(Resolution::Malformed(format!(
            "document declared as {declared} has root '{root}', expected '{}'",
            declared.root_element()
        ))),
        (None, None) => Err(Error::unsupported_document_type(root)),
    }
}
