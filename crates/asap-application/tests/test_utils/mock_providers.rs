//! Scripted implementations of the domain ports

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use asap_domain::constants::OSCAL_NAMESPACE;
use asap_domain::error::{Error, Result};
use asap_domain::ports::{ArtifactStore, EvaluationInput, JsonToXmlConverter, RuleEngine};
use asap_domain::value_objects::{
    Assertion, CompiledRules, DocumentType, ReferenceData, RuleArtifactKey, StructuralDocument,
};
use async_trait::async_trait;

/// Rule engine returning a fixed assertion list
#[derive(Debug, Default)]
pub struct ScriptedRuleEngine {
    assertions: Vec<Assertion>,
    load_delay: Option<Duration>,
    fail_load: bool,
    loads: AtomicUsize,
    evaluations: AtomicUsize,
    last_reference: Mutex<Option<ReferenceData>>,
}

impl ScriptedRuleEngine {
    pub fn new(assertions: Vec<Assertion>) -> Self {
        Self {
            assertions,
            ..Default::default()
        }
    }

    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Default::default()
        }
    }

    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = Some(delay);
        self
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    pub fn last_reference(&self) -> Option<ReferenceData> {
        self.last_reference.lock().expect("reference lock").clone()
    }
}

#[async_trait]
impl RuleEngine for ScriptedRuleEngine {
    async fn load(&self, key: &RuleArtifactKey) -> Result<CompiledRules> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.load_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_load {
            return Err(Error::rule_engine(format!("artifact for {key} unavailable")));
        }
        Ok(CompiledRules {
            key: *key,
            location: format!("memory://rules/{}/{}", key.ruleset, key.document_type),
            digest: "00".repeat(32),
            local_path: PathBuf::new(),
        })
    }

    async fn evaluate(
        &self,
        _rules: &CompiledRules,
        input: &EvaluationInput<'_>,
    ) -> Result<Vec<Assertion>> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        *self.last_reference.lock().expect("reference lock") = Some(input.reference.clone());
        Ok(self.assertions.clone())
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Converter that wraps the root member in an empty OSCAL element
///
/// Rejects documents lacking a top-level `uuid`.
#[derive(Debug)]
pub struct StubConverter {
    document_type: DocumentType,
    conversions: AtomicUsize,
}

impl StubConverter {
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            conversions: AtomicUsize::new(0),
        }
    }

    pub fn conversions(&self) -> usize {
        self.conversions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonToXmlConverter for StubConverter {
    fn document_type(&self) -> DocumentType {
        self.document_type
    }

    async fn convert(&self, json: &str) -> Result<StructuralDocument> {
        self.conversions.fetch_add(1, Ordering::SeqCst);
        let value: serde_json::Value = serde_json::from_str(json)?;
        let root = self.document_type.root_element();
        let uuid = value
            .get(root)
            .and_then(|body| body.get("uuid"))
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::conversion(self.document_type, "missing required member 'uuid'"))?;
        Ok(StructuralDocument::new(
            self.document_type,
            format!(r#"<{root} xmlns="{OSCAL_NAMESPACE}" uuid="{uuid}"/>"#),
        ))
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Artifact store backed by a map
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
    writes: AtomicUsize,
    failing_location: Mutex<Option<String>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, location: &str, contents: &str) {
        self.entries
            .lock()
            .expect("store lock")
            .insert(location.to_string(), contents.as_bytes().to_vec());
    }

    pub fn get(&self, location: &str) -> Option<Vec<u8>> {
        self.entries.lock().expect("store lock").get(location).cloned()
    }

    pub fn get_string(&self, location: &str) -> Option<String> {
        self.get(location)
            .map(|bytes| String::from_utf8(bytes).expect("utf-8 contents"))
    }

    pub fn contains(&self, location: &str) -> bool {
        self.entries.lock().expect("store lock").contains_key(location)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every write to `location` fail with an I/O error
    pub fn fail_writes_to(&self, location: &str) {
        *self.failing_location.lock().expect("store lock") = Some(location.to_string());
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn read(&self, location: &str) -> Result<Vec<u8>> {
        self.get(location).ok_or_else(|| Error::not_found(location))
    }

    async fn write(&self, location: &str, contents: &[u8]) -> Result<()> {
        if self.failing_location.lock().expect("store lock").as_deref() == Some(location) {
            return Err(Error::io(format!("disk full writing {location}")));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .expect("store lock")
            .insert(location.to_string(), contents.to_vec());
        Ok(())
    }

    async fn remove(&self, location: &str) -> Result<()> {
        self.entries.lock().expect("store lock").remove(location);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
