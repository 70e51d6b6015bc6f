//! Documentation Catalog
//!
//! The documentation surface reads the generated summaries rather than the
//! rule sources. Every fetch loads all four document types concurrently.

use std::collections::BTreeMap;
use std::sync::Arc;

use asap_domain::error::Result;
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::{
    AssertionView, DocumentType, DocumentTypeMap, RuleSummary, ScenarioSummary, SummaryLayout,
};
use futures::future::try_join_all;
use serde::de::DeserializeOwned;

/// Reads generated summaries for display
#[derive(Debug, Clone)]
pub struct DocumentationCatalog {
    store: Arc<dyn ArtifactStore>,
    layout: SummaryLayout,
}

impl DocumentationCatalog {
    /// Create a catalog reading through `store`
    pub fn new(store: Arc<dyn ArtifactStore>, layout: SummaryLayout) -> Self {
        Self { store, layout }
    }

    /// Rule catalogs keyed by rule identifier
    pub async fn rule_catalogs(&self) -> Result<DocumentTypeMap<BTreeMap<String, RuleSummary>>> {
        self.load_all(|t| self.layout.rule_catalog_output(t)).await
    }

    /// Assertion views
    pub async fn assertion_views(&self) -> Result<DocumentTypeMap<Vec<AssertionView>>> {
        self.load_all(|t| self.layout.assertion_view_output(t)).await
    }

    /// Scenario summaries
    pub async fn scenario_summaries(&self) -> Result<DocumentTypeMap<Vec<ScenarioSummary>>> {
        self.load_all(|t| self.layout.scenario_summary_output(t)).await
    }

    async fn load_all<T: DeserializeOwned>(
        &self,
        location: impl Fn(DocumentType) -> String,
    ) -> Result<DocumentTypeMap<T>> {
        let loads = DocumentType::ALL.into_iter().map(|document_type| {
            let location = location(document_type);
            async move {
                let bytes = self.store.read(&location).await?;
                Ok::<T, asap_domain::Error>(serde_json::from_slice(&bytes)?)
            }
        });
        DocumentTypeMap::from_ordered(try_join_all(loads).await?)
    }
}
