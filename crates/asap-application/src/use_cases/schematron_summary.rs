//! Rule Catalog Summarizer
//!
//! Flattens each document type's Schematron source into a JSON object keyed
//! by rule identifier. All four catalogs are parsed before any is written.

use std::collections::BTreeMap;
use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::{
    DocumentType, DocumentTypeMap, RuleCatalogSummary, SummaryLayout,
};

use super::output::{read_source, read_sources, render_json, write_outputs};
use crate::domain_services::schematron::parse_schematron;

/// Generates `<type>.json` rule catalogs
#[derive(Debug, Clone)]
pub struct SchematronSummary {
    store: Arc<dyn ArtifactStore>,
    layout: SummaryLayout,
}

impl SchematronSummary {
    /// Create a summarizer reading and writing through `store`
    pub fn new(store: Arc<dyn ArtifactStore>, layout: SummaryLayout) -> Self {
        Self { store, layout }
    }

    /// Build the catalog for one document type without writing it
    pub async fn summarize(&self, document_type: DocumentType) -> Result<RuleCatalogSummary> {
        let location = self.layout.schematron_source(document_type);
        let source = read_source(&self.store, &location).await?;
        catalog_from_source(document_type, &location, &source)
    }

    /// Build and write the catalogs of every document type
    ///
    /// Prior outputs are replaced. A parse failure in any source aborts the
    /// whole run before anything is written.
    pub async fn generate_all_summaries(&self) -> Result<DocumentTypeMap<RuleCatalogSummary>> {
        let sources =
            read_sources(&self.store, |t| self.layout.schematron_source(t)).await?;

        let mut catalogs = Vec::with_capacity(DocumentType::ALL.len());
        for (document_type, (location, source)) in sources.iter() {
            catalogs.push(catalog_from_source(document_type, location, source)?);
        }
        let catalogs = DocumentTypeMap::from_ordered(catalogs)?;

        let mut outputs = Vec::with_capacity(DocumentType::ALL.len());
        for (document_type, catalog) in catalogs.iter() {
            let location = self.layout.rule_catalog_output(document_type);
            let bytes = render_json(&location, &catalog.rules)?;
            outputs.push((location, bytes));
        }
        write_outputs(&self.store, outputs).await?;
        Ok(catalogs)
    }
}

fn catalog_from_source(
    document_type: DocumentType,
    location: &str,
    source: &str,
) -> Result<RuleCatalogSummary> {
    let checks =
        parse_schematron(source).map_err(|e| Error::summary_generation(location, e.to_string()))?;

    let mut rules = BTreeMap::new();
    for check in checks {
        let id = check.id.clone();
        if rules.insert(id.clone(), check.into_summary()).is_some() {
            return Err(Error::summary_generation(
                location,
                format!("duplicate rule id '{id}'"),
            ));
        }
    }
    tracing::debug!(document_type = %document_type, rules = rules.len(), "rule catalog built");
    Ok(RuleCatalogSummary::new(document_type, rules))
}
