//! Scenario Summarizer
//!
//! Mines a document type's XSpec suite for example scenarios. Order matches
//! the suite, since the documentation narrates scenarios in that order.

use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::{DocumentType, ScenarioSummary, SummaryLayout};

use super::output::{read_source, render_json, write_outputs};
use crate::domain_services::xml_format::format_xml;
use crate::domain_services::xspec::{XSpecContext, parse_xspec};

/// Generates `xspec-summary-<type>.json`
#[derive(Debug, Clone)]
pub struct XSpecScenarioSummaryGenerator {
    store: Arc<dyn ArtifactStore>,
    layout: SummaryLayout,
}

impl XSpecScenarioSummaryGenerator {
    /// Create a generator reading and writing through `store`
    pub fn new(store: Arc<dyn ArtifactStore>, layout: SummaryLayout) -> Self {
        Self { store, layout }
    }

    /// Build the scenario summaries of one document type without writing them
    pub async fn summarize(&self, document_type: DocumentType) -> Result<Vec<ScenarioSummary>> {
        let location = self.layout.xspec_source(document_type);
        let source = read_source(&self.store, &location).await?;
        summaries_from_source(&location, &source)
    }

    /// Build and write the scenario summaries of one document type
    pub async fn generate(&self, document_type: DocumentType) -> Result<Vec<ScenarioSummary>> {
        let summaries = self.summarize(document_type).await?;
        let location = self.layout.scenario_summary_output(document_type);
        let bytes = render_json(&location, &summaries)?;
        write_outputs(&self.store, vec![(location, bytes)]).await?;
        tracing::info!(
            document_type = %document_type,
            scenarios = summaries.len(),
            "scenario summaries generated"
        );
        Ok(summaries)
    }
}

fn summaries_from_source(location: &str, source: &str) -> Result<Vec<ScenarioSummary>> {
    let to_error = |e: Error| Error::summary_generation(location, e.to_string());
    parse_xspec(source)
        .map_err(to_error)?
        .into_iter()
        .map(|expectation| {
            let context = match expectation.context {
                Some(XSpecContext::Inline(markup)) => format_xml(&markup).map_err(to_error)?,
                Some(XSpecContext::Href(href)) => href,
                None => String::new(),
            };
            Ok(ScenarioSummary {
                label: expectation.label,
                expectation: expectation.expectation,
                assertion_id: expectation.assertion_id,
                assertion_label: expectation.assertion_label,
                context,
            })
        })
        .collect()
}
