//! Assertion View Generator
//!
//! Groups a document type's assertions the ways the documentation front-end
//! lists them: by Schematron pattern and by severity.

use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::{
    AssertionGroup, AssertionView, DocumentType, DocumentTypeMap, Severity, SummaryLayout,
};

use super::output::{read_sources, render_json, write_outputs};
use crate::domain_services::schematron::{SchematronCheck, parse_schematron};

/// Title of the view grouping by pattern
pub const VIEW_BY_PATTERN: &str = "Assertions by pattern";
/// Title of the view grouping by severity
pub const VIEW_BY_SEVERITY: &str = "Assertions by severity";
/// Group title for checks outside any titled or identified pattern
pub const UNGROUPED: &str = "Ungrouped";

const SEVERITY_ORDER: [Severity; 5] = [
    Severity::Fatal,
    Severity::Error,
    Severity::Warning,
    Severity::Information,
    Severity::Unspecified,
];

/// Generates `assertion-views-<type>.json`
#[derive(Debug, Clone)]
pub struct AssertionViewGenerator {
    store: Arc<dyn ArtifactStore>,
    layout: SummaryLayout,
}

impl AssertionViewGenerator {
    /// Create a generator reading and writing through `store`
    pub fn new(store: Arc<dyn ArtifactStore>, layout: SummaryLayout) -> Self {
        Self { store, layout }
    }

    /// Build and write the views of every document type
    pub async fn generate_all(&self) -> Result<DocumentTypeMap<Vec<AssertionView>>> {
        let sources =
            read_sources(&self.store, |t| self.layout.schematron_source(t)).await?;

        let mut views = Vec::with_capacity(DocumentType::ALL.len());
        for (_, (location, source)) in sources.iter() {
            let checks = parse_schematron(source)
                .map_err(|e| Error::summary_generation(location, e.to_string()))?;
            views.push(build_views(&checks));
        }
        let views = DocumentTypeMap::from_ordered(views)?;

        let mut outputs = Vec::with_capacity(DocumentType::ALL.len());
        for (document_type, document_views) in views.iter() {
            let location = self.layout.assertion_view_output(document_type);
            let bytes = render_json(&location, document_views)?;
            outputs.push((location, bytes));
        }
        write_outputs(&self.store, outputs).await?;
        Ok(views)
    }
}

fn push_member(groups: &mut Vec<AssertionGroup>, title: &str, id: &str) {
    match groups.iter_mut().find(|g| g.title == title) {
        Some(group) => group.assertion_ids.push(id.to_string()),
        None => groups.push(AssertionGroup {
            title: title.to_string(),
            assertion_ids: vec![id.to_string()],
        }),
    }
}

/// Build the views for a list of checks in source order
pub fn build_views(checks: &[SchematronCheck]) -> Vec<AssertionView> {
    let mut by_pattern = Vec::new();
    for check in checks {
        let title = check
            .pattern_title
            .as_deref()
            .or(check.pattern_id.as_deref())
            .unwrap_or(UNGROUPED);
        push_member(&mut by_pattern, title, &check.id);
    }

    let by_severity = SEVERITY_ORDER
        .into_iter()
        .filter_map(|severity| {
            let assertion_ids: Vec<String> = checks
                .iter()
                .filter(|c| Severity::from_role(c.role.as_deref()) == severity)
                .map(|c| c.id.clone())
                .collect();
            (!assertion_ids.is_empty()).then(|| AssertionGroup {
                title: severity.title().to_string(),
                assertion_ids,
            })
        })
        .collect();

    vec![
        AssertionView {
            title: VIEW_BY_PATTERN.to_string(),
            groups: by_pattern,
        },
        AssertionView {
            title: VIEW_BY_SEVERITY.to_string(),
            groups: by_severity,
        },
    ]
}
