//! Hash Routing
//!
//! The documentation surface addresses its views with hash URLs. Routes and
//! URLs form a bijection: [`get_url`] and [`get_route`] are inverses for every
//! [`Route`], and any other URL resolves to [`RouteLookup::NotFound`].
//!
//! Matching walks [`ROUTE_TABLE`] in declared order; the first pattern that
//! matches wins.

use asap_domain::{DocumentType, RulesetKey};
use serde::{Deserialize, Serialize};

/// A view of the documentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Route {
    /// Landing page
    Home,
    /// Rule overview for every document type
    DocumentSummary {
        /// Ruleset being browsed
        ruleset: RulesetKey,
    },
    /// POA&M rules
    #[serde(rename = "DocumentPOAM")]
    DocumentPoam {
        /// Ruleset being browsed
        ruleset: RulesetKey,
    },
    /// SAP rules
    #[serde(rename = "DocumentSAP")]
    DocumentSap {
        /// Ruleset being browsed
        ruleset: RulesetKey,
    },
    /// SAR rules
    #[serde(rename = "DocumentSAR")]
    DocumentSar {
        /// Ruleset being browsed
        ruleset: RulesetKey,
    },
    /// SSP rules
    #[serde(rename = "DocumentSSP")]
    DocumentSsp {
        /// Ruleset being browsed
        ruleset: RulesetKey,
    },
    /// Developer documentation
    Developers,
}

impl Route {
    /// Route showing the rules of one document type
    pub fn document(document_type: DocumentType, ruleset: RulesetKey) -> Self {
        match document_type {
            DocumentType::Poam => Self::DocumentPoam { ruleset },
            DocumentType::Sap => Self::DocumentSap { ruleset },
            DocumentType::Sar => Self::DocumentSar { ruleset },
            DocumentType::Ssp => Self::DocumentSsp { ruleset },
        }
    }

    /// Document type shown by a per-document route
    pub fn document_type(self) -> Option<DocumentType> {
        match self {
            Self::DocumentPoam { .. } => Some(DocumentType::Poam),
            Self::DocumentSap { .. } => Some(DocumentType::Sap),
            Self::DocumentSar { .. } => Some(DocumentType::Sar),
            Self::DocumentSsp { .. } => Some(DocumentType::Ssp),
            Self::Home | Self::DocumentSummary { .. } | Self::Developers => None,
        }
    }

    /// Ruleset carried by the route
    pub fn ruleset(self) -> Option<RulesetKey> {
        match self {
            Self::DocumentSummary { ruleset }
            | Self::DocumentPoam { ruleset }
            | Self::DocumentSap { ruleset }
            | Self::DocumentSar { ruleset }
            | Self::DocumentSsp { ruleset } => Some(ruleset),
            Self::Home | Self::Developers => None,
        }
    }
}

/// Outcome of resolving a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteLookup {
    /// A declared route matched
    Found(Route),
    /// No declared route matched; rendered as a not-found view
    NotFound,
}

impl RouteLookup {
    /// The matched route, if any
    pub fn route(self) -> Option<Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound => None,
        }
    }

    /// Whether the URL matched nothing
    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Parameters captured from `:name` pattern segments
#[derive(Debug, Default)]
pub struct RouteParams<'u> {
    captures: Vec<(&'static str, &'u str)>,
}

impl<'u> RouteParams<'u> {
    /// Captured value of a parameter
    pub fn get(&self, name: &str) -> Option<&'u str> {
        self.captures
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    fn ruleset(&self) -> Option<RulesetKey> {
        self.get("ruleset")?.parse().ok()
    }
}

/// Builds a route from captured parameters; `None` rejects the match
pub type RouteConstructor = fn(&RouteParams<'_>) -> Option<Route>;

fn home(_: &RouteParams<'_>) -> Option<Route> {
    Some(Route::Home)
}

fn document_summary(params: &RouteParams<'_>) -> Option<Route> {
    Some(Route::DocumentSummary {
        ruleset: params.ruleset()?,
    })
}

fn document_poam(params: &RouteParams<'_>) -> Option<Route> {
    Some(Route::document(DocumentType::Poam, params.ruleset()?))
}

fn document_sap(params: &RouteParams<'_>) -> Option<Route> {
    Some(Route::document(DocumentType::Sap, params.ruleset()?))
}

fn document_sar(params: &RouteParams<'_>) -> Option<Route> {
    Some(Route::document(DocumentType::Sar, params.ruleset()?))
}

fn document_ssp(params: &RouteParams<'_>) -> Option<Route> {
    Some(Route::document(DocumentType::Ssp, params.ruleset()?))
}

fn developers(_: &RouteParams<'_>) -> Option<Route> {
    Some(Route::Developers)
}

/// Declared routes, matched in order
pub const ROUTE_TABLE: &[(&str, RouteConstructor)] = &[
    ("#/", home),
    ("#/:ruleset/documents", document_summary),
    (
        "#/:ruleset/documents/plan-of-action-and-milestones",
        document_poam,
    ),
    ("#/:ruleset/documents/security-assessment-plan", document_sap),
    ("#/:ruleset/documents/security-assessment-report", document_sar),
    ("#/:ruleset/documents/system-security-plan", document_ssp),
    ("#/developers", developers),
];

/// Match a URL against a pattern, capturing `:name` segments
///
/// A single trailing slash on the URL is ignored except for the root.
fn match_pattern<'u>(pattern: &'static str, url: &'u str) -> Option<RouteParams<'u>> {
    let url = match url.strip_suffix('/') {
        Some(stripped) if url != "#/" => stripped,
        _ => url,
    };
    let mut pattern_segments = pattern.split('/');
    let mut url_segments = url.split('/');
    let mut params = RouteParams::default();
    loop {
        match (pattern_segments.next(), url_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.captures.push((name, actual));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Resolve a URL to a route
pub fn get_route(url: &str) -> RouteLookup {
    ROUTE_TABLE
        .iter()
        .find_map(|&(pattern, construct)| construct(&match_pattern(pattern, url)?))
        .map_or(RouteLookup::NotFound, RouteLookup::Found)
}

fn document_url(ruleset: RulesetKey, document_type: DocumentType) -> String {
    format!("#/{ruleset}/documents/{}", document_type.slug())
}

/// URL of a route
pub fn get_url(route: Route) -> String {
    match route {
        Route::Home => "#/".to_string(),
        Route::DocumentSummary { ruleset } => format!("#/{ruleset}/documents"),
        Route::DocumentPoam { ruleset } => document_url(ruleset, DocumentType::Poam),
        Route::DocumentSap { ruleset } => document_url(ruleset, DocumentType::Sap),
        Route::DocumentSar { ruleset } => document_url(ruleset, DocumentType::Sar),
        Route::DocumentSsp { ruleset } => document_url(ruleset, DocumentType::Ssp),
        Route::Developers => "#/developers".to_string(),
    }
}

/// One step of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    /// Display text
    pub text: String,
    /// Link target, absent for the current page
    pub link_url: Option<String>,
}

fn crumb(text: &str, target: Route, current: Route) -> Breadcrumb {
    Breadcrumb {
        text: text.to_string(),
        link_url: (target != current).then(|| get_url(target)),
    }
}

/// Breadcrumb trail from the home page to a route
pub fn breadcrumbs(route: Route) -> Vec<Breadcrumb> {
    let mut trail = vec![crumb("Home", Route::Home, route)];
    match route {
        Route::Home => {}
        Route::Developers => trail.push(crumb("Developer documentation", route, route)),
        Route::DocumentSummary { ruleset } => {
            trail.push(crumb("Document Rules", Route::DocumentSummary { ruleset }, route));
        }
        Route::DocumentPoam { ruleset }
        | Route::DocumentSap { ruleset }
        | Route::DocumentSar { ruleset }
        | Route::DocumentSsp { ruleset } => {
            trail.push(crumb("Document Rules", Route::DocumentSummary { ruleset }, route));
            if let Some(document_type) = route.document_type() {
                trail.push(crumb(document_type.title(), route, route));
            }
        }
    }
    trail
}
