//! Schematron Rule Extraction
//!
//! Collects every `sch:assert` and `sch:report` in document order together
//! with the context of its enclosing rule and the pattern it belongs to.

use asap_domain::constants::SCHEMATRON_NAMESPACE;
use asap_domain::error::{Error, Result};
use asap_domain::value_objects::RuleSummary;
use roxmltree::{Document, Node};

/// One assertion or report read from a Schematron source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchematronCheck {
    /// Rule identifier
    pub id: String,
    /// Message with whitespace collapsed and embedded expressions in braces
    pub message: String,
    /// Declared role
    pub role: Option<String>,
    /// `true` for `sch:report`
    pub is_report: bool,
    /// Context of the enclosing `sch:rule`
    pub context: String,
    /// Test expression
    pub test: String,
    /// Identifier of the enclosing pattern
    pub pattern_id: Option<String>,
    /// Title of the enclosing pattern
    pub pattern_title: Option<String>,
    /// Reference URL
    pub see: Option<String>,
}

impl SchematronCheck {
    /// Convert into the summary record written to rule catalogs
    pub fn into_summary(self) -> RuleSummary {
        RuleSummary {
            id: self.id,
            message: self.message,
            role: self.role,
            is_report: self.is_report,
            context: self.context,
            test: self.test,
            pattern: self.pattern_id,
            see: self.see,
        }
    }
}

fn is_sch(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(SCHEMATRON_NAMESPACE)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn message_text(node: Node<'_, '_>, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(child.text().unwrap_or_default());
        } else if is_sch(child, "value-of") {
            out.push('{');
            out.push_str(child.attribute("select").unwrap_or_default());
            out.push('}');
        } else if is_sch(child, "name") {
            out.push('{');
            out.push_str(child.attribute("path").unwrap_or("name()"));
            out.push('}');
        } else if child.is_element() {
            message_text(child, out);
        }
    }
}

fn pattern_title(pattern: Node<'_, '_>) -> Option<String> {
    pattern
        .children()
        .find(|c| is_sch(*c, "title"))
        .and_then(|title| title.text())
        .map(collapse_whitespace)
        .filter(|t| !t.is_empty())
}

/// Parse a Schematron source into its checks, in document order
///
/// Fails with `Error::Xml` when the source is not well-formed, is not a
/// Schematron schema, or contains a check without an `id`.
pub fn parse_schematron(source: &str) -> Result<Vec<SchematronCheck>> {
    let doc = Document::parse(source).map_err(|e| Error::xml(e.to_string()))?;
    let root = doc.root_element();
    if !is_sch(root, "schema") {
        return Err(Error::xml(format!(
            "expected a Schematron schema root, found '{}'",
            root.tag_name().name()
        )));
    }

    let mut checks = Vec::new();
    for node in root
        .descendants()
        .filter(|n| is_sch(*n, "assert") || is_sch(*n, "report"))
    {
        let Some(id) = node.attribute("id") else {
            let pos = doc.text_pos_at(node.range().start);
            return Err(Error::xml(format!(
                "{} at line {} has no id",
                node.tag_name().name(),
                pos.row
            )));
        };
        let rule = node.ancestors().find(|a| is_sch(*a, "rule"));
        let pattern = node.ancestors().find(|a| is_sch(*a, "pattern"));

        let mut message = String::new();
        message_text(node, &mut message);

        checks.push(SchematronCheck {
            id: id.to_string(),
            message: collapse_whitespace(&message),
            role: node.attribute("role").map(ToString::to_string),
            is_report: is_sch(node, "report"),
            context: rule
                .and_then(|r| r.attribute("context"))
                .unwrap_or_default()
                .to_string(),
            test: node.attribute("test").unwrap_or_default().to_string(),
            pattern_id: pattern.and_then(|p| p.attribute("id")).map(ToString::to_string),
            pattern_title: pattern.and_then(pattern_title),
            see: node.attribute("see").map(ToString::to_string),
        });
    }
    Ok(checks)
}
