//! XSpec Scenario Flattening
//!
//! XSpec suites nest `x:scenario` elements arbitrarily deep. Documentation
//! needs a flat list: one record per expectation element, labelled with the
//! labels of every enclosing scenario and carrying the nearest context.

use asap_domain::constants::XSPEC_NAMESPACE;
use asap_domain::error::{Error, Result};
use asap_domain::value_objects::ScenarioExpectation;
use roxmltree::{Document, Node};

/// Example document a scenario runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XSpecContext {
    /// Markup written inside `x:context`, verbatim
    Inline(String),
    /// External document referenced by `x:context/@href`
    Href(String),
}

/// One expectation with its scenario path resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XSpecExpectation {
    /// Labels of enclosing scenarios, outermost first, space separated
    pub label: String,
    /// Kind of expectation
    pub expectation: ScenarioExpectation,
    /// Targeted assertion identifier
    pub assertion_id: Option<String>,
    /// Label of the expectation element
    pub assertion_label: Option<String>,
    /// Nearest context in scope
    pub context: Option<XSpecContext>,
}

struct Walk<'s> {
    source: &'s str,
    out: Vec<XSpecExpectation>,
}

fn is_x(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(XSPEC_NAMESPACE)
}

impl Walk<'_> {
    fn context_of(&self, scenario: Node<'_, '_>) -> Option<XSpecContext> {
        let context = scenario.children().find(|c| is_x(*c, "context"))?;
        let first = context.first_child();
        let last = context.last_child();
        if let (Some(first), Some(last)) = (first, last) {
            let inline = self.source[first.range().start..last.range().end].trim();
            if !inline.is_empty() {
                return Some(XSpecContext::Inline(inline.to_string()));
            }
        }
        context
            .attribute("href")
            .map(|href| XSpecContext::Href(href.to_string()))
    }

    fn visit(&mut self, parent: Node<'_, '_>, labels: &[String], context: Option<&XSpecContext>) {
        for child in parent.children().filter(Node::is_element) {
            if is_x(child, "scenario") {
                let mut nested = labels.to_vec();
                if let Some(label) = child.attribute("label").map(str::trim)
                    && !label.is_empty()
                {
                    nested.push(label.to_string());
                }
                let own = self.context_of(child);
                self.visit(child, &nested, own.as_ref().or(context));
            } else if is_x(child, "pending") {
                self.visit(child, labels, context);
            } else if child.tag_name().namespace() == Some(XSPEC_NAMESPACE)
                && let Some(expectation) = ScenarioExpectation::from_element(child.tag_name().name())
            {
                self.out.push(XSpecExpectation {
                    label: labels.join(" "),
                    expectation,
                    assertion_id: child.attribute("id").map(ToString::to_string),
                    assertion_label: child.attribute("label").map(ToString::to_string),
                    context: context.cloned(),
                });
            }
        }
    }
}

/// Parse an XSpec suite into expectations, in source order
pub fn parse_xspec(source: &str) -> Result<Vec<XSpecExpectation>> {
    let doc = Document::parse(source).map_err(|e| Error::xml(e.to_string()))?;
    let root = doc.root_element();
    if !is_x(root, "description") {
        return Err(Error::xml(format!(
            "expected an XSpec description root, found '{}'",
            root.tag_name().name()
        )));
    }
    let mut walk = Walk {
        source,
        out: Vec::new(),
    };
    walk.visit(root, &[], None);
    Ok(walk.out)
}
