//! SVRL Report Decoding
//!
//! Compiled Schematron writes a Schematron Validation Report Language
//! document. Each `svrl:failed-assert` becomes a failing assertion and each
//! `svrl:successful-report` a passing one, in report order.

use asap_domain::constants::SVRL_NAMESPACE;
use asap_domain::error::{Error, Result};
use asap_domain::value_objects::Assertion;
use roxmltree::{Document, Node};

fn is_svrl(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(SVRL_NAMESPACE)
}

fn message(node: Node<'_, '_>) -> String {
    node.children()
        .find(|c| is_svrl(*c, "text"))
        .map(|text| {
            text.descendants()
                .filter(Node::is_text)
                .filter_map(|t| t.text())
                .collect::<String>()
        })
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode an SVRL report into assertions
pub fn parse_svrl(report: &str) -> Result<Vec<Assertion>> {
    let doc = Document::parse(report).map_err(|e| Error::xml(format!("invalid SVRL: {e}")))?;
    let root = doc.root_element();
    if !is_svrl(root, "schematron-output") {
        return Err(Error::xml(format!(
            "expected svrl:schematron-output, found '{}'",
            root.tag_name().name()
        )));
    }

    Ok(root
        .descendants()
        .filter_map(|node| {
            let passed = if is_svrl(node, "failed-assert") {
                false
            } else if is_svrl(node, "successful-report") {
                true
            } else {
                return None;
            };
            let test = node.attribute("test");
            let id = node.attribute("id").or(test).unwrap_or_default();
            let mut assertion = if passed {
                Assertion::passed(id, message(node))
            } else {
                Assertion::failed(id, message(node))
            };
            assertion.location = node.attribute("location").unwrap_or_default().to_string();
            assertion.role = node.attribute("role").map(ToString::to_string);
            assertion.test = test.map(ToString::to_string);
            Some(assertion)
        })
        .collect())
}
