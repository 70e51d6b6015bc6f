//! Unit tests for representation sniffing

use asap_domain::{RawDocument, Representation};

#[test]
fn test_sniff_xml() {
    assert_eq!(
        Representation::sniff("<?xml version=\"1.0\"?><system-security-plan/>"),
        Some(Representation::Structural)
    );
}

#[test]
fn test_sniff_json_after_whitespace_and_bom() {
    assert_eq!(
        Representation::sniff("\u{feff}\n   {\"system-security-plan\": {}}"),
        Some(Representation::Object)
    );
}

#[test]
fn test_sniff_unrecognized_content() {
    assert_eq!(Representation::sniff("system-security-plan: {}"), None);
    assert_eq!(Representation::sniff("   "), None);
    assert_eq!(Representation::sniff(""), None);
}

#[test]
fn test_raw_document_sniff_keeps_content() {
    let doc = RawDocument::sniff("  <assessment-plan/>").unwrap();
    assert_eq!(doc.representation, Representation::Structural);
    assert_eq!(doc.content, "  <assessment-plan/>");
}
