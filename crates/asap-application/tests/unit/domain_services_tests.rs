//! Tests for Schematron, XSpec and XML formatting services

use asap_application::domain_services::{
    XSpecContext, format_xml, parse_document, parse_schematron, parse_xspec,
};
use asap_application::use_cases::assertion_views::build_views;
use asap_domain::ScenarioExpectation;

use crate::test_utils::fixtures::schematron;

#[test]
fn test_format_xml_indents_nested_elements() {
    let formatted = format_xml("<a><b><c/></b><d>text</d></a>").unwrap();
    assert_eq!(formatted, "<a>\n  <b>\n    <c/>\n  </b>\n  <d>text</d>\n</a>");
}

#[test]
fn test_format_xml_accepts_fragments() {
    let formatted = format_xml("<a/>\n   <b/>").unwrap();
    assert_eq!(formatted, "<a/>\n<b/>");
}

#[test]
fn test_parse_document_expands_doctype_entities() {
    let doc = parse_document(
        "<!DOCTYPE a [<!ENTITY who \"agency\">]>\n<a><b>&who;</b></a>",
    )
    .unwrap();
    let b = doc.root_element().first_element_child().unwrap();
    assert_eq!(b.text(), Some("agency"));
    assert!(parse_document("<a><b></a>").is_err());
}

#[test]
fn test_format_xml_rejects_mismatched_tags() {
    assert!(format_xml("<a></b>").is_err());
}

#[test]
fn test_schematron_check_without_id_is_rejected() {
    let source = schematron(
        r#"<sch:pattern><sch:rule context="/"><sch:assert test="true()">no id</sch:assert></sch:rule></sch:pattern>"#,
    );
    let err = parse_schematron(&source).unwrap_err();
    assert!(err.to_string().contains("has no id"));
}

#[test]
fn test_schematron_requires_schema_root() {
    assert!(parse_schematron("<schema/>").is_err());
}

#[test]
fn test_schematron_checks_outside_patterns_are_ungrouped() {
    let source = schematron(
        r#"<sch:rule context="/"><sch:assert id="loose" test="true()">x</sch:assert></sch:rule>"#,
    );
    let checks = parse_schematron(&source).unwrap();
    assert_eq!(checks[0].pattern_id, None);
    let views = build_views(&checks);
    assert_eq!(views[0].groups[0].title, "Ungrouped");
    assert_eq!(views[1].groups[0].title, "Unspecified");
}

#[test]
fn test_xspec_pending_scenarios_are_included() {
    let source = r#"<x:description xmlns:x="http://www.jenitennison.com/xslt/xspec">
      <x:pending label="later">
        <x:scenario label="outer">
          <x:context><doc/></x:context>
          <x:scenario label="inner">
            <x:expect-not-report id="r1"/>
          </x:scenario>
        </x:scenario>
      </x:pending>
    </x:description>"#;
    let expectations = parse_xspec(source).unwrap();
    assert_eq!(expectations.len(), 1);
    assert_eq!(expectations[0].label, "outer inner");
    assert_eq!(expectations[0].expectation, ScenarioExpectation::NotReport);
    assert_eq!(
        expectations[0].context,
        Some(XSpecContext::Inline("<doc/>".to_string()))
    );
}

#[test]
fn test_xspec_nearest_context_wins() {
    let source = r#"<x:description xmlns:x="http://www.jenitennison.com/xslt/xspec">
      <x:scenario label="outer">
        <x:context><outer/></x:context>
        <x:scenario label="inner">
          <x:context><inner/></x:context>
          <x:expect-assert id="a"/>
        </x:scenario>
        <x:expect-assert id="b"/>
      </x:scenario>
      <x:expect-valid/>
    </x:description>"#;
    let expectations = parse_xspec(source).unwrap();
    let contexts: Vec<_> = expectations.iter().map(|e| e.context.clone()).collect();
    assert_eq!(
        contexts,
        vec![
            Some(XSpecContext::Inline("<inner/>".to_string())),
            Some(XSpecContext::Inline("<outer/>".to_string())),
            None,
        ]
    );
    assert_eq!(expectations[2].label, "");
}
