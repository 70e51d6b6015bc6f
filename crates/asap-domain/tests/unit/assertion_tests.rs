//! Unit tests for assertions and the severity policy

use asap_domain::{Assertion, Severity, SeverityPolicy};

#[test]
fn test_severity_from_role() {
    assert_eq!(Severity::from_role(Some("error")), Severity::Error);
    assert_eq!(Severity::from_role(Some("FATAL")), Severity::Fatal);
    assert_eq!(Severity::from_role(Some("warning")), Severity::Warning);
    assert_eq!(Severity::from_role(Some("information")), Severity::Information);
    assert_eq!(Severity::from_role(Some("custom")), Severity::Unspecified);
    assert_eq!(Severity::from_role(None), Severity::Unspecified);
}

#[test]
fn test_default_policy_blocks_error_and_fatal() {
    let policy = SeverityPolicy::default();
    assert!(policy.is_blocking_role(Some("error")));
    assert!(policy.is_blocking_role(Some("Fatal")));
    assert!(!policy.is_blocking_role(Some("warning")));
    assert!(!policy.is_blocking_role(Some("information")));
}

#[test]
fn test_missing_role_follows_policy() {
    let mut policy = SeverityPolicy::default();
    assert!(policy.is_blocking_role(None));
    assert!(policy.is_blocking_role(Some("  ")));

    policy.missing_role_is_blocking = false;
    assert!(!policy.is_blocking_role(None));
}

#[test]
fn test_passing_assertion_never_blocks() {
    let policy = SeverityPolicy::default();
    let assertion = Assertion::passed("has-uuid", "uuid present").with_role("error");
    assert!(!policy.is_blocking_failure(&assertion));
}

#[test]
fn test_builder_sets_fields() {
    let assertion = Assertion::failed("missing-title", "title is required")
        .with_role("warning")
        .with_location("/o:system-security-plan[1]/o:metadata[1]")
        .with_test("exists(o:title)");
    assert!(!assertion.passed);
    assert_eq!(assertion.severity(), Severity::Warning);
    assert_eq!(assertion.test.as_deref(), Some("exists(o:title)"));
    assert!(assertion.location.ends_with("o:metadata[1]"));
}
