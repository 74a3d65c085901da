use hsts_toolkit::hsts::{validate_hsts, HstsIssue};

#[test]
fn test_absent_header_reports_no_hsts() {
    let result = validate_hsts(None);
    assert!(!result.present);
    assert!(!result.ok);
    assert_eq!(result.issues, vec![HstsIssue::NoHstsHeader]);
    assert_eq!(result.max_age, None);
}

#[test]
fn test_canonical_preload_header_is_ok() {
    let result = validate_hsts(Some("max-age=31536000; includeSubDomains; preload"));
    assert!(result.ok);
    assert_eq!(result.max_age, Some(31536000));
    assert!(result.include_subdomains);
    assert!(result.preload);
    assert!(result.issues.is_empty());
}

#[test]
fn test_bare_preload_collects_both_issues() {
    let result = validate_hsts(Some("preload"));
    assert!(!result.ok);
    assert!(result.issues.contains(&HstsIssue::MissingMaxAge));
    assert!(result.issues.contains(&HstsIssue::PreloadWithoutSubdomains));
}

#[test]
fn test_unparseable_max_age() {
    let result = validate_hsts(Some("max-age=abc"));
    assert!(result.issues.contains(&HstsIssue::InvalidMaxAge));
    assert!(result.issues.contains(&HstsIssue::MissingMaxAge));
}

#[test]
fn test_validator_is_deterministic() {
    let header = "max-age=0; includeSubDomains; x-custom=1";
    assert_eq!(validate_hsts(Some(header)), validate_hsts(Some(header)));
}

#[test]
fn test_issue_codes_render_as_snake_case() {
    let result = validate_hsts(Some("max-age=abc; bogus"));
    let rendered = result.issues_summary();
    assert!(rendered.contains("invalid_max_age"));
    assert!(rendered.contains("unknown_directive:bogus"));
    assert!(rendered.contains("missing_max_age"));
}
