use hsts_toolkit::domain::normalize;

#[test]
fn test_mixed_case_with_trailing_dot_normalizes() {
    assert_eq!(normalize("ExAmPle.Com.").unwrap(), "example.com");
}

#[test]
fn test_unicode_domain_becomes_punycode() {
    assert_eq!(normalize("bücher.de").unwrap(), "xn--bcher-kva.de");
}

#[test]
fn test_rejects_254_characters() {
    let label = "a".repeat(254);
    assert!(normalize(&label).is_err());
}

#[test]
fn test_accepts_253_character_domain() {
    // 63 + 1 + 63 + 1 + 63 + 1 + 61 = 253
    let domain = format!(
        "{}.{}.{}.{}",
        "a".repeat(63),
        "b".repeat(63),
        "c".repeat(63),
        "d".repeat(61)
    );
    assert_eq!(domain.len(), 253);
    assert_eq!(normalize(&domain).unwrap(), domain);
}

#[test]
fn test_rejects_leading_hyphen() {
    assert!(normalize("-bad.example.com").is_err());
}

#[test]
fn test_rejects_illegal_characters() {
    assert!(normalize("exa mple.com").is_err());
    assert!(normalize("example_.com").is_err());
}
