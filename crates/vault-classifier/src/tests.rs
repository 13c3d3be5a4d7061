use crate::*;
use vault_core::VaultError;

fn social() -> CategoryTable {
    CategoryTable::from_pairs(&[("social", &["facebook.com"])])
}

// ========== Table Match ==========

#[test]
fn test_table_match() {
    assert_eq!(classify("www.facebook.com/login", "bob", &social()), "social");
}

#[test]
fn test_table_match_substring_anywhere() {
    let t = CategoryTable::from_pairs(&[("mail", &["mail."])]);
    assert_eq!(classify("accounts.mail.example.org", "bob", &t), "mail");
}

#[test]
fn test_first_category_wins() {
    let t = CategoryTable::from_pairs(&[
        ("streaming", &["netflix"]),
        ("video", &["netflix.com", "youtube.com"]),
    ]);
    assert_eq!(classify("netflix.com/login", "u", &t), "streaming");
    assert_eq!(classify("youtube.com", "u", &t), "video");
}

#[test]
fn test_table_match_beats_http_guard() {
    assert_eq!(classify("facebook.com", "http-bot", &social()), "social");
}

// ========== Fallback ==========

#[test]
fn test_other_for_unknown_domain() {
    assert_eq!(classify("randomsite.xyz", "bob", &social()), OTHER);
}

#[test]
fn test_other_with_path() {
    assert_eq!(classify("shop.example.de/cart", "bob", &social()), OTHER);
}

#[test]
fn test_uncategorized_not_domain_shaped() {
    assert_eq!(classify("localhost", "bob", &social()), UNCATEGORIZED);
    assert_eq!(classify("192.168.0.1", "bob", &social()), UNCATEGORIZED);
    assert_eq!(classify("android", "bob", &social()), UNCATEGORIZED);
    assert_eq!(classify("", "bob", &social()), UNCATEGORIZED);
}

#[test]
fn test_uncategorized_http_username() {
    assert_eq!(classify("randomsite.xyz", "https", &social()), UNCATEGORIZED);
    assert_eq!(classify("randomsite.xyz", "www.httpbin.org", &social()), UNCATEGORIZED);
}

#[test]
fn test_empty_table() {
    let t = CategoryTable::default();
    assert!(t.is_empty());
    assert_eq!(classify("randomsite.xyz", "bob", &t), OTHER);
}

#[test]
fn test_domain_shape() {
    assert!(is_domain_shaped("a.co"));
    assert!(is_domain_shaped("sub-domain.example.com/a/b"));
    assert!(!is_domain_shaped("a.c"));
    assert!(!is_domain_shaped("nodots"));
}

#[test]
fn test_classify_deterministic() {
    let t = social();
    for url in ["www.facebook.com/login", "randomsite.xyz", "junk"] {
        assert_eq!(classify(url, "u", &t), classify(url, "u", &t));
    }
}

// ========== Table Loading ==========

#[test]
fn test_from_json_preserves_order() {
    let json = r#"{
        "zeta": {"domains": ["z.com"]},
        "alpha": {"domains": ["a.com", "shared.com"]},
        "mid": {"domains": ["shared.com"]}
    }"#;
    let t = CategoryTable::from_json_str(json, "inline").unwrap();
    let names: Vec<_> = t.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(classify("shared.com", "u", &t), "alpha");
}

#[test]
fn test_from_json_ignores_extra_fields() {
    let json = r#"{"social": {"domains": ["vk.com"], "description": "networks"}}"#;
    let t = CategoryTable::from_json_str(json, "inline").unwrap();
    assert_eq!(t.len(), 1);
}

#[test]
fn test_from_json_missing_domains() {
    let err = CategoryTable::from_json_str(r#"{"social": {}}"#, "inline").unwrap_err();
    match err {
        VaultError::CategoryTable { path, reason } => {
            assert_eq!(path, "inline");
            assert!(reason.contains("social"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_json_invalid() {
    assert!(CategoryTable::from_json_str("not json", "inline").is_err());
    assert!(CategoryTable::from_json_str(r#"["social"]"#, "inline").is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("category.json");
    std::fs::write(&path, r#"{"social": {"domains": ["facebook.com"]}}"#).unwrap();
    let t = CategoryTable::load(&path).unwrap();
    assert_eq!(classify("m.facebook.com", "u", &t), "social");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CategoryTable::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, VaultError::CategoryTable { .. }));
}
