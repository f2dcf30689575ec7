use super::*;
use crate::pool::BrandPool;

fn pool(names: &[&str]) -> BrandPool {
    BrandPool::from_brands(names.iter().map(|s| s.to_string()).collect())
}

fn hist(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_every_match_is_prefix_of_candidate() {
    let p = pool(&["Acme Co", "Acme Foods", "Globex", "acme direct"]);
    let h = hist(&["Acme Co", "Initech"]);
    let resp = suggest(&p, &h, "aCm");
    assert!(!resp.matches.is_empty());
    for m in &resp.matches {
        assert!(m.to_lowercase().starts_with("acm"), "not a prefix match: {m}");
    }
}

#[test]
fn test_history_ranks_before_pool() {
    let p = pool(&["Acme Co", "Acme Foods"]);
    let h = hist(&["Acme Foods"]);
    let resp = suggest(&p, &h, "acme");
    assert_eq!(resp.matches, &["Acme Foods", "Acme Co"]);
}

#[test]
fn test_pool_order_preserved_without_history() {
    let p = pool(&["Acme Co", "Acme Foods"]);
    let resp = suggest(&p, &[], "Acme");
    assert_eq!(resp.matches, &["Acme Co", "Acme Foods"]);
    assert!(!resp.exact);
}

#[test]
fn test_exact_match_is_case_insensitive() {
    let p = pool(&["Acme Co"]);
    let h = hist(&["Acme Co"]);
    let resp = suggest(&p, &h, "acme co");
    assert!(resp.exact);
    assert_eq!(resp.matches, &["Acme Co"]);
}

#[test]
fn test_exact_match_from_pool_with_empty_history() {
    let p = pool(&["Acme Co", "Acme Foods"]);
    let resp = suggest(&p, &[], "acme co");
    assert!(resp.exact);
}

#[test]
fn test_no_match_is_empty_result() {
    let resp = suggest(&pool(&[]), &[], "xyz");
    assert!(resp.matches.is_empty());
    assert!(!resp.exact);
}

#[test]
fn test_case_only_difference_is_not_deduplicated() {
    // Accumulation dedup is case-sensitive: a history entry and a pool entry
    // differing only in case both appear.
    let p = pool(&["Acme Co"]);
    let h = hist(&["ACME CO"]);
    let resp = suggest(&p, &h, "acme");
    assert_eq!(resp.matches, &["ACME CO", "Acme Co"]);
}

#[test]
fn test_history_duplicate_of_pool_entry_emitted_once() {
    let p = pool(&["Acme Co", "Globex"]);
    let h = hist(&["Acme Co"]);
    let resp = suggest(&p, &h, "acme");
    assert_eq!(resp.matches, &["Acme Co"]);
}

#[test]
fn test_empty_fragment_matches_everything() {
    let p = pool(&["Acme Co", "Globex"]);
    let h = hist(&["Initech"]);
    let resp = suggest(&p, &h, "");
    assert_eq!(resp.matches, &["Initech", "Acme Co", "Globex"]);
    assert!(!resp.exact);
}

#[test]
fn test_exact_decided_over_full_list() {
    // The candidate equal to the fragment sits past the display cap of 10;
    // exact detection must still see it.
    let mut names: Vec<String> = (0..12).map(|i| format!("Acme {i:02}")).collect();
    names.push("Acme".to_string());
    let p = BrandPool::from_brands(names);
    let resp = suggest(&p, &[], "acme");
    assert_eq!(resp.matches.len(), 13);
    assert!(resp.exact);
}

#[test]
fn test_updated_history_changes_ranking() {
    // After the caller records a confirmed value, a later query sees it first.
    let p = pool(&["Acme Co", "Acme Foods"]);
    let before = suggest(&p, &[], "acme");
    assert_eq!(before.matches, &["Acme Co", "Acme Foods"]);

    let h = hist(&["Acme Foods"]);
    let after = suggest(&p, &h, "acme");
    assert_eq!(after.matches, &["Acme Foods", "Acme Co"]);
}

#[test]
fn test_unicode_lowercase_matching() {
    let p = pool(&["Müller GmbH"]);
    let resp = suggest(&p, &[], "müLLER");
    assert_eq!(resp.matches, &["Müller GmbH"]);
}
