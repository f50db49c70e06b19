use email_suggest::{Levenshtein, Sift3, find_closest};

fn refs(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| (*entry).to_string()).collect()
}

#[test]
fn test_exact_match_wins_regardless_of_threshold() {
    let references = refs(&["yahoo.com", "google.com", "gmail.com"]);

    // Threshold zero would reject any computed distance; the verbatim hit
    // short-circuits before scoring.
    let hit = find_closest("gmail.com", &references, &Sift3, 0.0);
    assert_eq!(hit, Some("gmail.com"));
}

#[test]
fn test_closest_entry_within_threshold() {
    let references = refs(&["yahoo.com", "gmail.com"]);

    let hit = find_closest("gmial.com", &references, &Sift3, 3.0);
    assert_eq!(hit, Some("gmail.com"));
}

#[test]
fn test_first_minimum_wins_ties() {
    // Both entries sit at Levenshtein distance 1; the earlier one is kept.
    let references = refs(&["abx", "aby"]);

    let hit = find_closest("abz", &references, &Levenshtein, 3.0);
    assert_eq!(hit, Some("abx"));
}

#[test]
fn test_threshold_is_inclusive() {
    let references = refs(&["xyz"]);

    // levenshtein("abc", "xyz") is exactly 3.
    assert_eq!(
        find_closest("abc", &references, &Levenshtein, 3.0),
        Some("xyz")
    );
    assert_eq!(find_closest("abc", &references, &Levenshtein, 2.0), None);
}

#[test]
fn test_empty_candidate_matches_nothing() {
    let references = refs(&["gmail.com"]);
    assert_eq!(find_closest("", &references, &Sift3, 3.0), None);
}

#[test]
fn test_empty_references_match_nothing() {
    assert_eq!(find_closest("gmail.com", &[], &Sift3, 3.0), None);
}
