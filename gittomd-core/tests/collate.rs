use std::cmp::Ordering;

use gittomd_core::collate::compare_paths;

fn sorted(input: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = input.iter().map(|s| s.to_string()).collect();
    v.sort_by(|a, b| compare_paths(a, b));
    v
}

#[test]
fn test_lowercase_before_uppercase_before_next_letter() {
    assert_eq!(sorted(&["b.txt", "A.txt", "a.txt"]), vec!["a.txt", "A.txt", "b.txt"]);
}

#[test]
fn test_case_only_breaks_ties() {
    // Primary (case-insensitive) difference wins over an earlier case difference.
    assert_eq!(compare_paths("Apple", "apricot"), Ordering::Less);
    assert_eq!(compare_paths("ZETA.md", "alpha.md"), Ordering::Greater);
}

#[test]
fn test_punctuation_before_digits_before_letters() {
    assert_eq!(
        sorted(&["src/z.rs", "src/1.rs", "src/_a.rs", "src-old/a.rs"]),
        vec!["src-old/a.rs", "src/_a.rs", "src/1.rs", "src/z.rs"]
    );
}

#[test]
fn test_prefix_sorts_first() {
    assert_eq!(compare_paths("src/lib", "src/lib.rs"), Ordering::Less);
}

#[test]
fn test_total_order_on_identical_and_distinct() {
    assert_eq!(compare_paths("same.txt", "same.txt"), Ordering::Equal);
    assert_ne!(compare_paths("a.txt", "A.txt"), Ordering::Equal);
}

#[test]
fn test_accented_letters_sort_with_their_base_letter() {
    assert_eq!(
        sorted(&[
            "f.txt", "é.txt", "e.txt", "Z.txt", "_a", "-a", "src/a", "src-a", "a b", "a_b", "ab",
            "ä.md", "b.md",
        ]),
        vec![
            "_a", "-a", "a b", "a_b", "ä.md", "ab", "b.md", "e.txt", "é.txt", "f.txt", "src-a",
            "src/a", "Z.txt",
        ]
    );
}

#[test]
fn test_accent_only_breaks_ties() {
    assert_eq!(compare_paths("e.txt", "é.txt"), Ordering::Less);
    assert_eq!(compare_paths("éa.txt", "eb.txt"), Ordering::Less);
}
