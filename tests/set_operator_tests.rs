//! Distinct, Union, Intersect and Except under each comparison strategy.

use enumq::enumq_operators::set::{distinct_cmp, distinct_eq, except, intersect_by, union_eq};
use enumq::prelude::*;

fn strings(items: &[&str]) -> SliceEnumerator<String> {
    from_vec(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_distinct_preserves_first_occurrence() {
    let d = from_vec(vec![21, 46, 46, 55, 17, 21, 55, 55])
        .distinct()
        .to_vec();
    assert_eq!(d, vec![21, 46, 55, 17]);
}

#[test]
fn test_distinct_strategies() {
    let letters = || strings(&["A", "a", "b", "c", "b"]);
    let plain = distinct_eq(Some(letters()), None::<CaseInsensitive>)
        .expect("distinct_eq")
        .to_vec();
    assert_eq!(plain, vec!["A", "a", "b", "c"]);

    let folded = distinct_cmp(Some(letters()), Some(CaseInsensitive))
        .expect("distinct_cmp")
        .to_vec();
    assert_eq!(folded, vec!["A", "b", "c"]);

    let by_parity = from_vec(vec![3, 5, 8, 7, 2])
        .distinct_eq(EqualerFunc(|a: &i32, b: &i32| a % 2 == b % 2))
        .to_vec();
    assert_eq!(by_parity, vec![3, 8]);
}

#[test]
fn test_union_intersect_except() {
    let a = || from_vec(vec![5, 3, 9, 7, 5, 9, 3, 7]);
    let b = || from_vec(vec![8, 3, 6, 4, 4, 9, 1, 0]);
    assert_eq!(a().union(b()).to_vec(), vec![5, 3, 9, 7, 8, 6, 4, 1, 0]);
    assert_eq!(a().intersect(b()).to_vec(), vec![3, 9]);
    assert_eq!(a().except(b()).to_vec(), vec![5, 7]);
}

#[test]
fn test_set_operators_restart() {
    let mut u = union_eq(
        Some(strings(&["x", "Y"])),
        Some(strings(&["y", "z"])),
        Some(CaseInsensitive),
    )
    .expect("union_eq");
    assert_eq!(to_vec(&mut u), vec!["x", "Y", "z"]);
    u.restart();
    assert_eq!(to_vec(&mut u), vec!["x", "Y", "z"]);

    let mut e = except(Some(from_vec(vec![1, 2, 2, 3])), Some(from_vec(vec![2]))).expect("except");
    assert_eq!(to_vec(&mut e), vec![1, 3]);
    e.restart();
    assert_eq!(to_vec(&mut e), vec![1, 3]);
}

#[test]
fn test_key_selector_applies_to_both_sides() {
    let products = from_vec(vec![("apple", 9), ("orange", 4), ("lemon", 12)]);
    let stock = from_vec(vec![("APPLE", 0), ("lemon", 0)]);
    let mut i = intersect_by(
        Some(products),
        Some(stock),
        Some(|p: &(&'static str, i32)| p.0.to_lowercase()),
    )
    .expect("intersect_by");
    assert_eq!(to_vec(&mut i), vec![("apple", 9), ("lemon", 12)]);
}

#[test]
fn test_ordering_strategy_on_sets() {
    let common = strings(&["Mercury", "venus", "Earth"])
        .intersect_cmp(strings(&["EARTH", "VENUS"]), CaseInsensitive)
        .to_vec();
    assert_eq!(common, vec!["venus", "Earth"]);
}
