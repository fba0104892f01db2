//! GroupBy, ToLookup, Join and GroupJoin.

use enumq::enumq_operators::group::{group_by, group_join, join, to_lookup, Grouping};
use enumq::prelude::*;

// (name, age, owner id)
type Pet = (&'static str, u32, u32);
// (id, name)
type Person = (u32, &'static str);

fn pets() -> SliceEnumerator<Pet> {
    from_vec(vec![
        ("Barley", 8, 3),
        ("Boots", 4, 1),
        ("Whiskers", 1, 3),
        ("Daisy", 4, 1),
        ("Rex", 8, 9),
    ])
}

fn age(p: &Pet) -> u32 {
    p.1
}

fn owner(p: &Pet) -> u32 {
    p.2
}

#[test]
fn test_group_by_first_key_order() {
    let mut groups = group_by(Some(pets()), Some(age)).expect("group_by");
    let summary: Vec<(u32, usize)> = to_vec(&mut groups)
        .iter()
        .map(|g| (*g.key(), g.len()))
        .collect();
    assert_eq!(summary, vec![(8, 2), (4, 2), (1, 1)]);
}

#[test]
fn test_group_members_keep_relative_order() {
    let mut groups = pets().group_by_sel(age, |p| p.0);
    assert!(groups.advance());
    let mut first: Grouping<u32, &str> = groups.current().expect("first group");
    assert_eq!(to_vec(&mut first), vec!["Barley", "Rex"]);
    first.restart();
    assert_eq!(first.count(), 2);
}

#[test]
fn test_group_by_restart_rewinds_built_groups() {
    let src = Shared::new(pets());
    let probe = src.clone();
    let mut groups = src.group_by(owner);
    assert_eq!(to_vec(&mut groups).len(), 3);
    groups.restart();
    // The source is not pulled again: it stays exhausted.
    assert_eq!(probe.current(), None);
    assert_eq!(to_vec(&mut groups).len(), 3);
}

#[test]
fn test_lookup_queries() {
    let lookup = to_lookup(Some(pets()), Some(owner)).expect("to_lookup");
    assert_eq!(lookup.len(), 3);
    let names: Vec<&str> = lookup
        .get(&1)
        .map(|g| g.elements().iter().map(|p| p.0).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Boots", "Daisy"]);
    assert!(!lookup.contains(&2));
}

#[test]
fn test_join_and_group_join() {
    let people = || from_vec(vec![(1_u32, "Hedlund"), (2, "Adams"), (3, "Weiss")]);
    let person_id = |p: &Person| p.0;

    let mut j = join(
        Some(people()),
        Some(pets()),
        Some(person_id),
        Some(owner),
        Some(|p: Person, pet: Pet| (p.1, pet.0)),
    )
    .expect("join");
    assert_eq!(
        to_vec(&mut j),
        vec![
            ("Hedlund", "Boots"),
            ("Hedlund", "Daisy"),
            ("Weiss", "Barley"),
            ("Weiss", "Whiskers"),
        ]
    );

    let mut gj = group_join(
        Some(people()),
        Some(pets()),
        Some(person_id),
        Some(owner),
        Some(|p: Person, matches: SliceEnumerator<Pet>| (p.1, matches.len())),
    )
    .expect("group_join");
    let counts = to_vec(&mut gj);
    assert_eq!(counts, vec![("Hedlund", 2), ("Adams", 0), ("Weiss", 2)]);
}

#[test]
fn test_chunk() {
    let chunks = from_vec(vec![1, 2, 3]).chunk(2).to_vec();
    assert_eq!(chunks, vec![vec![1, 2], vec![3]]);
    let zero = enumq::enumq_operators::chunk(Some(from_vec(vec![1])), 0);
    let expected = Error::SizeOutOfRange {
        what: "size",
        value: 0,
    };
    assert_eq!(zero.err(), Some(expected));
    assert_eq!(empty::<i32>().chunk(4).count(), 0);
}
