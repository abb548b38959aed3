//! Sort Tests
//!
//! Tests verify:
//! - Ordering by id, name and salary
//! - Leftmost-minimum tie handling of the selection sort
//! - Idempotence
//! - Sort key parsing

use rosterdb::sort::{selection_sort_by, selection_sort_by_key, sort, SortKey};
use rosterdb::{Collection, Date, Record};

// =============================================================================
// Helper Functions
// =============================================================================

fn employee(id: i32, name: &str, salary: i32) -> Record {
    Record::new(id, "dept", name, salary, Date::new(2020, 1, 1), Date::new(2022, 6, 30))
}

fn collection_of(records: Vec<Record>) -> Collection {
    let mut collection = Collection::new();
    for record in records {
        collection.append(record).unwrap();
    }
    collection
}

fn ids(collection: &Collection) -> Vec<i32> {
    collection.iter().map(|r| r.id).collect()
}

// =============================================================================
// Key Ordering Tests
// =============================================================================

#[test]
fn test_sort_by_salary() {
    let mut collection = collection_of(vec![
        employee(1, "a", 30),
        employee(2, "b", 10),
        employee(3, "c", 20),
    ]);

    collection.sort(SortKey::Salary);

    assert_eq!(ids(&collection), vec![2, 3, 1]);
}

#[test]
fn test_sort_by_id() {
    let mut collection = collection_of(vec![
        employee(42, "a", 1),
        employee(-3, "b", 1),
        employee(7, "c", 1),
        employee(0, "d", 1),
    ]);

    sort(&mut collection, SortKey::Id);

    assert_eq!(ids(&collection), vec![-3, 0, 7, 42]);
}

#[test]
fn test_sort_by_name_is_bytewise() {
    let mut collection = collection_of(vec![
        employee(1, "bob", 1),
        employee(2, "Zed", 1),
        employee(3, "alice", 1),
        employee(4, "Bob", 1),
    ]);

    collection.sort(SortKey::Name);

    // Uppercase sorts before lowercase in byte order
    let names: Vec<&str> = collection.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Zed", "alice", "bob"]);
}

#[test]
fn test_sort_by_name_prefix_first() {
    let mut collection = collection_of(vec![
        employee(1, "Ann", 1),
        employee(2, "An", 1),
        employee(3, "Anna", 1),
    ]);

    collection.sort(SortKey::Name);

    assert_eq!(ids(&collection), vec![2, 1, 3]);
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty = Collection::new();
    empty.sort(SortKey::Id);
    assert!(empty.is_empty());

    let mut single = collection_of(vec![employee(1, "a", 1)]);
    single.sort(SortKey::Salary);
    assert_eq!(ids(&single), vec![1]);
}

#[test]
fn test_sort_keeps_record_contents() {
    let original = vec![
        employee(3, "c", 300),
        employee(1, "a", 100),
        employee(2, "b", 200),
    ];
    let mut collection = collection_of(original.clone());

    collection.sort(SortKey::Id);

    assert_eq!(collection.get(0), Some(&original[1]));
    assert_eq!(collection.get(1), Some(&original[2]));
    assert_eq!(collection.get(2), Some(&original[0]));
}

// =============================================================================
// Idempotence / Tie Tests
// =============================================================================

#[test]
fn test_sort_by_id_is_idempotent() {
    let mut collection = collection_of(vec![
        employee(5, "e", 1),
        employee(2, "b", 1),
        employee(5, "x", 1),
        employee(1, "a", 1),
        employee(2, "y", 1),
    ]);

    collection.sort(SortKey::Id);
    let first = collection.clone();
    collection.sort(SortKey::Id);

    assert_eq!(collection, first);
}

#[test]
fn test_sort_equal_keys_untouched() {
    let mut collection = collection_of(vec![
        employee(1, "a", 50),
        employee(2, "b", 50),
        employee(3, "c", 50),
    ]);

    collection.sort(SortKey::Salary);

    // Strict comparison never selects a later equal element
    assert_eq!(ids(&collection), vec![1, 2, 3]);
}

#[test]
fn test_selection_sort_is_not_stable() {
    // (key, tag): the swap at i = 0 carries (2, 'a') past (2, 'b')
    let mut items = vec![(2, 'a'), (2, 'b'), (1, 'c')];

    selection_sort_by_key(&mut items, |item| item.0);

    assert_eq!(items, vec![(1, 'c'), (2, 'b'), (2, 'a')]);
}

#[test]
fn test_selection_sort_leftmost_minimum_wins() {
    // Minimum 0 appears at indices 1 and 3; index 1 must be picked first
    let mut items = vec![(5, 'a'), (0, 'b'), (3, 'c'), (0, 'd')];

    selection_sort_by(&mut items, |a, b| a.0 < b.0);

    assert_eq!(items, vec![(0, 'b'), (0, 'd'), (3, 'c'), (5, 'a')]);
}

#[test]
fn test_selection_sort_counts_swaps() {
    use std::cell::Cell;

    let comparisons = Cell::new(0usize);
    let mut items: Vec<i32> = (0..20).rev().collect();

    selection_sort_by(&mut items, |a, b| {
        comparisons.set(comparisons.get() + 1);
        a < b
    });

    assert_eq!(items, (0..20).collect::<Vec<_>>());
    // n(n-1)/2 comparisons regardless of input
    assert_eq!(comparisons.get(), 20 * 19 / 2);
}

// =============================================================================
// SortKey Parsing Tests
// =============================================================================

#[test]
fn test_sort_key_from_str() {
    assert_eq!("id".parse::<SortKey>().unwrap(), SortKey::Id);
    assert_eq!("Name".parse::<SortKey>().unwrap(), SortKey::Name);
    assert_eq!(" SALARY ".parse::<SortKey>().unwrap(), SortKey::Salary);
    assert!("age".parse::<SortKey>().is_err());
}

#[test]
fn test_sort_key_display_round_trips() {
    for key in [SortKey::Id, SortKey::Name, SortKey::Salary] {
        assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
    }
}
