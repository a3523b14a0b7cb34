//! Integration tests for `last` across collection shapes.

use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList};

use rstest::rstest;
use terminus::shape::{Counted, Stream};
use terminus::{QueryError, Record, last, last_where};

fn numbers_record() -> Record<&'static str> {
    [("1", "one"), ("2", "two"), ("3", "three")]
        .into_iter()
        .collect()
}

// =============================================================================
// Indexable Sequences
// =============================================================================

#[rstest]
fn test_last_of_vec() {
    let numbers = vec![1, 2, 3];
    assert_eq!(last(&numbers), Ok(Some(&3)));
}

#[rstest]
fn test_last_of_vec_matching_predicate() {
    let numbers = vec![1, 2, 3];
    assert_eq!(last_where(&numbers, |number| **number < 3), Ok(Some(&2)));
}

#[rstest]
fn test_last_of_owned_vec_moves_element_out() {
    let words = vec![String::from("alpha"), String::from("beta"), String::from("gamma")];
    assert_eq!(
        last_where(words, |word| word.contains('e')),
        Ok(Some(String::from("beta")))
    );
}

#[rstest]
fn test_last_without_match_is_empty() {
    assert_eq!(last_where(&[1, 2, 3], |number| **number > 3), Ok(None));
}

// =============================================================================
// Key/Value Mappings
// =============================================================================

#[rstest]
fn test_last_of_record_is_last_pair() {
    let record = numbers_record();
    assert_eq!(last(&record), Ok(Some(("3", &"three"))));
}

#[rstest]
fn test_last_of_record_matching_predicate() {
    let record = numbers_record();
    assert_eq!(
        last_where(&record, |(_, value)| value.starts_with('t')),
        Ok(Some(("3", &"three")))
    );
    assert_eq!(
        last_where(&record, |(_, value)| value.len() == 3),
        Ok(Some(("2", &"two")))
    );
}

#[rstest]
fn test_last_of_record_larger_than_inline_buffer() {
    let record: Record<usize> = (0..100).map(|index| (format!("key{index}"), index)).collect();
    assert_eq!(
        last_where(&record, |(_, value)| **value % 10 == 3),
        Ok(Some(("key93", &93)))
    );
}

#[rstest]
fn test_last_of_owned_record_yields_owned_pair() {
    assert_eq!(
        last(numbers_record()),
        Ok(Some((String::from("3"), "three")))
    );
}

#[rstest]
fn test_last_of_map_is_last_pair() {
    let map: BTreeMap<i32, &str> = [(1, "one"), (2, "two"), (3, "three")]
        .into_iter()
        .collect();
    assert_eq!(last(&map), Ok(Some((&3, &"three"))));
    assert_eq!(
        last_where(&map, |(_, value)| value.starts_with('t')),
        Ok(Some((&3, &"three")))
    );
}

// =============================================================================
// Finite Iterables
// =============================================================================

#[rstest]
fn test_last_of_ordered_set() {
    let set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(last(&set), Ok(Some(&3)));
    assert_eq!(last_where(&set, |number| **number < 3), Ok(Some(&2)));
}

#[rstest]
fn test_last_of_hash_set_with_single_match() {
    let set: HashSet<i32> = (1..=10).collect();
    assert_eq!(last_where(&set, |number| **number == 7), Ok(Some(&7)));
}

#[rstest]
fn test_last_of_linked_list() {
    let list: LinkedList<char> = "abc".chars().collect();
    assert_eq!(last(&list), Ok(Some(&'c')));
}

#[rstest]
fn test_last_of_counted_iterator() {
    let counted = Counted::new((1..6).map(|number| number * number));
    assert_eq!(last_where(counted, |square| square % 2 == 0), Ok(Some(16)));
}

// =============================================================================
// Unbounded Iterables
// =============================================================================

#[rstest]
fn test_last_of_generator_fails() {
    assert_eq!(
        last(Stream::new(std::iter::empty::<i32>())),
        Err(QueryError::NotFiniteCollection)
    );
}

#[rstest]
fn test_last_of_infinite_generator_fails() {
    assert_eq!(
        last(Stream::new((1..).step_by(2))),
        Err(QueryError::NotFiniteCollection)
    );
}

// =============================================================================
// Empty Collections
// =============================================================================

#[rstest]
fn test_last_of_empty_collections_is_empty() {
    let empty_vec: Vec<i32> = Vec::new();
    let empty_record: Record<i32> = Record::new();
    let empty_set: HashSet<i32> = HashSet::new();

    assert_eq!(last(&empty_vec), Ok(None));
    assert_eq!(last(&empty_record), Ok(None));
    assert_eq!(last(&empty_set), Ok(None));
}

#[rstest]
fn test_last_does_not_mutate_input() {
    let numbers = vec![3, 1, 2];
    let record = numbers_record();

    let _ = last(&numbers);
    let _ = last(&record);

    assert_eq!(numbers, vec![3, 1, 2]);
    assert_eq!(record, numbers_record());
}
