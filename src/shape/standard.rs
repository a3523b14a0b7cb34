//! `Collection` implementations for standard library containers.
//!
//! Sequences with random access are indexable. Sets and maps only iterate
//! forward, so they are finite iterables; maps yield `(&key, &value)`
//! pairs. Containers are queried by reference and yield references, except
//! `Vec` and `SmallVec`, which can also be handed over by value.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::iter::Empty;

use smallvec::SmallVec;

use super::{Collection, Shape, Traversal};

// =============================================================================
// Indexable Sequences
// =============================================================================

impl<'a, T> Collection for &'a [T] {
    type Item = &'a T;
    type Indexed = std::slice::Iter<'a, T>;
    type Sequence = Empty<&'a T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::Indexable(self.iter())
    }
}

impl<'a, T, const N: usize> Collection for &'a [T; N] {
    type Item = &'a T;
    type Indexed = std::slice::Iter<'a, T>;
    type Sequence = Empty<&'a T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::Indexable(self.iter())
    }
}

impl<'a, T> Collection for &'a Vec<T> {
    type Item = &'a T;
    type Indexed = std::slice::Iter<'a, T>;
    type Sequence = Empty<&'a T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::Indexable(self.iter())
    }
}

impl<'a, T> Collection for &'a VecDeque<T> {
    type Item = &'a T;
    type Indexed = std::collections::vec_deque::Iter<'a, T>;
    type Sequence = Empty<&'a T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::Indexable(self.iter())
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Indexed = std::vec::IntoIter<T>;
    type Sequence = Empty<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::Indexable(self.into_iter())
    }
}

/// Owned small buffers; `last` materializes mapping entries into one.
impl<A: smallvec::Array> Collection for SmallVec<A> {
    type Item = A::Item;
    type Indexed = smallvec::IntoIter<A>;
    type Sequence = Empty<A::Item>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::Indexable(self.into_iter())
    }
}

// =============================================================================
// Finite Iterables
// =============================================================================

impl<'a, T, S> Collection for &'a HashSet<T, S> {
    type Item = &'a T;
    type Indexed = Empty<&'a T>;
    type Sequence = std::collections::hash_set::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::FiniteIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::FiniteIterable(self.iter())
    }
}

impl<'a, T> Collection for &'a BTreeSet<T> {
    type Item = &'a T;
    type Indexed = Empty<&'a T>;
    type Sequence = std::collections::btree_set::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::FiniteIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::FiniteIterable(self.iter())
    }
}

impl<'a, T> Collection for &'a LinkedList<T> {
    type Item = &'a T;
    type Indexed = Empty<&'a T>;
    type Sequence = std::collections::linked_list::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::FiniteIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::FiniteIterable(self.iter())
    }
}

impl<'a, K, V, S> Collection for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type Indexed = Empty<(&'a K, &'a V)>;
    type Sequence = std::collections::hash_map::Iter<'a, K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::FiniteIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::FiniteIterable(self.iter())
    }
}

impl<'a, K, V> Collection for &'a BTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type Indexed = Empty<(&'a K, &'a V)>;
    type Sequence = std::collections::btree_map::Iter<'a, K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::FiniteIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::FiniteIterable(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sequences_are_indexable() {
        let vector = vec![1, 2, 3];
        let array = [1, 2, 3];
        let deque: VecDeque<i32> = vector.iter().copied().collect();
        let buffer: SmallVec<[i32; 4]> = SmallVec::from_slice(&vector);

        assert_eq!((&vector).shape(), Shape::Indexable);
        assert_eq!(vector.as_slice().shape(), Shape::Indexable);
        assert_eq!((&array).shape(), Shape::Indexable);
        assert_eq!((&deque).shape(), Shape::Indexable);
        assert_eq!(buffer.shape(), Shape::Indexable);
        assert_eq!(vector.shape(), Shape::Indexable);
    }

    #[rstest]
    fn test_sets_and_maps_are_finite_iterables() {
        let hash_set: HashSet<i32> = [1, 2].into_iter().collect();
        let tree_set: BTreeSet<i32> = [1, 2].into_iter().collect();
        let list: LinkedList<i32> = [1, 2].into_iter().collect();
        let hash_map: HashMap<i32, &str> = [(1, "one")].into_iter().collect();
        let tree_map: BTreeMap<i32, &str> = [(1, "one")].into_iter().collect();

        assert_eq!((&hash_set).shape(), Shape::FiniteIterable);
        assert_eq!((&tree_set).shape(), Shape::FiniteIterable);
        assert_eq!((&list).shape(), Shape::FiniteIterable);
        assert_eq!((&hash_map).shape(), Shape::FiniteIterable);
        assert_eq!((&tree_map).shape(), Shape::FiniteIterable);
    }

    #[rstest]
    fn test_traversal_agrees_with_shape() {
        let vector = vec!['x', 'y'];
        let tree_set: BTreeSet<char> = vector.iter().copied().collect();

        assert_eq!((&vector).into_traversal().shape(), (&vector).shape());
        assert_eq!((&tree_set).into_traversal().shape(), (&tree_set).shape());
    }

    #[rstest]
    fn test_indexed_iterator_reaches_both_ends() {
        let vector = vec![10, 20, 30];
        let Traversal::Indexable(mut elements) = (&vector).into_traversal() else {
            panic!("vector should be indexable");
        };
        assert_eq!(elements.len(), 3);
        assert_eq!(elements.next_back(), Some(&30));
        assert_eq!(elements.next(), Some(&10));
    }

    #[rstest]
    fn test_map_entries_are_pairs() {
        let tree_map: BTreeMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
        let Traversal::FiniteIterable(mut entries) = (&tree_map).into_traversal() else {
            panic!("map should be a finite iterable");
        };
        assert_eq!(entries.next(), Some((&1, &"one")));
    }
}
