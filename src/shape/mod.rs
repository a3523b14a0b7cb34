//! Shape classification for queryable collections.
//!
//! Every collection a query accepts is classified into one of a closed set
//! of capability shapes. The shape decides how `first` and `last` traverse
//! it:
//!
//! | Shape                | `first`        | `last`                           |
//! |----------------------|----------------|----------------------------------|
//! | [`Shape::Indexable`]         | forward scan   | backward scan from the end       |
//! | [`Shape::FiniteIterable`]    | forward scan   | full sweep, keep latest match    |
//! | [`Shape::UnboundedIterable`] | forward scan   | fails: no reachable end          |
//! | [`Shape::KeyValueMapping`]   | entry scan     | materialize entries, scan back   |
//! | [`Shape::Opaque`]            | fails          | fails (or empty, if configured)  |
//!
//! A [`Collection`] reports its shape with [`Collection::shape`] without
//! being consumed, and hands over the matching iterator through
//! [`Collection::into_traversal`].
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use terminus::shape::{Shape, Stream, is_finite_sized, is_indexable, is_iterable};
//!
//! let numbers = vec![1, 2, 3];
//! assert!(is_indexable(&&numbers));
//!
//! let set: HashSet<i32> = numbers.iter().copied().collect();
//! assert!(!is_indexable(&&set));
//! assert!(is_finite_sized(&&set));
//!
//! let stream = Stream::new((1..).step_by(2));
//! assert!(is_iterable(&stream));
//! assert!(!is_finite_sized(&stream));
//! ```

mod source;
mod standard;

pub use source::{Counted, Stream};

// =============================================================================
// Shape
// =============================================================================

/// The traversal capability of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Finite count with positional access from either end.
    Indexable,
    /// Finite count, forward access only.
    FiniteIterable,
    /// Forward access, no known end.
    UnboundedIterable,
    /// Key/value entries enumerated in a stable order.
    KeyValueMapping,
    /// Not a collection.
    Opaque,
}

impl Shape {
    /// Returns `true` for [`Shape::Indexable`].
    #[inline]
    pub const fn is_indexable(self) -> bool {
        matches!(self, Self::Indexable)
    }

    /// Returns `true` if the element count is known without enumerating.
    #[inline]
    pub const fn is_finite_sized(self) -> bool {
        matches!(
            self,
            Self::Indexable | Self::FiniteIterable | Self::KeyValueMapping
        )
    }

    /// Returns `true` if the value produces its elements as a sequence.
    ///
    /// Key/value mappings are enumerated by entry instead and are not
    /// iterable in this sense.
    #[inline]
    pub const fn is_iterable(self) -> bool {
        matches!(
            self,
            Self::Indexable | Self::FiniteIterable | Self::UnboundedIterable
        )
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// A collection converted into the iterator its shape calls for.
///
/// `D` is the double-ended iterator of an indexable collection; `S` is the
/// forward iterator used by every other shape.
#[derive(Debug, Clone)]
pub enum Traversal<D, S> {
    /// Elements reachable from both ends with a known count.
    Indexable(D),
    /// Elements in iteration order, finitely many.
    FiniteIterable(S),
    /// Elements in iteration order, possibly without end.
    UnboundedIterable(S),
    /// `(key, value)` entries in the mapping's stable order.
    KeyValueMapping(S),
    /// Nothing to traverse.
    Opaque,
}

impl<D, S> Traversal<D, S> {
    /// Returns the shape this traversal was produced for.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Indexable(_) => Shape::Indexable,
            Self::FiniteIterable(_) => Shape::FiniteIterable,
            Self::UnboundedIterable(_) => Shape::UnboundedIterable,
            Self::KeyValueMapping(_) => Shape::KeyValueMapping,
            Self::Opaque => Shape::Opaque,
        }
    }
}

// =============================================================================
// Collection
// =============================================================================

/// A value that `first` and `last` can query.
///
/// Implementations exist for the standard sequences, sets and maps (by
/// reference), for owned `Vec` and `SmallVec` buffers, for
/// [`Record`](crate::Record), and for iterators wrapped in [`Stream`] or
/// [`Counted`].
///
/// # Contract
///
/// `shape` must be O(1), must not consume anything, and must agree with
/// the variant returned by `into_traversal`. A shape with no use for one
/// of the iterator types fills it with [`std::iter::Empty`].
///
/// # Examples
///
/// ```rust
/// use terminus::shape::{Collection, Shape};
///
/// let letters = ['a', 'b', 'c'];
/// assert_eq!((&letters).shape(), Shape::Indexable);
/// ```
pub trait Collection {
    /// The element type yielded to predicates and returned by queries.
    type Item;

    /// Iterator used when the collection is indexable.
    type Indexed: DoubleEndedIterator<Item = Self::Item> + ExactSizeIterator;

    /// Iterator used for every other shape.
    type Sequence: Iterator<Item = Self::Item>;

    /// Classifies the collection.
    fn shape(&self) -> Shape;

    /// Converts the collection into the traversal for its shape.
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence>;
}

/// Returns `true` if the collection supports positional access from either end.
#[inline]
pub fn is_indexable<C: Collection + ?Sized>(collection: &C) -> bool {
    collection.shape().is_indexable()
}

/// Returns `true` if the collection's size is known up front.
#[inline]
pub fn is_finite_sized<C: Collection + ?Sized>(collection: &C) -> bool {
    collection.shape().is_finite_sized()
}

/// Returns `true` if the collection produces a sequence of elements.
#[inline]
pub fn is_iterable<C: Collection + ?Sized>(collection: &C) -> bool {
    collection.shape().is_iterable()
}

static_assertions::assert_impl_all!(Shape: Copy, Send, Sync);
