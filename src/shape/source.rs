//! Iterator adapters that declare a shape.
//!
//! A bare iterator says nothing reliable about where it ends, so it has to
//! be wrapped before it can be queried:
//!
//! - [`Stream`]: any iterator, treated as unbounded
//! - [`Counted`]: an [`ExactSizeIterator`], treated as finite
//!
//! Wrapping `&mut iterator` keeps the iterator usable afterwards; a query
//! only consumes the prefix it needed.

use std::iter::Empty;

use super::{Collection, Shape, Traversal};

// =============================================================================
// Stream
// =============================================================================

/// An iterator with no known end, such as a generator.
///
/// `first` works on a stream as long as a match eventually appears.
/// `last` refuses it with [`QueryError::NotFiniteCollection`].
///
/// [`QueryError::NotFiniteCollection`]: crate::QueryError::NotFiniteCollection
///
/// # Examples
///
/// ```rust
/// use terminus::{QueryError, first_where, last};
/// use terminus::shape::Stream;
///
/// let odds = || Stream::new((1..).step_by(2));
/// assert_eq!(first_where(odds(), |number| *number > 50), Ok(Some(51)));
/// assert_eq!(last(odds()), Err(QueryError::NotFiniteCollection));
/// ```
#[derive(Debug, Clone)]
pub struct Stream<I> {
    elements: I,
}

impl<I: Iterator> Stream<I> {
    /// Wraps anything that can be iterated.
    #[inline]
    pub fn new<T>(elements: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            elements: elements.into_iter(),
        }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.elements
    }
}

impl<I: Iterator> Collection for Stream<I> {
    type Item = I::Item;
    type Indexed = Empty<I::Item>;
    type Sequence = I;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::UnboundedIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::UnboundedIterable(self.elements)
    }
}

// =============================================================================
// Counted
// =============================================================================

/// An iterator whose remaining length is known.
///
/// Queried as a finite forward-only collection: `last` sweeps it to the end.
///
/// # Examples
///
/// ```rust
/// use terminus::last_where;
/// use terminus::shape::Counted;
///
/// let words = ["one", "two", "three"];
/// let counted = Counted::new(words.iter().map(|word| word.len()));
/// assert_eq!(last_where(counted, |length| *length == 3), Ok(Some(3)));
/// ```
#[derive(Debug, Clone)]
pub struct Counted<I> {
    elements: I,
}

impl<I: ExactSizeIterator> Counted<I> {
    /// Wraps anything whose iterator reports an exact size.
    #[inline]
    pub fn new<T>(elements: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            elements: elements.into_iter(),
        }
    }

    /// Returns the number of elements left.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements are left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.len() == 0
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.elements
    }
}

impl<I: ExactSizeIterator> Collection for Counted<I> {
    type Item = I::Item;
    type Indexed = Empty<I::Item>;
    type Sequence = I;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::FiniteIterable
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::FiniteIterable(self.elements)
    }
}
