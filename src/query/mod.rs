//! The `first` and `last` queries.
//!
//! Both queries classify the collection once and pick a traversal for its
//! shape:
//!
//! - `first` scans forward and stops at the first match. This works on
//!   every shape except [`Shape::Opaque`], including unbounded streams.
//! - `last` scans backward from the end of an indexable collection, sweeps
//!   a finite iterable to the end keeping the latest match, and copies the
//!   entries of a key/value mapping into an indexable buffer before
//!   scanning it backward. Unbounded streams are refused.
//!
//! The free functions use the default [`Finder`]. Build a `Finder` to cap
//! the number of visited elements or to change how `last` treats values
//! that are not collections.
//!
//! [`Shape::Opaque`]: crate::shape::Shape::Opaque
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use terminus::{first, first_where, last, last_where};
//!
//! let numbers = [1, 2, 3, 4, 5];
//! assert_eq!(first(&numbers), Ok(Some(&1)));
//! assert_eq!(first_where(&numbers, |number| **number > 3), Ok(Some(&4)));
//!
//! let set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(last(&set), Ok(Some(&3)));
//! assert_eq!(last_where(&set, |number| **number < 3), Ok(Some(&2)));
//! ```

mod scan;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::QueryError;
use crate::shape::{Collection, Traversal};

use scan::{Budget, scan, sweep};

/// Entries kept inline when `last` materializes a key/value mapping.
const INLINE_ENTRIES: usize = 8;

// =============================================================================
// Configuration
// =============================================================================

/// How `last` answers for a value that is not a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnsupportedShape {
    /// Fail with [`QueryError::NotIterable`], as `first` does.
    #[default]
    Error,
    /// Return an empty result.
    Empty,
}

/// Query configuration.
///
/// The default finder scans without limit and fails on values that are not
/// collections.
///
/// # Examples
///
/// ```rust
/// use terminus::{Finder, QueryError};
/// use terminus::shape::Stream;
///
/// let finder = Finder::new().with_scan_limit(100);
/// let evens = Stream::new((0..).step_by(2));
/// assert_eq!(
///     finder.first_where(evens, |number| number % 2 == 1),
///     Err(QueryError::ScanLimitExceeded { limit: 100 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Finder {
    scan_limit: Option<usize>,
    unsupported: UnsupportedShape,
}

impl Finder {
    /// Creates a finder with no scan limit and strict handling of
    /// unsupported values.
    #[inline]
    pub const fn new() -> Self {
        Self {
            scan_limit: None,
            unsupported: UnsupportedShape::Error,
        }
    }

    /// Caps the number of elements a single query may visit.
    ///
    /// A query that needs to visit more fails with
    /// [`QueryError::ScanLimitExceeded`]. The element that trips the limit
    /// has already been taken from the iterator.
    #[inline]
    pub const fn with_scan_limit(self, limit: usize) -> Self {
        Self {
            scan_limit: Some(limit),
            ..self
        }
    }

    /// Sets how `last` answers for values that are not collections.
    #[inline]
    pub const fn with_unsupported(self, unsupported: UnsupportedShape) -> Self {
        Self {
            unsupported,
            ..self
        }
    }

    /// Returns the configured scan limit.
    #[inline]
    pub const fn scan_limit(&self) -> Option<usize> {
        self.scan_limit
    }

    /// Returns the policy for unsupported values.
    #[inline]
    pub const fn unsupported(&self) -> UnsupportedShape {
        self.unsupported
    }

    // =========================================================================
    // first
    // =========================================================================

    /// Returns the first element of the collection.
    ///
    /// # Errors
    ///
    /// See [`Finder::first_where`].
    #[inline]
    pub fn first<C: Collection>(&self, collection: C) -> Result<Option<C::Item>, QueryError> {
        self.first_where(collection, |_| true)
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// Key/value mappings are scanned entry by entry, with the predicate
    /// seeing `(key, value)` pairs. Only the prefix up to the match is
    /// consumed. On an unbounded stream with no match the call does not
    /// return unless a scan limit is set.
    ///
    /// # Errors
    ///
    /// - [`QueryError::NotIterable`] if the value is not a collection.
    /// - [`QueryError::ScanLimitExceeded`] if the scan limit is reached.
    pub fn first_where<C, P>(
        &self,
        collection: C,
        mut predicate: P,
    ) -> Result<Option<C::Item>, QueryError>
    where
        C: Collection,
        P: FnMut(&C::Item) -> bool,
    {
        let traversal = collection.into_traversal();
        trace!(shape = ?traversal.shape(), "first");
        let mut budget = Budget::new(self.scan_limit);

        match traversal {
            Traversal::Indexable(elements) => scan(elements, &mut predicate, &mut budget),
            Traversal::FiniteIterable(elements)
            | Traversal::UnboundedIterable(elements)
            | Traversal::KeyValueMapping(elements) => {
                scan(elements, &mut predicate, &mut budget)
            }
            Traversal::Opaque => {
                debug!("first called on a value that is not a collection");
                Err(QueryError::NotIterable)
            }
        }
    }

    // =========================================================================
    // last
    // =========================================================================

    /// Returns the last element of the collection.
    ///
    /// # Errors
    ///
    /// See [`Finder::last_where`].
    #[inline]
    pub fn last<C: Collection>(&self, collection: C) -> Result<Option<C::Item>, QueryError> {
        self.last_where(collection, |_| true)
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// Indexable collections are scanned from the end and stop at the
    /// match. Finite iterables are swept completely. Key/value mappings are
    /// copied into a buffer of `(key, value)` pairs, which is then scanned
    /// from the end.
    ///
    /// # Errors
    ///
    /// - [`QueryError::NotFiniteCollection`] for an unbounded stream.
    /// - [`QueryError::NotIterable`] if the value is not a collection and
    ///   the finder uses [`UnsupportedShape::Error`].
    /// - [`QueryError::ScanLimitExceeded`] if the scan limit is reached.
    pub fn last_where<C, P>(
        &self,
        collection: C,
        mut predicate: P,
    ) -> Result<Option<C::Item>, QueryError>
    where
        C: Collection,
        P: FnMut(&C::Item) -> bool,
    {
        let mut budget = Budget::new(self.scan_limit);
        self.last_within(collection, &mut predicate, &mut budget)
    }

    fn last_within<C, P>(
        &self,
        collection: C,
        predicate: &mut P,
        budget: &mut Budget,
    ) -> Result<Option<C::Item>, QueryError>
    where
        C: Collection,
        P: FnMut(&C::Item) -> bool,
    {
        let traversal = collection.into_traversal();
        trace!(shape = ?traversal.shape(), "last");

        match traversal {
            Traversal::Indexable(elements) => scan(elements.rev(), predicate, budget),
            Traversal::FiniteIterable(elements) => {
                debug!(
                    elements = elements.size_hint().0,
                    "last sweeping a forward-only collection"
                );
                sweep(elements, predicate, budget)
            }
            Traversal::UnboundedIterable(_) => {
                debug!("last called on an unbounded collection");
                Err(QueryError::NotFiniteCollection)
            }
            Traversal::KeyValueMapping(entries) => {
                let materialized: SmallVec<[C::Item; INLINE_ENTRIES]> = entries.collect();
                debug!(
                    entries = materialized.len(),
                    "last materialized mapping entries"
                );
                self.last_within(materialized, predicate, budget)
            }
            Traversal::Opaque => match self.unsupported {
                UnsupportedShape::Error => {
                    debug!("last called on a value that is not a collection");
                    Err(QueryError::NotIterable)
                }
                UnsupportedShape::Empty => Ok(None),
            },
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Returns the first element of `collection`.
///
/// # Errors
///
/// Fails with [`QueryError::NotIterable`] if the value is not a collection.
///
/// # Examples
///
/// ```rust
/// use terminus::first;
///
/// assert_eq!(first(&vec!["a", "b"]), Ok(Some(&"a")));
/// assert_eq!(first(&Vec::<i32>::new()), Ok(None));
/// ```
#[inline]
pub fn first<C: Collection>(collection: C) -> Result<Option<C::Item>, QueryError> {
    Finder::new().first(collection)
}

/// Returns the first element of `collection` satisfying `predicate`.
///
/// # Errors
///
/// Fails with [`QueryError::NotIterable`] if the value is not a collection.
#[inline]
pub fn first_where<C, P>(collection: C, predicate: P) -> Result<Option<C::Item>, QueryError>
where
    C: Collection,
    P: FnMut(&C::Item) -> bool,
{
    Finder::new().first_where(collection, predicate)
}

/// Returns the last element of `collection`.
///
/// # Errors
///
/// Fails with [`QueryError::NotFiniteCollection`] for an unbounded stream
/// and with [`QueryError::NotIterable`] if the value is not a collection.
///
/// # Examples
///
/// ```rust
/// use terminus::{QueryError, last};
/// use terminus::shape::Stream;
///
/// assert_eq!(last(&[1, 2, 3]), Ok(Some(&3)));
/// assert_eq!(last(Stream::new(0..)), Err(QueryError::NotFiniteCollection));
/// ```
#[inline]
pub fn last<C: Collection>(collection: C) -> Result<Option<C::Item>, QueryError> {
    Finder::new().last(collection)
}

/// Returns the last element of `collection` satisfying `predicate`.
///
/// # Errors
///
/// Fails with [`QueryError::NotFiniteCollection`] for an unbounded stream
/// and with [`QueryError::NotIterable`] if the value is not a collection.
#[inline]
pub fn last_where<C, P>(collection: C, predicate: P) -> Result<Option<C::Item>, QueryError>
where
    C: Collection,
    P: FnMut(&C::Item) -> bool,
{
    Finder::new().last_where(collection, predicate)
}

static_assertions::assert_impl_all!(Finder: Copy, Send, Sync, Default);
