//! Optional result contract shared by `first` and `last`.
//!
//! Both queries return `Option<T>`: `Some` when an element was found and
//! `None` when nothing matched. [`Found`] names the operations callers
//! rely on, so a result can be built and unwrapped without reaching for
//! `unwrap`:
//!
//! - [`Found::of`]: wrap a found value
//! - [`Found::EMPTY`]: the one empty result every "no match" returns
//! - [`Found::value`]: explicit extraction that fails on an empty result
//!
//! # Examples
//!
//! ```rust
//! use terminus::{Found, QueryError, first};
//!
//! let numbers = vec![3, 1, 4];
//! let found = first(&numbers)?;
//! assert_eq!(found.value()?, &3);
//!
//! let empty: Vec<i32> = Vec::new();
//! let nothing = first(&empty)?;
//! assert_eq!(nothing, Option::<&i32>::EMPTY);
//! assert_eq!(nothing.value(), Err(QueryError::EmptyResult));
//! # Ok::<(), QueryError>(())
//! ```

use crate::error::QueryError;

/// A value-or-empty result.
///
/// Implemented for `Option<T>`. An empty result is always `None`, so
/// comparing against [`Found::EMPTY`] and matching on `None` are the same
/// check.
pub trait Found: Sized {
    /// The wrapped value type.
    type Value;

    /// The empty result.
    const EMPTY: Self;

    /// Wraps a found value.
    fn of(value: Self::Value) -> Self;

    /// Returns `true` if a value is present.
    fn is_present(&self) -> bool;

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyResult`] if the result is empty.
    fn value(self) -> Result<Self::Value, QueryError>;
}

impl<T> Found for Option<T> {
    type Value = T;

    const EMPTY: Self = None;

    #[inline]
    fn of(value: T) -> Self {
        Some(value)
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn value(self) -> Result<T, QueryError> {
        self.ok_or(QueryError::EmptyResult)
    }
}
