//! Error types for collection queries.
//!
//! A query that finds nothing is not an error: it returns `Ok(None)`.
//! The variants here describe inputs a query cannot answer at all, or a
//! configured boundary that stopped the scan.

use thiserror::Error;

/// Represents the ways a `first` or `last` query can fail.
///
/// # Examples
///
/// ```rust
/// use terminus::QueryError;
///
/// assert_eq!(
///     QueryError::NotFiniteCollection.to_string(),
///     "collection argument must be a finite collection"
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryError {
    /// The value is neither an iterable nor a key/value mapping.
    #[error("collection argument must be iterable")]
    NotIterable,

    /// `last` was asked for on a stream whose end cannot be reached.
    #[error("collection argument must be a finite collection")]
    NotFiniteCollection,

    /// The scan visited `limit` elements without finishing.
    #[error("scan limit of {limit} elements exceeded")]
    ScanLimitExceeded {
        /// The configured maximum number of visited elements.
        limit: usize,
    },

    /// A value was extracted from an empty result.
    #[error("result is empty")]
    EmptyResult,
}
