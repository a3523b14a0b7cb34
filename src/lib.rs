//! # terminus
//!
//! Shape-aware `first` and `last` queries over collections.
//!
//! ## Overview
//!
//! [`first`] and [`last`] return the first or last element of a
//! collection, optionally filtered by a predicate, without the caller
//! having to special-case the container:
//!
//! - **Indexable sequences** (`Vec`, slices, arrays, `VecDeque`): `last`
//!   scans backward from the end and stops at the match
//! - **Finite iterables** (`HashSet`, `BTreeSet`, `HashMap`, `BTreeMap`,
//!   [`Counted`](shape::Counted)): `last` sweeps forward once, keeping the
//!   latest match
//! - **Unbounded iterables** ([`Stream`](shape::Stream)): `first` works,
//!   `last` is refused
//! - **Key/value mappings** ([`Record`], JSON objects): entries are
//!   queried as `(key, value)` pairs in insertion order
//!
//! Results are `Option`s wrapped in `Result`: `Ok(None)` means nothing
//! matched, `Err` means the query could not be answered (see
//! [`QueryError`]).
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Finder`], [`Record`] and
//!   [`Shape`](shape::Shape), and queries over `serde_json::Value`
//!
//! ## Example
//!
//! ```rust
//! use terminus::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(first_where(&numbers, |number| **number > 3), Ok(Some(&4)));
//! assert_eq!(last_where(&numbers, |number| **number < 3), Ok(Some(&2)));
//!
//! let odds = Stream::new((1..).step_by(2));
//! assert_eq!(first_where(odds, |number| *number > 50), Ok(Some(51)));
//! assert_eq!(
//!     last(Stream::new((1..).step_by(2))),
//!     Err(QueryError::NotFiniteCollection)
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use terminus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::QueryError;
    pub use crate::found::Found;
    pub use crate::query::{Finder, UnsupportedShape, first, first_where, last, last_where};
    pub use crate::record::Record;
    pub use crate::shape::{Collection, Counted, Shape, Stream};
}

mod error;
mod found;
mod query;
mod record;

pub mod shape;

#[cfg(feature = "serde")]
pub mod json;

pub use error::QueryError;
pub use found::Found;
pub use query::{Finder, UnsupportedShape, first, first_where, last, last_where};
pub use record::{Record, RecordIterator};
