//! String-keyed property bag with insertion order.
//!
//! [`Record`] is the key/value mapping shape: it is not a sequence, so
//! queries enumerate its entries as `(key, value)` pairs in the order the
//! keys were first inserted. Overwriting a key keeps its position.
//!
//! # Examples
//!
//! ```rust
//! use terminus::{Record, first, last_where};
//!
//! let record: Record<&str> = [("1", "one"), ("2", "two"), ("3", "three")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(first(&record), Ok(Some(("1", &"one"))));
//! assert_eq!(
//!     last_where(&record, |(_, value)| value.starts_with('t')),
//!     Ok(Some(("3", &"three")))
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Empty, FusedIterator};

use crate::shape::{Collection, Shape, Traversal};

/// An insertion-ordered map from string keys to values.
///
/// Entries live in a `Vec` in insertion order; a key-to-position table
/// makes lookups and inserts constant time. Removal is linear, since
/// later entries shift forward.
#[derive(Clone)]
pub struct Record<V> {
    entries: Vec<(String, V)>,
    positions: HashMap<String, usize>,
}

impl<V> Record<V> {
    /// Creates an empty record.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty record with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the previous value for the key.
    ///
    /// A new key is appended; an existing key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terminus::Record;
    ///
    /// let mut record = Record::new();
    /// record.insert("a", 1);
    /// record.insert("b", 2);
    /// assert_eq!(record.insert("a", 10), Some(1));
    /// assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&index) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[index].1, value));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Removes a key, returning its value. Later keys shift forward.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.positions.remove(key)?;
        let (_, value) = self.entries.remove(index);
        for (later, _) in &self.entries[index..] {
            if let Some(position) = self.positions.get_mut(later) {
                *position -= 1;
            }
        }
        Some(value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns the number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> RecordIterator<'_, V> {
        RecordIterator {
            entries: self.entries.iter(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the entries of a [`Record`].
#[derive(Debug, Clone)]
pub struct RecordIterator<'a, V> {
    entries: std::slice::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for RecordIterator<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| (key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<V> DoubleEndedIterator for RecordIterator<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries
            .next_back()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> ExactSizeIterator for RecordIterator<'_, V> {}

impl<V> FusedIterator for RecordIterator<'_, V> {}

// =============================================================================
// Collection Implementations
// =============================================================================

impl<'a, V> Collection for &'a Record<V> {
    type Item = (&'a str, &'a V);
    type Indexed = Empty<(&'a str, &'a V)>;
    type Sequence = RecordIterator<'a, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::KeyValueMapping
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::KeyValueMapping(self.iter())
    }
}

impl<V> Collection for Record<V> {
    type Item = (String, V);
    type Indexed = Empty<(String, V)>;
    type Sequence = std::vec::IntoIter<(String, V)>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::KeyValueMapping
    }

    #[inline]
    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        Traversal::KeyValueMapping(self.entries.into_iter())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V: PartialEq> PartialEq for Record<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for Record<V> {}

impl<V: Hash> Hash for Record<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<V> Default for Record<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut record = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = RecordIterator<'a, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for Record<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Record<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RecordVisitor<V> {
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::de::Visitor<'de> for RecordVisitor<V> {
    type Value = Record<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Record<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor {
            value_marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
