//! Queries over dynamic JSON values.
//!
//! A [`serde_json::Value`] only reveals its shape at run time:
//!
//! - arrays are indexable sequences of elements
//! - objects are key/value mappings, enumerated in insertion order
//! - strings, numbers, booleans and `null` are opaque
//!
//! Elements and entries both come out as [`JsonItem`].
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use terminus::json::JsonItem;
//! use terminus::{QueryError, first, last_where};
//!
//! let document = json!({"1": "one", "2": "two", "3": "three"});
//! assert_eq!(
//!     first(&document),
//!     Ok(Some(JsonItem::Entry("1", &json!("one"))))
//! );
//! assert_eq!(
//!     last_where(&document, |item| {
//!         item.value().as_str().is_some_and(|text| text.starts_with('t'))
//!     }),
//!     Ok(Some(JsonItem::Entry("3", &json!("three"))))
//! );
//!
//! assert_eq!(first(&json!(42)), Err(QueryError::NotIterable));
//! ```

use serde_json::Value;

use crate::shape::{Collection, Shape, Traversal};

/// An array element or object entry of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonItem<'a> {
    /// An element of an array.
    Element(&'a Value),
    /// A `(key, value)` entry of an object.
    Entry(&'a str, &'a Value),
}

impl<'a> JsonItem<'a> {
    /// Returns the element, or the value of the entry.
    #[inline]
    pub const fn value(&self) -> &'a Value {
        match self {
            Self::Element(value) | Self::Entry(_, value) => *value,
        }
    }

    /// Returns the key of an entry.
    #[inline]
    pub const fn key(&self) -> Option<&'a str> {
        match self {
            Self::Element(_) => None,
            Self::Entry(key, _) => Some(*key),
        }
    }
}

type Elements<'a> = std::iter::Map<std::slice::Iter<'a, Value>, fn(&'a Value) -> JsonItem<'a>>;

type Entries<'a> =
    std::iter::Map<serde_json::map::Iter<'a>, fn((&'a String, &'a Value)) -> JsonItem<'a>>;

fn element(value: &Value) -> JsonItem<'_> {
    JsonItem::Element(value)
}

fn entry<'a>((key, value): (&'a String, &'a Value)) -> JsonItem<'a> {
    JsonItem::Entry(key.as_str(), value)
}

impl<'a> Collection for &'a Value {
    type Item = JsonItem<'a>;
    type Indexed = Elements<'a>;
    type Sequence = Entries<'a>;

    fn shape(&self) -> Shape {
        match self {
            Value::Array(_) => Shape::Indexable,
            Value::Object(_) => Shape::KeyValueMapping,
            _ => Shape::Opaque,
        }
    }

    fn into_traversal(self) -> Traversal<Self::Indexed, Self::Sequence> {
        match self {
            Value::Array(elements) => {
                Traversal::Indexable(elements.iter().map(element as fn(&'a Value) -> JsonItem<'a>))
            }
            Value::Object(entries) => Traversal::KeyValueMapping(
                entries
                    .iter()
                    .map(entry as fn((&'a String, &'a Value)) -> JsonItem<'a>),
            ),
            _ => Traversal::Opaque,
        }
    }
}
