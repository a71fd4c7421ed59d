//! Attribute records
//!
//! [`Attributes`] is one item/row: an ordered mapping from attribute
//! name to [`AttrValue`]. Records are immutable; deriving a changed
//! record with [`Attributes::with`] yields a new instance and never
//! touches the original. Insertion order is preserved because the
//! substitute backend uses it as the column order on insert.

use crate::value::AttrValue;
use serde::{Deserialize, Serialize};

/// An immutable record of named attribute values.
///
/// Names are unique; re-adding an existing name replaces its value
/// in place, keeping the original position. Records are small, so
/// lookups are a linear walk over the backing vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a record with one attribute added or replaced.
    pub fn with(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let name = name.into();
        let value = value.into();
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => entries.push((name, value)),
        }
        Self { entries }
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Does this record carry the attribute?
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the record has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate over attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Project the record onto a subset of attribute names.
    ///
    /// The facade uses this to derive an item's key identity from
    /// its table's key attribute names.
    pub fn only<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        let wanted: Vec<&str> = names.into_iter().collect();
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(n, _)| wanted.contains(&n.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Attributes::new(), |acc, (n, v)| acc.with(n, v))
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
