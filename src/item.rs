//! Item facade
//!
//! [`Item`] wraps one fetched record together with its owning
//! [`Table`], so a caller can read attributes and navigate back to
//! the collection the record came from. The wrapper is as thin as
//! the record itself: reads come from the in-memory attributes, and
//! [`Item::put`] simply writes the merged record through the
//! backend.

use dripdb_core::{AttrValue, Attributes, Result};

use crate::table::Table;

/// One record plus the table it was fetched from.
#[derive(Clone, Debug)]
pub struct Item {
    attributes: Attributes,
    table: Table,
}

impl Item {
    pub(crate) fn new(attributes: Attributes, table: Table) -> Self {
        Self { attributes, table }
    }

    /// Read one attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Does the record carry the attribute?
    pub fn has(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// The full record.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The table this item was fetched from.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The record's identity: its attributes projected onto the
    /// table's key attribute names.
    pub fn key(&self) -> Attributes {
        self.attributes
            .only(self.table.keys().iter().map(String::as_str))
    }

    /// Write a changed attribute through the backend and return the
    /// updated item. The receiver is untouched.
    ///
    /// The write is a plain insert of the merged record; against the
    /// substitute backend, re-putting an existing key surfaces the
    /// primary-key constraint as a storage error.
    pub fn put(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> Result<Item> {
        let merged = self.attributes.with(name, value);
        self.table.backend().put(self.table.name(), &merged)?;
        Ok(Item {
            attributes: merged,
            table: self.table.clone(),
        })
    }
}
