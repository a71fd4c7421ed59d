//! Table and frame facade
//!
//! [`Table`] is the handle to one collection: it knows the key
//! attribute names, which backend to write through, and which valve
//! to read through. [`Frame`] is an immutable query over a table;
//! narrowing it with [`Frame::filter`] derives a new frame and never
//! touches the original. Neither carries logic of its own — writes
//! delegate to the backend, reads to the valve.

use std::sync::Arc;

use dripdb_core::{AttrValue, Attributes, Backend, Condition, Conditions, Result};

use crate::credentials::Credentials;
use crate::item::Item;
use crate::valve::{Dosage, Valve};

/// Handle to one collection of the attribute store.
#[derive(Clone)]
pub struct Table {
    name: String,
    keys: Vec<String>,
    backend: Arc<dyn Backend>,
    valve: Arc<dyn Valve>,
    credentials: Credentials,
}

impl Table {
    /// Wire a table handle to a backend and a valve.
    pub fn new(
        backend: Arc<dyn Backend>,
        valve: Arc<dyn Valve>,
        credentials: Credentials,
        name: impl Into<String>,
        keys: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
            backend,
            valve,
            credentials,
        }
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key attribute names.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Insert one record into the collection.
    pub fn put(&self, record: &Attributes) -> Result<()> {
        self.backend.put(&self.name, record)
    }

    /// Start an unfiltered frame over this table.
    pub fn frame(&self) -> Frame {
        Frame {
            table: self.clone(),
            conditions: Conditions::new(),
        }
    }

    pub(crate) fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

/// An immutable, filterable query over a table.
#[derive(Clone, Debug)]
pub struct Frame {
    table: Table,
    conditions: Conditions,
}

impl Frame {
    /// Derive a frame with one more predicate.
    pub fn filter(&self, name: impl Into<String>, condition: Condition) -> Frame {
        Frame {
            table: self.table.clone(),
            conditions: self.conditions.with(name, condition),
        }
    }

    /// Derive a frame with an equality predicate.
    pub fn filter_eq(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> Frame {
        Frame {
            table: self.table.clone(),
            conditions: self.conditions.with_eq(name, value),
        }
    }

    /// The conditions this frame carries.
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    /// Fetch the first dosage of matching records through the
    /// table's valve.
    pub fn fetch(&self) -> Result<Box<dyn Dosage>> {
        let keys: Vec<&str> = self.table.keys.iter().map(String::as_str).collect();
        self.table.valve.fetch(
            &self.table.credentials,
            &self.table.name,
            &self.conditions,
            &keys,
        )
    }

    /// Drain every page into items.
    pub fn items(&self) -> Result<Vec<Item>> {
        let mut dosage = self.fetch()?;
        let mut items = Vec::new();
        loop {
            for record in dosage.records() {
                items.push(Item::new(record.clone(), self.table.clone()));
            }
            if !dosage.has_next() {
                break;
            }
            dosage = dosage.next_dosage()?;
        }
        Ok(items)
    }
}
