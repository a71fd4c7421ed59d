//! Pagination protocol
//!
//! A [`Valve`] fetches one [`Dosage`] (page) of records matching a
//! condition set; the dosage knows whether more pages exist and can
//! fetch its successor. Walking dosages until `has_next()` is false
//! yields every matching record exactly once, barring concurrent
//! mutation of the collection.
//!
//! [`ScanValve`] is the concrete valve over any [`Backend`]: the
//! backend's eager scan supplies the full match set, and the valve
//! slices it into pages of a configured size (or hands everything
//! back as a single page).

use std::sync::Arc;

use tracing::debug;

use dripdb_core::{Attributes, Backend, Conditions, Error, Result};

use crate::credentials::Credentials;

/// Fetches the first page of a conditional scan.
pub trait Valve: Send + Sync {
    /// Fetch one dosage of records from `table` matching `conditions`.
    ///
    /// `credentials` is forwarded to the underlying store unchanged;
    /// `keys` names the table's key attributes. Inputs are never
    /// mutated. The returned dosage is never absent: zero matches
    /// yield an empty page with no successor.
    fn fetch(
        &self,
        credentials: &Credentials,
        table: &str,
        conditions: &Conditions,
        keys: &[&str],
    ) -> Result<Box<dyn Dosage>>;
}

/// One page of scan results plus the state to fetch the next page.
pub trait Dosage: Send {
    /// The records on this page. Stable across calls; re-reading
    /// never re-queries.
    fn records(&self) -> &[Attributes];

    /// Can another page be fetched?
    fn has_next(&self) -> bool;

    /// Fetch the next page. May block on I/O.
    ///
    /// Fails with [`Error::NoMorePages`] when [`Dosage::has_next`]
    /// is false.
    fn next_dosage(self: Box<Self>) -> Result<Box<dyn Dosage>>;
}

impl std::fmt::Debug for dyn Dosage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dosage")
            .field("records", &self.records().len())
            .field("has_next", &self.has_next())
            .finish()
    }
}

/// Valve that pages a backend's eager scan.
///
/// With no limit configured, every matching record arrives in one
/// dosage. With a limit, each dosage re-runs the scan and slices the
/// next chunk, so advancing pages neither repeats nor skips records
/// as long as the collection is not mutated in between.
pub struct ScanValve {
    backend: Arc<dyn Backend>,
    limit: Option<usize>,
}

impl ScanValve {
    /// Valve returning all matches as a single page.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            limit: None,
        }
    }

    /// Valve paging in chunks of `limit` records.
    ///
    /// A zero limit is normalized to unlimited: a page that can
    /// never carry a record would leave `has_next()` true forever
    /// and strand any caller draining the scan.
    pub fn paged(backend: Arc<dyn Backend>, limit: usize) -> Self {
        Self {
            backend,
            limit: (limit > 0).then_some(limit),
        }
    }
}

impl Valve for ScanValve {
    fn fetch(
        &self,
        credentials: &Credentials,
        table: &str,
        conditions: &Conditions,
        keys: &[&str],
    ) -> Result<Box<dyn Dosage>> {
        debug!(
            session = %credentials,
            table,
            predicates = conditions.len(),
            keys = keys.len(),
            "fetching first dosage"
        );
        let dosage = ScanDosage::fetch(
            self.backend.clone(),
            table.to_string(),
            conditions.clone(),
            self.limit,
            0,
        )?;
        Ok(Box::new(dosage))
    }
}

/// Page over a backend scan, with the scan offset as its cursor.
struct ScanDosage {
    backend: Arc<dyn Backend>,
    table: String,
    conditions: Conditions,
    limit: Option<usize>,
    /// Offset of the first record past this page.
    next_offset: usize,
    page: Vec<Attributes>,
    more: bool,
}

impl ScanDosage {
    fn fetch(
        backend: Arc<dyn Backend>,
        table: String,
        conditions: Conditions,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Self> {
        let rows = backend.iterate(&table, &conditions)?;
        let start = offset.min(rows.len());
        let end = match limit {
            Some(limit) => (start + limit).min(rows.len()),
            None => rows.len(),
        };
        let more = end < rows.len();
        debug!(
            table = table.as_str(),
            page = end - start,
            total = rows.len(),
            more,
            "sliced dosage"
        );
        Ok(Self {
            backend,
            table,
            conditions,
            limit,
            next_offset: end,
            page: rows[start..end].to_vec(),
            more,
        })
    }
}

impl Dosage for ScanDosage {
    fn records(&self) -> &[Attributes] {
        &self.page
    }

    fn has_next(&self) -> bool {
        self.more
    }

    fn next_dosage(self: Box<Self>) -> Result<Box<dyn Dosage>> {
        if !self.more {
            return Err(Error::NoMorePages);
        }
        let dosage = ScanDosage::fetch(
            self.backend,
            self.table,
            self.conditions,
            self.limit,
            self.next_offset,
        )?;
        Ok(Box::new(dosage))
    }
}
