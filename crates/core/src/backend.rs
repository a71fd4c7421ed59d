//! Storage backend capability
//!
//! Anything that can create collections, insert records, and run a
//! filtered scan can serve the pagination layer. The SQLite-backed
//! substitute in `dripdb-mock` is one implementation; an adapter for
//! the real remote store is another.

use crate::attributes::Attributes;
use crate::conditions::Conditions;
use crate::error::Result;

/// The storage capability the client surface runs on.
///
/// All calls are synchronous and block for the duration of their
/// underlying I/O. Implementations are shared behind an `Arc` and
/// must be safe to call from several threads, but concurrent `put`
/// and `iterate` on one collection carry no cross-call atomicity:
/// a reader may observe a partial set of concurrently inserted rows.
pub trait Backend: Send + Sync {
    /// Create a collection with the given key and non-key attributes.
    ///
    /// Fails with [`Error::InvalidSchema`](crate::Error::InvalidSchema)
    /// when `keys` is empty. Not idempotent: creating the same
    /// collection twice is a storage error.
    fn create_collection(&self, name: &str, keys: &[&str], attrs: &[&str]) -> Result<()>;

    /// Insert one record.
    ///
    /// Key presence is not validated here; a record missing a key
    /// attribute surfaces as a storage-level constraint failure.
    fn put(&self, name: &str, record: &Attributes) -> Result<()>;

    /// Scan a collection, returning every record matching the
    /// conditions as a complete in-memory snapshot, in the backend's
    /// scan order. Pagination is layered above this call.
    fn iterate(&self, name: &str, conditions: &Conditions) -> Result<Vec<Attributes>>;
}
