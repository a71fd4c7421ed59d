//! dripdb — paginated client abstraction for attribute stores
//!
//! dripdb wraps a schema-less, attribute-based document store behind
//! a small client surface:
//!
//! - [`Attributes`] / [`Conditions`]: immutable records and filters
//! - [`Valve`] / [`Dosage`]: the two-stage pagination protocol —
//!   a valve fetches one dosage (page) of matching records, and each
//!   dosage can fetch its successor
//! - [`Table`] / [`Frame`] / [`Item`]: thin facade for reading and
//!   writing individual records
//! - [`SqliteData`]: an embedded SQLite stand-in for the real remote
//!   store, for use without a network
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dripdb::{Attributes, Backend, Conditions, Credentials, ScanValve, SqliteData, Valve};
//!
//! # fn main() -> dripdb::Result<()> {
//! let data = Arc::new(
//!     SqliteData::temporary()?.with_collection("users", &["id"], &["name"])?,
//! );
//! let valve = ScanValve::new(data.clone());
//!
//! data.put("users", &Attributes::new().with("id", "1").with("name", "Bob"))?;
//!
//! let dosage = valve.fetch(
//!     &Credentials::test(),
//!     "users",
//!     &Conditions::new().with_eq("name", "Bob"),
//!     &["id"],
//! )?;
//! assert_eq!(dosage.records().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credentials;
pub mod item;
pub mod table;
pub mod valve;

pub use credentials::Credentials;
pub use item::Item;
pub use table::{Frame, Table};
pub use valve::{Dosage, ScanValve, Valve};

// Value model and backend capability, re-exported from the core crate.
pub use dripdb_core::{AttrValue, Attributes, Backend, Condition, Conditions, Error, Operator, Result};

// The substitute backend, re-exported for convenience.
pub use dripdb_mock::SqliteData;
