//! Core types for dripdb
//!
//! This crate defines the value model shared by every backend:
//! - [`AttrValue`]: one typed attribute value
//! - [`Attributes`]: an immutable record of named values
//! - [`Conditions`]: an immutable filter over records
//! - [`Backend`]: the storage capability the pagination layer runs on
//! - [`Error`]: the crate-wide error taxonomy
//!
//! Everything here is a value type: cheap to clone, immutable once
//! built, and safe to share across threads without synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod backend;
pub mod conditions;
pub mod error;
pub mod value;

pub use attributes::Attributes;
pub use backend::Backend;
pub use conditions::{Condition, Conditions, Operator};
pub use error::{Error, Result};
pub use value::AttrValue;
