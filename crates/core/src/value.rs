//! Attribute values
//!
//! [`AttrValue`] is the tagged union of value kinds the remote
//! attribute store speaks. The client core only ever relies on the
//! string kind; the other kinds travel through opaquely and are
//! flattened to text when the substitute backend persists them.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// One typed attribute value.
///
/// Numbers are kept in their decimal string form, as they appear on
/// the wire, so no precision is lost in transit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrValue {
    /// String value.
    S(String),
    /// Number value, decimal string form.
    N(String),
    /// Boolean value.
    Bool(bool),
    /// Explicit null.
    Null,
    /// Binary value.
    B(Vec<u8>),
    /// Set of strings.
    Ss(Vec<String>),
}

impl AttrValue {
    /// Build a number value from anything displayable as a number.
    pub fn number(n: impl ToString) -> Self {
        AttrValue::N(n.to_string())
    }

    /// Build a binary value.
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        AttrValue::B(bytes.into())
    }

    /// The string payload, if this is a string value.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttrValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical text form, used when a backend stores the value in
    /// a text column.
    ///
    /// Strings and numbers are verbatim, booleans are `true`/`false`,
    /// null is the empty string, binary is standard base64, and
    /// string sets are a JSON array. The substitute backend reads
    /// every column back as [`AttrValue::S`], so richer typing does
    /// not survive a round trip through it.
    pub fn text(&self) -> String {
        match self {
            AttrValue::S(s) => s.clone(),
            AttrValue::N(n) => n.clone(),
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Null => String::new(),
            AttrValue::B(bytes) => BASE64.encode(bytes),
            // Serializing a Vec<String> to JSON cannot fail.
            AttrValue::Ss(items) => serde_json::to_string(items).unwrap_or_default(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::S(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::S(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}
