//! Query conditions
//!
//! [`Conditions`] is an immutable filter: an ordered mapping from
//! attribute name to a comparison predicate. An empty set matches
//! every record. Builders follow the same copy-on-write `with` style
//! as [`Attributes`](crate::Attributes).

use crate::value::AttrValue;
use serde::{Deserialize, Serialize};

/// Comparison operators understood by the remote attribute store.
///
/// The substitute backend's SQL translator supports only [`Operator::Eq`];
/// the rest exist so a condition built for the real store can travel
/// through this layer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// String prefix match.
    BeginsWith,
    /// Substring / set membership.
    Contains,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operator::Eq => "EQ",
            Operator::Ne => "NE",
            Operator::Lt => "LT",
            Operator::Le => "LE",
            Operator::Gt => "GT",
            Operator::Ge => "GE",
            Operator::BeginsWith => "BEGINS_WITH",
            Operator::Contains => "CONTAINS",
        };
        f.write_str(name)
    }
}

/// One comparison predicate: an operator plus its operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Comparison operator.
    pub operator: Operator,
    /// Operand values; equality carries exactly one.
    pub operands: Vec<AttrValue>,
}

impl Condition {
    /// Build a predicate from an operator and operands.
    pub fn new(operator: Operator, operands: Vec<AttrValue>) -> Self {
        Self { operator, operands }
    }

    /// Equality against a single value.
    pub fn equal_to(value: impl Into<AttrValue>) -> Self {
        Self {
            operator: Operator::Eq,
            operands: vec![value.into()],
        }
    }
}

/// An immutable, ordered set of named predicates.
///
/// Iteration order is insertion order; the SQL translator relies on
/// it to keep placeholders and bound values aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    entries: Vec<(String, Condition)>,
}

impl Conditions {
    /// The match-all filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a set with one predicate added or replaced.
    pub fn with(&self, name: impl Into<String>, condition: Condition) -> Self {
        let name = name.into();
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = condition,
            None => entries.push((name, condition)),
        }
        Self { entries }
    }

    /// Shorthand for adding an equality predicate.
    pub fn with_eq(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.with(name, Condition::equal_to(value))
    }

    /// Look up the predicate on an attribute.
    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for the match-all filter.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, condition)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }
}
