//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field name,
//! an operator, and a comparison value.

use crate::op::Op;
use crate::value::{contains_folded, Value};

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use roster_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("company", Op::IContains, "ACME");
/// assert!(clause.matches(&Value::String("Acme Corp")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    ///
    /// For [`Op::IContains`] the pattern is lower-cased once here so that
    /// matching only has to fold the field side.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        let value = match (op, value.into()) {
            (Op::IContains, ClauseValue::String(pattern)) => {
                ClauseValue::String(pattern.to_lowercase())
            }
            (_, value) => value,
        };
        Clause {
            field: field.into(),
            op,
            value,
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `false` if the field is missing or the operator does not fit
    /// the clause value, such as `In` paired with a lone string.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        let Value::String(field) = field_value else {
            // A missing field never satisfies a positive assertion.
            return false;
        };
        match (&self.value, self.op) {
            (ClauseValue::String(pattern), Op::Eq) => *field == pattern.as_str(),
            (ClauseValue::String(pattern), Op::IContains) => contains_folded(field, pattern),
            (ClauseValue::Set(set), Op::In) => set.iter().any(|member| member == field),
            _ => false,
        }
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source record, `ClauseValue`
/// owns its data so it can be stored in query definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    /// A single string.
    String(String),
    /// A set of strings, used with [`Op::In`].
    Set(Vec<String>),
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(set: Vec<String>) -> Self {
        ClauseValue::Set(set)
    }
}
