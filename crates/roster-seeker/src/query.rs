//! Composable record filters.
//!
//! A [`Query`] is assembled with chained calls and then run against a slice
//! through an accessor function. It only selects: ordering is done with
//! [`sort_stable`](crate::sort_stable) and slicing with
//! [`Window`](crate::Window), so each stage can be run and tested alone.

use crate::clause::{Clause, ClauseValue};
use crate::op::Op;
use crate::value::Value;

/// Filter predicates for one pass over a collection.
///
/// A record is selected when every `and` clause holds and at least one `or`
/// clause holds. An empty `or` group always holds.
///
/// # Example
///
/// ```
/// use roster_seeker::{Query, Value};
///
/// struct Row {
///     name: &'static str,
///     source: &'static str,
/// }
///
/// fn accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(row.name),
///         "source" => Value::String(row.source),
///         _ => Value::None,
///     }
/// }
///
/// let rows = vec![
///     Row { name: "bob", source: "linkedin" },
///     Row { name: "Alice", source: "referral" },
///     Row { name: "carl", source: "indeed" },
/// ];
///
/// let query = Query::new()
///     .and_in("source", ["linkedin", "referral"])
///     .or_icontains("name", "ALI");
///
/// let names: Vec<_> = query.select(&rows, accessor).iter().map(|r| r.name).collect();
/// assert_eq!(names, vec!["Alice"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
}

impl Query {
    /// A query that selects everything.
    pub fn new() -> Self {
        Query::default()
    }

    /// Requires `field op value` to hold.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an alternative to the `or` group.
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Requires `field` to equal one of `values`.
    pub fn and_in<I, S>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: Vec<String> = values.into_iter().map(Into::into).collect();
        self.and(field, Op::In, set)
    }

    pub fn or_icontains(self, field: &str, needle: &str) -> Self {
        self.or(field, Op::IContains, needle)
    }

    /// Evaluates both clause groups against one record.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let holds = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(&holds)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(&holds))
    }

    /// Matching records in input order.
    pub fn select<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect()
    }
}
