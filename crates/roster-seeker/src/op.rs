//! Comparison operators for query clauses.

/// How a clause compares a field against its value.
///
/// `Eq` and `IContains` take a single string; `In` takes a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Exact, case-sensitive equality.
    Eq,
    /// Substring match after lower-casing both sides. The record itself is
    /// never modified.
    IContains,
    /// Membership in a set of strings.
    In,
}
