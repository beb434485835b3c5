//! Sort keys.
//!
//! An [`OrderBy`] names a field, a [`Dir`] and a [`Collation`]. A list of them
//! forms a lexicographic key: later entries only break ties left by earlier
//! ones.

use std::cmp::Ordering;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Orients an ascending comparison result.
    ///
    /// `Equal` is preserved, so ties stay in input order under a stable sort
    /// whichever way the keys run.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// String comparison rule for a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collation {
    /// Code point order of the stored text.
    #[default]
    Binary,
    /// Code point order after full Unicode lowercasing of each string.
    CaseFolded,
}

impl Collation {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Binary => a.cmp(b),
            Collation::CaseFolded if a.is_ascii() && b.is_ascii() => a
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
            // Whole-string lowercasing applies context rules such as the
            // word-final sigma, which per-char mapping cannot.
            Collation::CaseFolded => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
    pub collation: Collation,
}

impl OrderBy {
    /// A bytewise key on `field`.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
            collation: Collation::Binary,
        }
    }

    /// Compares this key ignoring case.
    pub fn case_folded(self) -> Self {
        OrderBy {
            collation: Collation::CaseFolded,
            ..self
        }
    }

    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.dir.apply(compare_values(a, b, self.collation))
    }
}

/// Ascending comparison of two field values. Missing values go last.
fn compare_values(a: &Value<'_>, b: &Value<'_>, collation: Collation) -> Ordering {
    match (a.as_str(), b.as_str()) {
        (Some(a), Some(b)) => collation.compare(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    orderings
        .iter()
        .map(|key| key.compare(&accessor(a, &key.field), &accessor(b, &key.field)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable in-place sort of `items` by `orderings`.
///
/// Records whose keys tie keep their relative order in both directions. With
/// no keys the slice is left as is.
pub fn sort_stable<T, F>(items: &mut [&T], orderings: &[OrderBy], accessor: &F)
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    if !orderings.is_empty() {
        items.sort_by(|a, b| compare_by_orderings(*a, *b, orderings, accessor));
    }
}
