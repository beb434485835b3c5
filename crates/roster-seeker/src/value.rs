//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a
//! record. Records queried through seeker expose their fields as borrowed
//! strings; anything else (missing fields, nulls, nested data) is [`Value::None`].

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use roster_seeker::Value;
///
/// struct Applicant {
///     name: String,
///     referrer: Option<String>,
/// }
///
/// fn accessor<'a>(applicant: &'a Applicant, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&applicant.name),
///         "referrer" => applicant.referrer.as_deref().into(),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Field not present, null, or not a string.
    None,
}

impl<'a> Value<'a> {
    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            Value::None => None,
        }
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Value::None, Value::String)
    }
}

/// Returns `true` if `haystack` contains `needle` after lower-casing both.
///
/// `needle` is expected to be lower-cased already; the haystack is folded
/// on the fly.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }
    haystack.to_lowercase().contains(needle)
}
