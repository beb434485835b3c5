//! The [`Seekable`] trait for records with named, queryable fields.

use crate::value::Value;

/// A record whose fields can be looked up by name.
///
/// # Example
///
/// ```
/// use roster_seeker::{Query, Seekable, Value};
///
/// struct Opening {
///     title: String,
///     team: String,
/// }
///
/// impl Seekable for Opening {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "title" => Value::String(&self.title),
///             "team" => Value::String(&self.team),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let openings = vec![
///     Opening { title: "Backend Engineer".into(), team: "platform".into() },
///     Opening { title: "Designer".into(), team: "product".into() },
/// ];
///
/// let query = Query::new().or_icontains("title", "engineer");
/// assert_eq!(query.select(&openings, Opening::accessor).len(), 1);
/// ```
pub trait Seekable {
    /// Looks up `field`, or [`Value::None`] when the record has no string
    /// value under that name.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Free-function form of [`Seekable::seeker_field_value`], to pass as the
    /// accessor of [`Query::select`] and friends.
    ///
    /// [`Query::select`]: crate::Query::select
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        name: String,
        nickname: Option<String>,
    }

    impl Seekable for TestItem {
        fn seeker_field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                "nickname" => self.nickname.as_deref().into(),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn seekable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            nickname: None,
        };

        assert_eq!(item.seeker_field_value("name"), Value::String("test"));
        assert_eq!(item.seeker_field_value("nickname"), Value::None);
        assert_eq!(item.seeker_field_value("unknown"), Value::None);
    }

    #[test]
    fn seekable_accessor() {
        let item = TestItem {
            name: "test".to_string(),
            nickname: Some("t".to_string()),
        };

        assert_eq!(TestItem::accessor(&item, "nickname"), Value::String("t"));
    }
}
