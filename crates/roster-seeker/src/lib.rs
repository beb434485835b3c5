//! Seeker - query engine for string-keyed record collections.
//!
//! Records expose their fields as borrowed strings through an accessor
//! function (or the [`Seekable`] trait). Three independent stages run over
//! them:
//!
//! - [`Query::select`]: AND clauses plus an any-of OR group, using exact
//!   equality, case-insensitive substring and set membership
//! - [`sort_stable`]: stable multi-key ordering, either direction, with
//!   binary or case-folded collation
//! - [`Window::apply`]: offset/limit slicing that never fails
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{sort_stable, Dir, OrderBy, Query, Value, Window};
//!
//! struct Applicant {
//!     name: String,
//!     company: String,
//!     last_activity: String,
//! }
//!
//! fn accessor<'a>(a: &'a Applicant, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&a.name),
//!         "company" => Value::String(&a.company),
//!         "last_activity" => Value::String(&a.last_activity),
//!         _ => Value::None,
//!     }
//! }
//!
//! let applicants = vec![
//!     Applicant { name: "Alice".into(), company: "Acme".into(), last_activity: "2024-03-01".into() },
//!     Applicant { name: "Bob".into(), company: "Acme Corp".into(), last_activity: "2024-05-12".into() },
//!     Applicant { name: "Carl".into(), company: "Other".into(), last_activity: "2024-04-20".into() },
//! ];
//!
//! let query = Query::new()
//!     .or_icontains("name", "acme")
//!     .or_icontains("company", "acme");
//!
//! let mut results = query.select(&applicants, accessor);
//! sort_stable(&mut results, &[OrderBy::new("last_activity", Dir::Desc)], &accessor);
//! let first = Window::new(0, Some(1)).apply(results);
//! assert_eq!(first.len(), 1);
//! assert_eq!(first[0].name, "Bob");
//! ```
//!
//! A missing field ([`Value::None`]) never satisfies a clause and sorts after
//! every present value.

mod clause;
mod op;
mod ordering;
mod query;
mod traits;
mod value;
mod window;

pub use clause::{Clause, ClauseValue};
pub use op::Op;
pub use ordering::{sort_stable, Collation, Dir, OrderBy};
pub use query::Query;
pub use traits::Seekable;
pub use value::Value;
pub use window::Window;
