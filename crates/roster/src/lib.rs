//! Roster - a read-only candidate listing service.
//!
//! Each request runs the same linear pipeline over a freshly loaded record
//! set:
//!
//! ```text
//! DataSource::load → filter → sort → paginate → assemble
//! ```
//!
//! - [`source`]: loading the candidate document
//! - [`criteria`]: request parameters and their validation
//! - [`pipeline`]: the filter, sort and pagination stages
//! - [`response`]: response shapes
//! - [`facets`]: distinct source and application-type values
//! - [`server`]: the HTTP routes
//!
//! # Example
//!
//! ```rust
//! use roster::criteria::{Criteria, ListParams, PageRequest, SortSpec};
//! use roster::model::Candidate;
//! use roster::pipeline;
//!
//! let records: Vec<Candidate> = serde_json::from_str(r#"[
//!     {"name": "bob", "position": "Engineer", "company": "Acme Corp",
//!      "application_type": "referral", "source": "linkedin", "job_id": "J-1",
//!      "last_activity": "2024-04-01"},
//!     {"name": "Alice", "position": "Designer", "company": "Other",
//!      "application_type": "inbound", "source": "indeed", "job_id": "J-2",
//!      "last_activity": "2024-05-01"}
//! ]"#).unwrap();
//!
//! let params = ListParams {
//!     criteria: Criteria { search: Some("acme".into()), ..Criteria::default() },
//!     sort: SortSpec::new("name", "asc"),
//!     page: PageRequest::new(1, 5).unwrap(),
//! };
//!
//! let response = pipeline::run(&records, &params);
//! assert_eq!(response.meta.total, 1);
//! assert_eq!(response.data[0].name, "bob");
//! ```

pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod facets;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod response;
pub mod server;
pub mod source;

pub use criteria::{Criteria, ListParams, PageRequest, SortKey, SortSpec};
pub use error::{ApiError, DataSourceError, ValidationError};
pub use model::Candidate;
pub use source::{DataSource, InMemorySource, JsonFileSource};
