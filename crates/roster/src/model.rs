//! The candidate record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use roster_seeker::{Seekable, Value};

/// Field names understood by the query pipeline.
pub mod fields {
    pub const NAME: &str = "name";
    pub const POSITION: &str = "position";
    pub const COMPANY: &str = "company";
    pub const APPLICATION_TYPE: &str = "application_type";
    pub const SOURCE: &str = "source";
    pub const JOB_ID: &str = "job_id";
    pub const LAST_ACTIVITY: &str = "last_activity";
}

/// One job applicant.
///
/// The known fields are typed; every other field in the source document is
/// kept verbatim in [`Candidate::extra`] and written back out on
/// serialization, so records round-trip through the API without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub position: String,
    pub company: String,
    pub application_type: String,
    pub source: String,
    pub job_id: String,
    /// Lexicographically sortable timestamp, compared as a raw string.
    pub last_activity: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Seekable for Candidate {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            fields::NAME => Value::String(&self.name),
            fields::POSITION => Value::String(&self.position),
            fields::COMPANY => Value::String(&self.company),
            fields::APPLICATION_TYPE => Value::String(&self.application_type),
            fields::SOURCE => Value::String(&self.source),
            fields::JOB_ID => Value::String(&self.job_id),
            fields::LAST_ACTIVITY => Value::String(&self.last_activity),
            other => self.extra.get(other).and_then(JsonValue::as_str).into(),
        }
    }
}
