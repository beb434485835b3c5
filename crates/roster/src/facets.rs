//! Distinct values of categorical fields, for populating dashboard filters.

use std::collections::BTreeSet;

use roster_seeker::Seekable;

use crate::model::{fields, Candidate};

/// Sorted distinct string values of `field` across `records`.
///
/// Records where the field is missing or not a string are skipped.
pub fn distinct_values(records: &[Candidate], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.seeker_field_value(field).as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

pub fn sources(records: &[Candidate]) -> Vec<String> {
    distinct_values(records, fields::SOURCE)
}

pub fn application_types(records: &[Candidate]) -> Vec<String> {
    distinct_values(records, fields::APPLICATION_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Candidate> {
        let raw = json!([
            {"name": "a", "position": "p", "company": "c", "application_type": "referral",
             "source": "linkedin", "job_id": "1", "last_activity": "1", "team": "core"},
            {"name": "b", "position": "p", "company": "c", "application_type": "inbound",
             "source": "indeed", "job_id": "2", "last_activity": "2"},
            {"name": "c", "position": "p", "company": "c", "application_type": "referral",
             "source": "Linkedin", "job_id": "3", "last_activity": "3", "team": "core"}
        ]);
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn sources_are_sorted_and_distinct() {
        // Distinctness is case-sensitive; upper-case sorts first.
        assert_eq!(sources(&records()), vec!["Linkedin", "indeed", "linkedin"]);
    }

    #[test]
    fn application_types_are_sorted_and_distinct() {
        assert_eq!(application_types(&records()), vec!["inbound", "referral"]);
    }

    #[test]
    fn extra_fields_and_empty_input() {
        assert_eq!(distinct_values(&records(), "team"), vec!["core"]);
        assert!(sources(&[]).is_empty());
    }
}
