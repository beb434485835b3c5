//! Error types for the roster service.

use std::path::PathBuf;

use thiserror::Error;

/// The backing data could not be read or parsed.
///
/// Fatal for the request that triggered the load; never retried.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read data source {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data source {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single rejected query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Name of the offending query parameter.
    pub param: &'static str,
    /// Short machine-readable kind, e.g. `int_parsing`.
    pub kind: &'static str,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldIssue {
    pub fn new(param: &'static str, kind: &'static str, message: impl Into<String>) -> Self {
        FieldIssue {
            param,
            kind,
            message: message.into(),
        }
    }
}

/// One or more query parameters were out of range or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid query parameters: {}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(issue: FieldIssue) -> Self {
        ValidationError {
            issues: vec![issue],
        }
    }
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.param, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Anything that can fail while answering an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_issue() {
        let err = ValidationError {
            issues: vec![
                FieldIssue::new("page", "greater_than_equal", "must be >= 1"),
                FieldIssue::new("per_page", "int_parsing", "not an integer"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid query parameters: page: must be >= 1; per_page: not an integer"
        );
    }

    #[test]
    fn read_error_names_the_path() {
        let err = DataSourceError::Read {
            path: PathBuf::from("data/candidates.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read data source data/candidates.json: gone"
        );
    }
}
