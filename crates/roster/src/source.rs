//! Record loading.
//!
//! A [`DataSource`] hands back the full candidate list on every call. There is
//! no caching: each request sees whatever the backing document holds at that
//! moment, and concurrent loads never interfere because nothing is written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DataSourceError;
use crate::model::Candidate;

/// Trait for candidate storage backends.
///
/// Implementations must be safe to call from many request handlers at once.
pub trait DataSource: Send + Sync {
    /// Loads every record, in source order.
    fn load(&self) -> Result<Vec<Candidate>, DataSourceError>;
}

/// Top-level shape of the candidates document.
#[derive(Debug, Deserialize)]
struct CandidateDocument {
    candidates: Vec<Candidate>,
}

/// Parses a candidates document: a JSON object whose `candidates` key holds
/// the record array.
pub fn parse_document(bytes: &[u8]) -> Result<Vec<Candidate>, serde_json::Error> {
    let document: CandidateDocument = serde_json::from_slice(bytes)?;
    Ok(document.candidates)
}

/// Reads a JSON document from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Candidate>, DataSourceError> {
        let bytes = fs::read(&self.path).map_err(|source| DataSourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_document(&bytes).map_err(|source| DataSourceError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded candidates");
        Ok(records)
    }
}

/// A fixed set of records, handed out as a fresh copy on every load.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Candidate>,
}

impl InMemorySource {
    pub fn new(records: Vec<Candidate>) -> Self {
        InMemorySource { records }
    }
}

impl DataSource for InMemorySource {
    fn load(&self) -> Result<Vec<Candidate>, DataSourceError> {
        Ok(self.records.clone())
    }
}
