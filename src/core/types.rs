// src/core/types.rs
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an entry inside the loaded search index.
pub type EntryId = usize;

/// One course as it appears in the search index asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSearchEntry {
    /// Stable URL-safe identifier, e.g. `math-3339`.
    pub slug: String,
    /// Human-readable code, e.g. `MATH 3339`.
    pub course_code: String,
    pub course_title: String,
    /// Catalog blurb. `null` and a missing key both load as `None`.
    #[serde(default)]
    pub course_context: Option<String>,
}

/// A course code in its canonical lookup form: trimmed and uppercased.
///
/// Two codes that differ only in case or surrounding whitespace compare equal
/// once wrapped, which is what makes them usable as cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One offering's syllabus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusRecord {
    /// Academic term, e.g. `Fall 2024`.
    pub term: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    /// Where the syllabus document lives.
    pub url: String,
}

impl SyllabusRecord {
    pub fn validate(&self) -> Result<()> {
        if self.term.trim().is_empty() {
            return Err(CatalogError::InvalidSyllabus("empty `term`".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(CatalogError::InvalidSyllabus(format!(
                "empty `url` for term {}",
                self.term
            )));
        }
        Ok(())
    }

    /// Parses a JSON array of syllabus records, rejecting malformed ones.
    pub fn parse_list(json: &str) -> Result<Vec<SyllabusRecord>> {
        let records: Vec<SyllabusRecord> = serde_json::from_str(json)?;
        for record in &records {
            record.validate()?;
        }
        Ok(records)
    }
}
