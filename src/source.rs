// File: src/source.rs
use crate::core::types::{CourseCode, SyllabusRecord};
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where syllabi come from when the session cache does not have them.
pub trait SyllabusSource {
    fn fetch(&self, code: &CourseCode) -> Result<Vec<SyllabusRecord>>;
}

/// Reads `<dir>/<CODE>.json`, e.g. `MATH_3339.json` for `MATH 3339`.
/// Anything in the code other than letters, digits and `-` becomes `_`, so
/// the file always sits directly inside `dir`. A course without a file has
/// no syllabi.
#[derive(Debug, Clone)]
pub struct DirSyllabusSource {
    dir: PathBuf,
}

impl DirSyllabusSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, code: &CourseCode) -> PathBuf {
        let file_stem: String = code
            .as_str()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_stem}.json"))
    }
}

impl SyllabusSource for DirSyllabusSource {
    fn fetch(&self, code: &CourseCode) -> Result<Vec<SyllabusRecord>> {
        let path = self.path_for(code);
        match fs::read_to_string(&path) {
            Ok(json) => SyllabusRecord::parse_list(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No syllabus file for course");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
