// File: src/cache.rs
use crate::core::types::{CourseCode, SyllabusRecord};
use crate::error::Result;
use crate::source::SyllabusSource;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Syllabi already fetched during this session, keyed by normalized course code.
///
/// Entries never expire and there is no size bound. An empty list is a valid
/// cached value and is kept distinct from a missing key.
#[derive(Debug, Clone, Default)]
pub struct SyllabusCache {
    by_course: HashMap<CourseCode, Vec<SyllabusRecord>>,
}

impl SyllabusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `syllabi` for `code`, replacing whatever was there.
    pub fn set(&mut self, code: &str, syllabi: Vec<SyllabusRecord>) {
        let key = CourseCode::new(code);
        debug!(course = %key, records = syllabi.len(), "Caching syllabi");
        self.by_course.insert(key, syllabi);
    }

    pub fn get(&self, code: &str) -> Option<&[SyllabusRecord]> {
        self.by_course
            .get(&CourseCode::new(code))
            .map(Vec::as_slice)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_course.contains_key(&CourseCode::new(code))
    }

    /// Returns the cached syllabi, fetching and storing them on a miss.
    /// A failed fetch leaves the cache untouched.
    pub fn get_or_fetch<S: SyllabusSource + ?Sized>(
        &mut self,
        code: &str,
        source: &S,
    ) -> Result<&[SyllabusRecord]> {
        let records = match self.by_course.entry(CourseCode::new(code)) {
            Entry::Occupied(cached) => cached.into_mut(),
            Entry::Vacant(slot) => {
                let fetched = source.fetch(slot.key())?;
                debug!(course = %slot.key(), records = fetched.len(), "Fetched syllabi on cache miss");
                slot.insert(fetched)
            }
        };
        Ok(records.as_slice())
    }

    pub fn len(&self) -> usize {
        self.by_course.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_course.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_course.clear();
    }
}
