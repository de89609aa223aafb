use crate::core::normalize::{normalize_text, query_terms, search_keys};
use crate::core::trie::PrefixTrie;
use crate::core::types::{CourseCode, CourseSearchEntry, EntryId};
use crate::error::{CatalogError, Result};
use crate::fuzzy::symspell::SymSpell;
use std::collections::HashMap;
use std::io::Read;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Course catalog compiled into the binary.
const BUNDLED_INDEX_JSON: &str = include_str!("../../data/search_index.json");

/// How many mistyped characters `suggest_codes` tolerates.
const TYPO_DISTANCE: usize = 1;

static BUNDLED: OnceLock<SearchIndex> = OnceLock::new();

/// The bundled course catalog, parsed on first use and shared afterwards.
///
/// Every call returns the same instance; only the first one does any work.
pub fn search_index() -> Result<&'static SearchIndex> {
    if let Some(index) = BUNDLED.get() {
        return Ok(index);
    }
    let index = SearchIndex::from_json_str(BUNDLED_INDEX_JSON)?;
    info!(courses = index.len(), "Loaded bundled search index");
    Ok(BUNDLED.get_or_init(|| index))
}

/// One search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub entry: &'a CourseSearchEntry,
    /// Higher is better. Code matches outrank title matches.
    pub score: u64,
}

/// Read-only, in-memory course catalog.
///
/// Entries keep the order of the source asset. Lookup tables are built once
/// at construction and never change.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<CourseSearchEntry>,
    by_slug: HashMap<String, EntryId>,
    by_code: HashMap<CourseCode, EntryId>,
    trie: PrefixTrie,
    symspell: SymSpell,
}

impl SearchIndex {
    /// Builds an index, rejecting empty identifiers and duplicate slugs or codes.
    pub fn from_entries(entries: Vec<CourseSearchEntry>) -> Result<Self> {
        let mut by_slug = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());
        let mut trie = PrefixTrie::new();
        let mut symspell = SymSpell::new(TYPO_DISTANCE);

        for (id, entry) in entries.iter().enumerate() {
            check_not_empty(id, "slug", &entry.slug)?;
            check_not_empty(id, "courseCode", &entry.course_code)?;
            check_not_empty(id, "courseTitle", &entry.course_title)?;

            if by_slug.insert(entry.slug.clone(), id).is_some() {
                return Err(CatalogError::DuplicateSlug(entry.slug.clone()));
            }
            let code = CourseCode::new(&entry.course_code);
            if by_code.insert(code.clone(), id).is_some() {
                return Err(CatalogError::DuplicateCode(code.to_string()));
            }

            for (key, weight) in search_keys(entry) {
                trie.insert(&key, id, weight);
            }
            symspell.add_word(&normalize_text(&entry.course_code), id);
        }

        debug!(courses = entries.len(), "Built search index");
        Ok(Self { entries, by_slug, by_code, trie, symspell })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CourseSearchEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<CourseSearchEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    /// All courses in asset order.
    pub fn entries(&self) -> &[CourseSearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&CourseSearchEntry> {
        self.by_slug.get(slug).map(|&id| &self.entries[id])
    }

    /// Case- and outer-whitespace-insensitive lookup by course code.
    pub fn get_by_code(&self, code: &str) -> Option<&CourseSearchEntry> {
        self.by_code
            .get(&CourseCode::new(code))
            .map(|&id| &self.entries[id])
    }

    /// Prefix search over course codes and title words.
    ///
    /// The whole query is tried as one prefix first (`MATH 33`). If that finds
    /// nothing, the query is split into words on anything that is not a letter
    /// or digit, and entries matching every word are returned instead
    /// (`intro programming`, `cosc-2436`).
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let normalized = normalize_text(query);
        if normalized.is_empty() || limit == 0 {
            return vec![];
        }

        let mut ranked = self.trie.top_k(&normalized, limit);
        if ranked.is_empty() {
            ranked = self.match_all_terms(&query_terms(query), limit);
        }

        ranked
            .into_iter()
            .map(|(id, score)| SearchHit { entry: &self.entries[id], score })
            .collect()
    }

    fn match_all_terms(&self, terms: &[String], limit: usize) -> Vec<(EntryId, u64)> {
        let mut per_term = terms.iter().map(|term| self.trie.matches(term));
        let Some(mut combined) = per_term.next() else {
            return vec![];
        };
        for matches in per_term {
            combined.retain(|id, score| match matches.get(id) {
                Some(weight) => {
                    *score += weight;
                    true
                }
                None => false,
            });
        }

        let mut ranked: Vec<(EntryId, u64)> = combined.into_iter().collect();
        ranked.sort_by_key(|&(id, score)| (std::cmp::Reverse(score), id));
        ranked.truncate(limit);
        ranked
    }

    /// Courses whose code is a likely typo of `query`, in asset order.
    pub fn suggest_codes(&self, query: &str) -> Vec<&CourseSearchEntry> {
        let normalized = normalize_text(query);
        if normalized.is_empty() {
            return vec![];
        }
        self.symspell
            .lookup(&normalized)
            .into_iter()
            .map(|id| &self.entries[id])
            .collect()
    }
}

fn check_not_empty(index: usize, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField { index, field });
    }
    Ok(())
}
