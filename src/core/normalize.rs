// File: src/core/normalize.rs
use crate::core::types::CourseSearchEntry;

/// Key weights. Code-level keys outrank words pulled from the title.
pub const CODE_WEIGHT: u64 = 3;
pub const PART_WEIGHT: u64 = 2;
pub const TITLE_WEIGHT: u64 = 1;

/// Uppercases and collapses runs of whitespace to one space.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a query into uppercase search terms, the same way titles are split.
pub fn query_terms(query: &str) -> Vec<String> {
    words(query).map(str::to_uppercase).collect()
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

/// Every key an entry can be found under, with its weight.
///
/// For `MATH 3339 / Statistics for Science` that is `MATH 3339`, `MATH3339`,
/// `MATH`, `3339`, `STATISTICS`, `FOR` and `SCIENCE`.
pub fn search_keys(entry: &CourseSearchEntry) -> Vec<(String, u64)> {
    let code = normalize_text(&entry.course_code);
    let mut keys = vec![(code.clone(), CODE_WEIGHT)];

    let compact: String = code.split(' ').collect();
    if compact != code {
        keys.push((compact, CODE_WEIGHT));
        for part in code.split(' ') {
            keys.push((part.to_string(), PART_WEIGHT));
        }
    }

    for word in words(&entry.course_title) {
        keys.push((word.to_uppercase(), TITLE_WEIGHT));
    }

    keys
}
