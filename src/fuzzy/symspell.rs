// File: src/fuzzy/symspell.rs
use crate::core::types::EntryId;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Typo-tolerant course code lookup based on the Symmetric Delete (SymSpell)
/// algorithm. Delete variants of every code are computed up front so a lookup
/// only costs the deletes of the query, independent of the catalog size.
#[derive(Clone, Debug)]
pub struct SymSpell {
    /// Maps a delete variant (e.g. "MTH 3339") to the entries it could have
    /// come from (e.g. the entry for "MATH 3339").
    deletes: HashMap<String, HashSet<EntryId>>,
    max_edit_distance: usize,
}

impl SymSpell {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            deletes: HashMap::new(),
            max_edit_distance,
        }
    }

    /// Registers every delete variant of `word` for `entry_id`.
    /// Complexity: O(k^d) variants for a word of length k and distance d.
    pub fn add_word(&mut self, word: &str, entry_id: EntryId) {
        for edit in self.generate_edits(word) {
            self.deletes.entry(edit).or_default().insert(entry_id);
        }
    }

    /// Entries reachable from `input` by deleting up to the configured number
    /// of characters on either side, in ascending id order.
    pub fn lookup(&self, input: &str) -> Vec<EntryId> {
        let mut candidates = BTreeSet::new();
        for edit in self.generate_edits(input) {
            if let Some(entry_ids) = self.deletes.get(&edit) {
                candidates.extend(entry_ids.iter().copied());
            }
        }
        candidates.into_iter().collect()
    }

    /// All variants within `max_edit_distance` deletes, including `word` itself.
    fn generate_edits(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        edits.insert(word.to_string());

        let mut current_edits = edits.clone();
        for _ in 0..self.max_edit_distance {
            let mut next_edits = HashSet::new();
            for edit in &current_edits {
                let chars: Vec<char> = edit.chars().collect();
                for i in 0..chars.len() {
                    let variant: String = chars
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, c)| c)
                        .collect();
                    next_edits.insert(variant);
                }
            }
            edits.extend(next_edits.iter().cloned());
            current_edits = next_edits;
        }

        edits
    }
}
