// --- File: src/core/trie.rs
use crate::core::types::EntryId;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Debug)]
struct PrefixNode {
    children: HashMap<u8, usize>,
    /// Entries whose key ends exactly here, with the best weight seen for each.
    entries: Vec<(EntryId, u64)>,
    max_weight_in_subtree: u64,
}

impl PrefixNode {
    fn new() -> Self {
        Self { children: HashMap::new(), entries: Vec::new(), max_weight_in_subtree: 0 }
    }
}

/// A byte trie from search keys to index entries.
/// Built once when the index loads and only read afterwards.
#[derive(Clone, Debug)]
pub struct PrefixTrie {
    nodes: Vec<PrefixNode>,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self { nodes: vec![PrefixNode::new()] }
    }

    /// Maps `key` to `entry_id`. Re-inserting the same pair keeps the higher weight.
    /// O(k) where k is the key length.
    pub fn insert(&mut self, key: &str, entry_id: EntryId, weight: u64) {
        let mut node_idx = 0;
        let mut path = vec![0];
        for &byte in key.as_bytes() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(PrefixNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            path.push(node_idx);
        }

        let entries = &mut self.nodes[node_idx].entries;
        match entries.iter_mut().find(|(id, _)| *id == entry_id) {
            Some(existing) => existing.1 = existing.1.max(weight),
            None => entries.push((entry_id, weight)),
        }

        // Weights never decrease, so the subtree maxima only grow along the path.
        for idx in path {
            let node = &mut self.nodes[idx];
            node.max_weight_in_subtree = node.max_weight_in_subtree.max(weight);
        }
    }

    fn find(&self, prefix: &str) -> Option<usize> {
        let mut node_idx = 0;
        for &byte in prefix.as_bytes() {
            node_idx = *self.nodes[node_idx].children.get(&byte)?;
        }
        Some(node_idx)
    }

    /// Every entry with a key starting with `prefix`, with its best weight.
    pub fn matches(&self, prefix: &str) -> HashMap<EntryId, u64> {
        let mut hits = TopK::new(usize::MAX);
        if let Some(node_idx) = self.find(prefix) {
            self.dfs_search(node_idx, &mut hits);
        }
        hits.best
    }

    /// Top `k` distinct entries under `prefix`, highest weight first, ties by entry id.
    /// Subtrees whose best weight cannot reach the current k-th place are skipped.
    pub fn top_k(&self, prefix: &str, k: usize) -> Vec<(EntryId, u64)> {
        if k == 0 {
            return vec![];
        }
        let Some(node_idx) = self.find(prefix) else {
            return vec![];
        };

        let mut hits = TopK::new(k);
        self.dfs_search(node_idx, &mut hits);

        let mut ranked: Vec<(EntryId, u64)> = hits.best.into_iter().collect();
        ranked.sort_by_key(|&(id, weight)| (Reverse(weight), id));
        ranked.truncate(k);
        ranked
    }

    fn dfs_search(&self, node_idx: usize, hits: &mut TopK) {
        let node = &self.nodes[node_idx];
        for &(id, weight) in &node.entries {
            hits.offer(id, weight);
        }

        let mut children: Vec<usize> = node.children.values().copied().collect();
        children.sort_by_key(|&idx| Reverse(self.nodes[idx].max_weight_in_subtree));

        for child_idx in children {
            if self.nodes[child_idx].max_weight_in_subtree < hits.threshold() {
                // Children are sorted, nothing later can do better either.
                break;
            }
            self.dfs_search(child_idx, hits);
        }
    }
}

/// Entries collected by a trie walk.
///
/// `floor` is a min-heap of at most `k` weights, one per distinct entry, taken
/// when the entry is first seen. Later sightings can only raise an entry's
/// weight, so the heap's minimum never exceeds the true k-th best weight and
/// is safe to prune against.
struct TopK {
    k: usize,
    best: HashMap<EntryId, u64>,
    floor: BinaryHeap<Reverse<u64>>,
}

impl TopK {
    fn new(k: usize) -> Self {
        Self { k, best: HashMap::new(), floor: BinaryHeap::new() }
    }

    fn offer(&mut self, id: EntryId, weight: u64) {
        match self.best.get_mut(&id) {
            Some(slot) => *slot = (*slot).max(weight),
            None => {
                self.best.insert(id, weight);
                if self.k != usize::MAX {
                    self.floor.push(Reverse(weight));
                    if self.floor.len() > self.k {
                        self.floor.pop();
                    }
                }
            }
        }
    }

    /// Lower bound on the k-th best weight, or 0 while fewer than k are known.
    fn threshold(&self) -> u64 {
        match self.floor.peek() {
            Some(&Reverse(weight)) if self.floor.len() == self.k => weight,
            _ => 0,
        }
    }
}
