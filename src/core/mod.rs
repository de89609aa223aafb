// src/core/mod.rs

pub mod index;
pub mod normalize;
pub mod trie;
pub mod types;
