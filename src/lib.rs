// src/lib.rs

pub mod cache;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;
pub mod source;

pub use crate::cache::SyllabusCache;
pub use crate::core::index::{search_index, SearchHit, SearchIndex};
pub use crate::core::types::{CourseCode, CourseSearchEntry, SyllabusRecord};
pub use crate::error::{CatalogError, Result};
