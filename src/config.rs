//! Configuration loading for the catalog tools.
//! Reads catalog.toml from the current directory or the path in the CATALOG_CONFIG env var.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub syllabi: SyllabiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// External asset to use instead of the bundled catalog.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: default_limit() }
    }
}

fn default_limit() -> usize {
    8
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyllabiConfig {
    /// Directory holding one `<CODE>.json` file per course.
    pub dir: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load configuration from catalog.toml.
    /// Checks CATALOG_CONFIG first, then the current directory. No file means defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CATALOG_CONFIG")
            .unwrap_or_else(|_| "catalog.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_defaults_use_bundled_index() {
        let config = CatalogConfig::default();
        assert!(config.index.path.is_none());
        assert!(config.syllabi.dir.is_none());
        assert_eq!(config.search.limit, 8);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = CatalogConfig::from_toml("[syllabi]\ndir = \"data/syllabi\"\n").unwrap();
        assert_eq!(config.syllabi.dir.as_deref(), Some(Path::new("data/syllabi")));
        assert_eq!(config.search.limit, default_limit());
    }

    #[test]
    fn test_full_file() {
        let config = CatalogConfig::from_toml(
            "[index]\npath = \"catalog.json\"\n\n[search]\nlimit = 3\n",
        )
        .unwrap();
        assert_eq!(config.index.path.as_deref(), Some(Path::new("catalog.json")));
        assert_eq!(config.search.limit, 3);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = CatalogConfig::from_toml("[search]\nlimit = \"many\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load_from(&dir.path().join("catalog.toml")).unwrap();
        assert_eq!(config.search.limit, 8);
    }
}
