// File: src/persistence.rs
use crate::core::index::SearchIndex;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Loads a search index asset from disk.
pub fn load_index(path: &Path) -> Result<SearchIndex> {
    let file = File::open(path)?;
    let index = SearchIndex::from_reader(BufReader::new(file))?;
    info!(path = %path.display(), courses = index.len(), "Loaded search index");
    Ok(index)
}

/// Writes `index` as a pretty-printed JSON asset.
///
/// The file is written next to its destination and renamed into place, so a
/// reader never sees a half-written asset.
pub fn save_index(index: &SearchIndex, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, index.entries())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!(path = %path.display(), courses = index.len(), "Saved search index");
    Ok(())
}
