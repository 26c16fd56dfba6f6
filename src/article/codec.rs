//! # Persistence Codec
//!
//! Round-trips the article collection to a single JSON file.
//!
//! Writes are staged in a sibling `.tmp` file, fsynced, then renamed over
//! the data file, so a crash mid-write leaves the previous snapshot intact.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Article;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    #[error("Data file not found: {0}")]
    NotFound(String),

    #[error("Corrupt data file: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Read and decode the collection stored at `path`
pub fn load(path: &Path) -> CodecResult<Vec<Article>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CodecError::NotFound(path.display().to_string())
        } else {
            CodecError::Io(format!("failed to read {}: {}", path.display(), e))
        }
    })?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CodecError::Corrupt(format!("{}: {}", path.display(), e)))
}

/// Like [`load`], with a missing file read as an empty collection
pub fn load_or_empty(path: &Path) -> CodecResult<Vec<Article>> {
    match load(path) {
        Err(CodecError::NotFound(_)) => Ok(Vec::new()),
        other => other,
    }
}

/// Encode `articles` and replace the file at `path` with them
pub fn save(path: &Path, articles: &[Article]) -> CodecResult<()> {
    // Serialize before touching the filesystem
    let content = serde_json::to_vec_pretty(articles)
        .map_err(|e| CodecError::Io(format!("failed to encode collection: {}", e)))?;

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(|e| {
            CodecError::Io(format!("failed to create {}: {}", parent.display(), e))
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = write_synced(&temp_path, &content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CodecError::Io(format!("failed to replace {}: {}", path.display(), e))
    })?;

    // fsync the directory so the rename itself is durable
    if let Some(parent) = parent {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

fn write_synced(path: &Path, content: &[u8]) -> CodecResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| CodecError::Io(format!("failed to create {}: {}", path.display(), e)))?;

    file.write_all(content)
        .map_err(|e| CodecError::Io(format!("failed to write {}: {}", path.display(), e)))?;

    file.sync_all()
        .map_err(|e| CodecError::Io(format!("failed to fsync {}: {}", path.display(), e)))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "data.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
