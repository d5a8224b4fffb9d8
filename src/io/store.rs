use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::model::fixture::Match;

/// Backing file used when neither the CLI nor the config names one
pub const DEFAULT_STORE_FILE: &str = "match_details.json";

/// Error type for store access. [`MatchStore::load`] swallows the read
/// variants; [`MatchStore::try_load`] surfaces them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not a valid match list: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize matches: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The JSON file holding the full match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStore {
    path: PathBuf,
}

impl MatchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MatchStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole list.
    ///
    /// A missing, unreadable or corrupt file yields an empty list. The
    /// discarded content is overwritten by the next save.
    pub fn load(&self) -> Vec<Match> {
        match self.try_load() {
            Ok(Some(matches)) => matches,
            Ok(None) => {
                debug!(path = %self.path.display(), "no match file yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "starting with an empty match list");
                Vec::new()
            }
        }
    }

    /// Strict read. `Ok(None)` when the file does not exist yet.
    pub fn try_load(&self) -> Result<Option<Vec<Match>>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::ReadError {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let matches: Vec<Match> =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        debug!(path = %self.path.display(), count = matches.len(), "loaded matches");
        Ok(Some(matches))
    }

    /// Overwrite the file with the whole list.
    pub fn save(&self, matches: &[Match]) -> Result<(), StoreError> {
        let content = to_json(matches)?;
        atomic_write(&self.path, &content).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;
        info!(path = %self.path.display(), count = matches.len(), "saved matches");
        Ok(())
    }
}

/// Serialize with 4-space indentation, non-ASCII kept as-is, no trailing newline.
pub fn to_json(matches: &[Match]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    matches.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `content` to `path` through a temp file + rename in the same directory.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
