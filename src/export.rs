use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::models::StickerRecord;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("could not serialize stickers: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a sticker list: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write `records` to `path` as a pretty-printed JSON array, replacing any existing file.
///
/// The document goes to a temporary file beside `path` that is renamed over it
/// once complete; on failure `path` keeps its previous contents.
pub fn save_to_json(records: &[StickerRecord], path: &Path) -> Result<(), WriteError> {
    let json = render_json(records)?;
    replace_file(path, |file| file.write_all(json.as_bytes()))?;
    tracing::info!(path = %path.display(), count = records.len(), "wrote sticker json");
    Ok(())
}

fn replace_file<F>(path: &Path, write: F) -> Result<(), WriteError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let io_err = |source: io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    write(tmp.as_file_mut()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Two-space indentation, non-ASCII characters emitted as-is.
pub fn render_json(records: &[StickerRecord]) -> Result<String, WriteError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Read back a file produced by [`save_to_json`].
pub fn load_records(path: &Path) -> Result<Vec<StickerRecord>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
