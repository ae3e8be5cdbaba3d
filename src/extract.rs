use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::models::{StickerRecord, StickerScan};

// ── Selectors ────────────────────────────────────────────────────────────────

static STICKER_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".sticker").unwrap());

static IMG_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

static NAME_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".name").unwrap());

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("File not found at {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("Cannot read file at {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractionError {
    /// True when the input file is missing or cannot be opened, as opposed to a
    /// failure while reading or decoding its contents.
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::Unreadable { .. })
    }
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Read an HTML fragment from `path` and pull out every sticker in document order.
pub fn extract_sticker_data(path: &Path) -> Result<Vec<StickerRecord>, ExtractionError> {
    let html = read_fragment(path)?;
    let scan = scan_fragment(&html);
    tracing::debug!(
        path = %path.display(),
        records = scan.records.len(),
        skipped = scan.skipped,
        "scanned sticker fragment"
    );
    Ok(scan.records)
}

pub fn extract_from_html(html: &str) -> Vec<StickerRecord> {
    scan_fragment(html).records
}

/// Parse `html` leniently and collect one record per complete `.sticker` container.
///
/// A container needs both an `img` carrying a `src` attribute and a `.name`
/// element somewhere below it; containers missing either are counted in
/// `skipped` and otherwise ignored.
pub fn scan_fragment(html: &str) -> StickerScan {
    let fragment = Html::parse_fragment(html);
    let mut scan = StickerScan::default();

    for (index, container) in fragment.select(&STICKER_SEL).enumerate() {
        match read_container(container) {
            Some(record) => scan.records.push(record),
            None => {
                tracing::debug!(index, "sticker container missing image source or name");
                scan.skipped += 1;
            }
        }
    }

    scan
}

// ── File access ──────────────────────────────────────────────────────────────

fn read_fragment(path: &Path) -> Result<String, ExtractionError> {
    fs::read_to_string(path).map_err(|source| classify_read_error(path, source))
}

fn classify_read_error(path: &Path, source: io::Error) -> ExtractionError {
    let path = path.to_path_buf();
    match source.kind() {
        io::ErrorKind::NotFound => ExtractionError::FileNotFound { path },
        io::ErrorKind::PermissionDenied => ExtractionError::Unreadable { path, source },
        _ => ExtractionError::Read { path, source },
    }
}

// ── Field extraction ─────────────────────────────────────────────────────────

fn read_container(container: ElementRef<'_>) -> Option<StickerRecord> {
    // Only the first image counts; a first image without `src` is not rescued by a later one.
    let src = container
        .select(&IMG_SEL)
        .next()
        .and_then(|img| img.value().attr("src"))?;

    let name = container
        .select(&NAME_SEL)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())?;

    Some(StickerRecord::new(src, name))
}
