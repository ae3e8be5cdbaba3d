use serde::{Deserialize, Serialize};

/// One sticker pulled out of the gallery markup.
///
/// `src` is the raw `src` attribute of the image, kept exactly as written.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StickerRecord {
    pub src: String,
    pub name: String,
}

impl StickerRecord {
    pub fn new(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct StickerScan {
    pub records: Vec<StickerRecord>,
    /// Containers dropped because the image source or the name element was missing.
    pub skipped: usize,
}
