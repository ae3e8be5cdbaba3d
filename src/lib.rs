//! Pull `{src, name}` sticker records out of a saved gallery fragment and
//! store them as JSON.

pub mod export;
pub mod extract;
pub mod models;
pub mod run;

pub use export::{load_records, save_to_json, LoadError, WriteError};
pub use extract::{extract_from_html, extract_sticker_data, scan_fragment, ExtractionError};
pub use models::{StickerRecord, StickerScan};
pub use run::{run, RunOutcome, DEFAULT_INPUT, DEFAULT_OUTPUT};
