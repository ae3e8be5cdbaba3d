use std::path::{Path, PathBuf};

use crate::export::save_to_json;
use crate::extract::extract_sticker_data;

/// Gallery markup saved from the sticker site.
pub const DEFAULT_INPUT: &str = "Untitled-2.html";
pub const DEFAULT_OUTPUT: &str = "stickers.json";

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { count: usize, path: PathBuf },
    NoData,
    WriteFailed,
}

/// Extract stickers from `input` and write them to `output`.
///
/// Every failure is reported on stdout and folded into the outcome; nothing here
/// aborts the process. `output` is only touched when at least one record was found.
pub fn run(input: &Path, output: &Path) -> RunOutcome {
    let records = match extract_sticker_data(input) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "sticker extraction failed");
            if e.is_file_access() {
                println!("Error: {}", e);
            } else {
                println!("An error occurred: {}", e);
            }
            Vec::new()
        }
    };

    if records.is_empty() {
        println!("No sticker data was extracted.");
        return RunOutcome::NoData;
    }

    match save_to_json(&records, output) {
        Ok(()) => {
            println!("Data successfully saved to {}", output.display());
            RunOutcome::Saved {
                count: records.len(),
                path: output.to_path_buf(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "saving sticker json failed");
            println!("Error saving to JSON file: {}", e);
            RunOutcome::WriteFailed
        }
    }
}
