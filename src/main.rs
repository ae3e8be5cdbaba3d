use std::path::Path;

use sticker_scrape::{run, RunOutcome, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Path::new(DEFAULT_INPUT), Path::new(DEFAULT_OUTPUT)) {
        RunOutcome::Saved { count, path } => {
            tracing::debug!(count, path = %path.display(), "run finished")
        }
        outcome => tracing::debug!(?outcome, "run finished without output"),
    }
}
