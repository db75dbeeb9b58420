//! Command-line entry point: split an OpenAPI document by tags.
//!
//! ```text
//! tagsplit <input_openapi_file_or_url> <output_directory>
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use tagsplit_core::split::split_by_tags;
use tagsplit_core::{SplitError, load_document, write_partitions};

const USAGE: &str = "USAGE: tagsplit <input_openapi_file_or_url> <output_directory>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let (Ok(input), Ok(output_dir)) = (
        args.free_from_str::<String>(),
        args.free_from_str::<PathBuf>(),
    ) else {
        println!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&input, &output_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "split failed");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output_dir: &Path) -> Result<(), SplitError> {
    let document = load_document(input)?;
    let outcome = split_by_tags(&document);
    for reference in &outcome.dangling {
        warn!(%reference, "reference names no schema component in the source document");
    }
    write_partitions(&outcome, output_dir);
    Ok(())
}
