//! Writing partitions to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::SplitError;
use crate::split::{Partition, SplitOutcome};

/// Writes every partition of `outcome` into `output_dir` as pretty-printed
/// JSON, one file per tag.
///
/// A write failure affects only its own partition: the error is logged, the
/// remaining partitions are still written, and the run is not aborted.
/// Returns the paths actually written.
pub fn write_partitions(outcome: &SplitOutcome, output_dir: &Path) -> Vec<PathBuf> {
    let mut written = Vec::with_capacity(outcome.partition_count());
    for partition in outcome.partitions.values() {
        let path = output_dir.join(partition.file_name());
        match write_partition(partition, &path) {
            Ok(()) => {
                info!(path = %path.display(), tag = %partition.tag.name, "created split output");
                written.push(path);
            }
            Err(err) => {
                error!(path = %path.display(), %err, "failed to create split output");
            }
        }
    }
    written
}

fn write_partition(partition: &Partition, path: &Path) -> Result<(), SplitError> {
    let mut json = serde_json::to_string_pretty(&partition.document)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| SplitError::Io {
        path: path.to_owned(),
        source,
    })
}
