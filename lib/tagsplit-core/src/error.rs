use std::path::PathBuf;

/// Errors that can occur while loading a document or writing partitions.
///
/// The split computation itself cannot fail: dangling references are dead
/// edges reported as warnings, not errors. Everything here comes from the
/// boundaries of the run.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum SplitError {
    /// Filesystem read or write failure.
    #[display("I/O error on {}: {source}", path.display())]
    #[from(skip)]
    Io {
        /// The file the operation failed on.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// HTTP fetch failure for a remote document location.
    Fetch(reqwest::Error),

    /// JSON document parse failure.
    ///
    /// Carries the JSON path at which deserialization failed.
    #[display("failed to parse JSON document at '{path}': {error}")]
    #[from(skip)]
    JsonParse {
        /// The JSON path where the error occurred.
        path: String,
        /// The underlying parse error.
        error: serde_json::Error,
    },

    /// YAML document parse failure.
    YamlParse(serde_yaml::Error),

    /// JSON serialization failure while writing a partition.
    Json(serde_json::Error),
}
