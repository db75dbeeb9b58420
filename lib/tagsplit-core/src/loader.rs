//! Loading the source document from a file or a URL, in JSON or YAML.

use std::fs;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::error::SplitError;
use crate::openapi::OpenApi;

/// The two conventional serializations of an OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON serialization.
    Json,
    /// YAML serialization.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a location's file extension, when it has one.
    fn from_location(location: &str) -> Option<Self> {
        // Ignore any query string or fragment on URL locations.
        let path = location.split(['?', '#']).next().unwrap_or(location);
        let extension = Path::new(path).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guesses the format from the document text itself: JSON documents
    /// open with a brace.
    fn sniff(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('{' | '[') => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Loads and parses the document at `location`.
///
/// `location` is a filesystem path or an `http(s)` URL. Any read or parse
/// failure is fatal for the whole run: the closure computation needs a
/// fully-formed document, so no partial output is ever produced from a
/// broken one.
pub fn load_document(location: &str) -> Result<OpenApi, SplitError> {
    let text = read_location(location)?;
    let format = DocumentFormat::from_location(location)
        .unwrap_or_else(|| DocumentFormat::sniff(&text));
    debug!(%location, ?format, "loaded document");
    parse_document(&text, format)
}

/// Parses a document from text in the given format.
///
/// JSON goes through `serde_path_to_error` so a malformed document reports
/// the path of the offending element.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<OpenApi, SplitError> {
    match format {
        DocumentFormat::Json => {
            let deserializer = &mut serde_json::Deserializer::from_str(text);
            serde_path_to_error::deserialize(deserializer).map_err(|err| {
                SplitError::JsonParse {
                    path: err.path().to_string(),
                    error: err.into_inner(),
                }
            })
        }
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

fn read_location(location: &str) -> Result<String, SplitError> {
    if let Ok(uri) = Url::parse(location)
        && matches!(uri.scheme(), "http" | "https")
    {
        let response = reqwest::blocking::get(location)?.error_for_status()?;
        return Ok(response.text()?);
    }
    fs::read_to_string(location).map_err(|source| SplitError::Io {
        path: location.into(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::json("openapi.json", Some(DocumentFormat::Json))]
    #[case::yaml("openapi.yaml", Some(DocumentFormat::Yaml))]
    #[case::yml("specs/api.yml", Some(DocumentFormat::Yaml))]
    #[case::json_url("https://example.test/api.json", Some(DocumentFormat::Json))]
    #[case::unknown("openapi.txt", None)]
    #[case::bare("openapi", None)]
    fn should_pick_format_from_extension(
        #[case] location: &str,
        #[case] expected: Option<DocumentFormat>,
    ) {
        assert_eq!(DocumentFormat::from_location(location), expected);
    }

    #[rstest]
    #[case::object("  {\"openapi\": \"3.0.1\"}", DocumentFormat::Json)]
    #[case::yaml_document("openapi: 3.0.1\n", DocumentFormat::Yaml)]
    #[case::empty("", DocumentFormat::Yaml)]
    fn should_sniff_format_from_text(#[case] text: &str, #[case] expected: DocumentFormat) {
        assert_eq!(DocumentFormat::sniff(text), expected);
    }

    #[test]
    fn should_parse_json_document() {
        let document = parse_document(
            r#"{"openapi": "3.0.1", "info": {"title": "t", "version": "1"}}"#,
            DocumentFormat::Json,
        )
        .expect("should parse");

        assert_eq!(document.openapi, "3.0.1");
    }

    #[test]
    fn should_parse_yaml_document() {
        let text = "openapi: 3.0.1\ninfo:\n  title: t\n  version: '1'\npaths:\n  /pets:\n    get:\n      tags: [Pet]\n      responses:\n        '200':\n          description: ok\n";

        let document = parse_document(text, DocumentFormat::Yaml).expect("should parse");

        let item = document.paths.get("/pets").expect("path present");
        assert_eq!(
            item.get.as_ref().and_then(|op| op.tags.as_deref()),
            Some(&["Pet".to_owned()][..])
        );
    }

    #[test]
    fn should_report_json_path_on_parse_failure() {
        let error = parse_document(
            r#"{"openapi": "3.0.1", "paths": {"/pets": {"get": {"tags": "oops"}}}}"#,
            DocumentFormat::Json,
        )
        .expect_err("should fail");

        let SplitError::JsonParse { path, .. } = error else {
            panic!("expected a JSON parse error, got {error}");
        };
        assert!(path.contains("/pets"), "path was {path}");
    }

    #[test]
    fn should_fail_on_missing_file() {
        let error = load_document("/definitely/not/here.json").expect_err("should fail");

        assert!(matches!(error, SplitError::Io { .. }));
    }
}
