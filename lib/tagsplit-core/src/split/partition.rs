//! Partition and split-outcome types.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::openapi::{OpenApi, Tag};

/// One tag's output document under construction.
///
/// Created with the source document's global metadata copied over and empty
/// paths/components; the partitioner attaches operations and the distributor
/// fills in the schema components the closure demands.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// The tag descriptor this partition was created for.
    pub tag: Tag,

    /// The output document.
    pub document: OpenApi,
}

impl Partition {
    /// Creates an empty partition for `tag`, copying the verb-independent
    /// global blocks from the source document.
    pub fn for_tag(source: &OpenApi, tag: &Tag) -> Self {
        let document = OpenApi {
            openapi: source.openapi.clone(),
            info: source.info.clone(),
            servers: source.servers.clone(),
            security: source.security.clone(),
            tags: Some(vec![tag.clone()]),
            external_docs: source.external_docs.clone(),
            paths: IndexMap::new(),
            components: None,
            extensions: source.extensions.clone(),
        };
        Self {
            tag: tag.clone(),
            document,
        }
    }

    /// Output file name for this partition: the tag name with spaces
    /// replaced by hyphens, suffixed with `-APIs.json`.
    pub fn file_name(&self) -> String {
        format!("{}-APIs.json", self.tag.name.replace(' ', "-"))
    }
}

/// The result of splitting a document by tags.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    /// Output partitions keyed by tag name, in registry order (declared
    /// tags first, the default partition last).
    pub partitions: IndexMap<String, Partition>,

    /// Reference locations that named no schema component in the source
    /// document. Dead edges, reported for observability only.
    pub dangling: BTreeSet<String>,
}

impl SplitOutcome {
    /// Looks up a partition by tag name.
    pub fn partition(&self, tag: &str) -> Option<&Partition> {
        self.partitions.get(tag)
    }

    /// Number of partitions.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }
}
