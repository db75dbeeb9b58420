//! Enumeration of the output partitions.

use indexmap::IndexMap;

use crate::openapi::{OpenApi, Tag};

/// Name of the synthetic partition receiving untagged operations.
pub const DEFAULT_TAG: &str = "Default";

/// The ordered set of partition keys: the document's declared tags plus the
/// default tag.
///
/// Each key maps to its declared [`Tag`] descriptor, or to a synthesized one
/// carrying only the name. Building the registry cannot fail; a document
/// with no tag declarations still yields the default partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagRegistry {
    entries: IndexMap<String, Tag>,
}

impl TagRegistry {
    /// Collects the partition keys declared by a document, in declaration
    /// order, and appends the default tag.
    pub fn from_document(document: &OpenApi) -> Self {
        let mut entries = IndexMap::new();
        for tag in document.tags.iter().flatten() {
            entries
                .entry(tag.name.clone())
                .or_insert_with(|| tag.clone());
        }
        entries
            .entry(DEFAULT_TAG.to_owned())
            .or_insert_with(|| Tag::new(DEFAULT_TAG));
        Self { entries }
    }

    /// Whether a partition exists for the given tag name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over the partition keys and their tag descriptors, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(name, tag)| (name.as_str(), tag))
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty; never true for a built registry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
