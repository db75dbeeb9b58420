//! Splitting an OpenAPI document into per-tag partitions.
//!
//! The split is a single-pass, in-memory batch transform in four phases:
//!
//! 1. [`TagRegistry`] enumerates the output partitions: the document's
//!    declared tags plus the synthetic [`DEFAULT_TAG`] bucket for untagged
//!    operations.
//! 2. [`partition_document`] walks every path and verb once, attaches each
//!    operation to the partitions its tags name, and seeds a
//!    [`TagAssignment`] with the operation's direct component references.
//! 3. [`resolve_closure`] propagates tags along schema reference edges with
//!    a worklist until the fixpoint: every component transitively reachable
//!    from a tag's operations carries that tag.
//! 4. [`distribute_components`] copies each schema component into every
//!    partition whose closure recorded it.
//!
//! [`split_by_tags`] runs the whole pipeline:
//!
//! ```rust
//! use tagsplit_core::openapi::OpenApi;
//! use tagsplit_core::split::split_by_tags;
//!
//! # fn main() -> Result<(), serde_json::Error> {
//! let document: OpenApi = serde_json::from_str(r#"{
//!     "openapi": "3.0.1",
//!     "info": {"title": "Pet Store", "version": "1.0.0"},
//!     "tags": [{"name": "Pet"}]
//! }"#)?;
//!
//! let outcome = split_by_tags(&document);
//! assert_eq!(outcome.partition_count(), 2); // "Pet" and "Default"
//! # Ok(())
//! # }
//! ```

mod distributor;
mod partition;
mod partitioner;
mod registry;
mod resolver;
mod splitter;

pub use self::distributor::distribute_components;
pub use self::partition::{Partition, SplitOutcome};
pub use self::partitioner::partition_document;
pub use self::registry::{DEFAULT_TAG, TagRegistry};
pub use self::resolver::{TagAssignment, resolve_closure};
pub use self::splitter::split_by_tags;
