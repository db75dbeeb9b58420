//! # tagsplit-core
//!
//! Split a single OpenAPI description document into multiple self-contained
//! sub-documents, one per declared tag.
//!
//! Each output partition carries the operations declaring its tag (untagged
//! operations land in the `Default` partition) together with exactly the
//! schema components those operations transitively reference. The closure
//! over the schema dependency graph is computed by a worklist fixpoint that
//! is safe on cyclic graphs; see the [`split`] module for the pipeline.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use tagsplit_core::{load_document, write_partitions};
//! use tagsplit_core::split::split_by_tags;
//!
//! # fn main() -> Result<(), tagsplit_core::SplitError> {
//! let document = load_document("petstore.yaml")?;
//! let outcome = split_by_tags(&document);
//! write_partitions(&outcome, Path::new("out"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! Only schema components (`#/components/schemas/...`) participate in the
//! closure. References to reusable responses, parameters, examples, request
//! bodies, headers, links and callbacks are recorded but neither resolved
//! nor copied into the output. Schema references that name no component in
//! the source document are dead edges; they surface in
//! [`SplitOutcome`](split::SplitOutcome) as dangling-reference warnings.

pub mod openapi;
pub mod split;

mod error;
mod loader;
mod output;

pub use self::error::SplitError;
pub use self::loader::{DocumentFormat, load_document, parse_document};
pub use self::output::write_partitions;
