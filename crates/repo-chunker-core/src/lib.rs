//! # repo-chunker core
//!
//! Pure logic for turning a flattened repository dump into token-bounded
//! chunks grouped by top-level folder: marker scanning and partitioning,
//! token-budgeted aggregation with force-splitting, and the positional
//! join of generated annotations back onto chunks.
//!
//! This crate contains no tokio, filesystem I/O, or tokenizer backends.
//! Callers supply a [`tokenizer::TokenCounter`] and, for annotation, an
//! [`annotate::Annotator`].
//!
//! ```rust
//! use repo_chunker_core::aggregate::aggregate;
//! use repo_chunker_core::partition::partition;
//! use repo_chunker_core::tokenizer::ApproxCounter;
//!
//! let doc = "File: /kafka/a.py\nprint(1)\nFile: /kafka/b.py\nprint(2)\n";
//! let group = aggregate(&partition(doc), &ApproxCounter, 6000).unwrap();
//! assert_eq!(group.get("kafka").map(|c| c.len()), Some(1));
//! ```

pub mod aggregate;
pub mod annotate;
pub mod error;
pub mod join;
pub mod models;
pub mod partition;
pub mod tokenizer;

pub use error::ChunkError;
pub use models::{ChunkGroup, FileBlock, FolderKey, Partition};
