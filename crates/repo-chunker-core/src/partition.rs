//! Folder partitioner for flattened repository dumps.
//!
//! A dump is a single text where each file starts with a marker line of the
//! form `File: /<path>`. The first path segment after a marker (text up to
//! the next `/` or newline) names either a top-level folder or, for files at
//! the repository root, the file itself. Those segments become the
//! [`FolderKey`]s of the resulting [`Partition`].
//!
//! # Algorithm
//!
//! 1. Scan every marker and collect the distinct first segments.
//! 2. Split the document on the marker; the text before the first marker is
//!    discarded.
//! 3. For each fragment, register it under `fragment.split('/')[0]` when that
//!    is a key, and under its first line when *that* is a key. Both checks are
//!    independent, so a fragment may be registered twice.
//! 4. Fragments matching neither are dropped.

use std::collections::BTreeSet;

use crate::models::{FolderKey, Partition};

/// Literal prefix that starts every file in a flattened dump.
pub const MARKER: &str = "File: /";

/// Collect the distinct first path segments that follow a [`MARKER`].
///
/// A segment runs up to the next `/` or `\n` (or end of input). Markers
/// followed directly by `/` or a newline contribute nothing.
pub fn marker_keys(document: &str) -> BTreeSet<FolderKey> {
    document
        .match_indices(MARKER)
        .filter_map(|(pos, _)| {
            let rest = &document[pos + MARKER.len()..];
            let end = rest.find(|c| c == '/' || c == '\n').unwrap_or(rest.len());
            let segment = &rest[..end];
            (!segment.is_empty()).then(|| segment.to_string())
        })
        .collect()
}

/// Split a flattened document into file blocks grouped by folder key.
///
/// Only keys with at least one block appear in the result. Blocks under a
/// key keep document order.
pub fn partition(document: &str) -> Partition {
    let keys = marker_keys(document);
    let mut partition = Partition::new();

    for fragment in document.split(MARKER).skip(1) {
        let folder = fragment.split('/').next().unwrap_or_default();
        if keys.contains(folder) {
            partition.push(folder, fragment);
        }

        let file_name = fragment.split('\n').next().unwrap_or_default();
        if keys.contains(file_name) {
            partition.push(file_name, fragment);
        }
    }

    partition
}
