//! Data types that flow through the chunking pipeline.
//!
//! Both mappings iterate keys in sorted order so that output artifacts are
//! deterministic; the sequences under each key keep document order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level folder name, or a bare file name at the repository root.
pub type FolderKey = String;

/// One file's text as cut out of the flattened document, starting with the
/// remainder of its marker line.
pub type FileBlock = String;

/// Mapping from folder key to the file blocks found under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    folders: BTreeMap<FolderKey, Vec<FileBlock>>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the block sequence for `key`, inserting an empty one first if
    /// the key has not been seen yet.
    pub fn get_or_insert_default(&mut self, key: &str) -> &mut Vec<FileBlock> {
        self.folders.entry(key.to_string()).or_default()
    }

    /// Append a block under `key`.
    pub fn push(&mut self, key: &str, block: &str) {
        self.get_or_insert_default(key).push(block.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&[FileBlock]> {
        self.folders.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FolderKey> {
        self.folders.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FolderKey, &Vec<FileBlock>)> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Total number of blocks across all keys (duplicates counted).
    pub fn block_count(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }
}

/// Mapping from folder key to an ordered sequence of texts.
///
/// Used for the aggregated chunks, for the per-chunk annotations, and for
/// the joined output. Serializes as a plain JSON object of string arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkGroup {
    groups: BTreeMap<FolderKey, Vec<String>>,
}

impl ChunkGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert_default(&mut self, key: &str) -> &mut Vec<String> {
        self.groups.entry(key.to_string()).or_default()
    }

    pub fn push(&mut self, key: &str, text: impl Into<String>) {
        self.get_or_insert_default(key).push(text.into());
    }

    /// Append every text from `texts` under `key`. The key is created even
    /// when `texts` is empty.
    pub fn extend<I>(&mut self, key: &str, texts: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.get_or_insert_default(key)
            .extend(texts.into_iter().map(Into::into));
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FolderKey> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FolderKey, &Vec<String>)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of texts across all keys.
    pub fn chunk_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl From<BTreeMap<FolderKey, Vec<String>>> for ChunkGroup {
    fn from(groups: BTreeMap<FolderKey, Vec<String>>) -> Self {
        Self { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_insert_default_creates_empty_sequence() {
        let mut p = Partition::new();
        assert!(p.get("kafka").is_none());
        assert!(p.get_or_insert_default("kafka").is_empty());
        assert_eq!(p.get("kafka"), Some(&[][..]));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_partition_push_keeps_order() {
        let mut p = Partition::new();
        p.push("src", "first");
        p.push("src", "second");
        p.push("docs", "third");
        assert_eq!(p.get("src").unwrap(), ["first", "second"]);
        assert_eq!(p.block_count(), 3);
        let keys: Vec<_> = p.keys().cloned().collect();
        assert_eq!(keys, vec!["docs", "src"]);
    }

    #[test]
    fn test_chunk_group_serializes_as_plain_object() {
        let mut g = ChunkGroup::new();
        g.push("kafka", "a");
        g.push("kafka", "b");
        g.extend("README.md", Vec::<String>::new());
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"README.md":[],"kafka":["a","b"]}"#);
        let back: ChunkGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.chunk_count(), 2);
    }
}
