//! Token-budgeted aggregation of file blocks into chunks.
//!
//! For each folder key, normalized blocks are concatenated into a buffer
//! until adding the next one would push the buffer over `max_tokens`; the
//! buffer is then flushed as a chunk. A block that is over the ceiling on
//! its own is force-split into labeled parts.
//!
//! # Algorithm
//!
//! Per key, with an empty buffer, for each block in order:
//!
//! 1. Normalize: trim surrounding whitespace and remove every `=`.
//! 2. `t = count_tokens(block)`.
//! 3. If `t > max_tokens`: flush the buffer (if non-empty), then emit
//!    `ceil(t / max_tokens)` parts from [`split_with_context`].
//! 4. Else if `count_tokens(block + buffer) > max_tokens`: flush the buffer
//!    and start a new one holding only this block.
//! 5. Else append the block to the buffer with no separator.
//!
//! A non-empty buffer is flushed after the last block.
//!
//! # Force-split parts
//!
//! Parts are cut by character length, not token length, so a part may land
//! somewhat above or below the ceiling. Each part starts with a label line
//! `"{file_name} - Parte ({i}/{n})"` where `file_name` is the block's first
//! line.

use crate::error::ChunkError;
use crate::models::{ChunkGroup, FileBlock, Partition};
use crate::tokenizer::TokenCounter;

/// Default token ceiling per chunk.
pub const DEFAULT_MAX_TOKENS: usize = 6000;

/// Infix between the file name and the part counter in a part label.
const PART_INFIX: &str = " - Parte (";

/// Aggregate every key of `partition` into chunks of at most `max_tokens`.
///
/// Keys whose blocks all normalize to empty text produce no entry.
///
/// # Errors
///
/// [`ChunkError::InvalidCeiling`] when `max_tokens` is zero.
pub fn aggregate(
    partition: &Partition,
    counter: &dyn TokenCounter,
    max_tokens: usize,
) -> Result<ChunkGroup, ChunkError> {
    if max_tokens == 0 {
        return Err(ChunkError::InvalidCeiling(max_tokens));
    }

    let mut group = ChunkGroup::new();
    for (key, blocks) in partition.iter() {
        let chunks = aggregate_blocks(blocks, counter, max_tokens);
        if !chunks.is_empty() {
            group.extend(key, chunks);
        }
    }
    Ok(group)
}

/// Aggregate one key's blocks. `max_tokens` must be non-zero.
fn aggregate_blocks(
    blocks: &[FileBlock],
    counter: &dyn TokenCounter,
    max_tokens: usize,
) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();

    for block in blocks {
        let normalized = normalize_block(block);
        let tokens = counter.count_tokens(&normalized);

        if tokens > max_tokens {
            if !buffer.is_empty() {
                chunks.push(std::mem::take(&mut buffer));
            }
            let parts = tokens.div_ceil(max_tokens);
            chunks.extend(split_with_context(&normalized, parts));
        } else if counter.count_tokens(&format!("{normalized}{buffer}")) > max_tokens {
            if !buffer.is_empty() {
                chunks.push(std::mem::take(&mut buffer));
            }
            buffer = normalized;
        } else {
            buffer.push_str(&normalized);
        }
    }

    if !buffer.is_empty() {
        chunks.push(buffer);
    }

    chunks
}

/// Trim a block and strip the `=` characters used as separators in dumps.
pub fn normalize_block(block: &str) -> String {
    block.trim().replace('=', "")
}

/// Split `block` into `parts` labeled pieces.
///
/// The piece length is `ceil(chars / parts)`. When rounding would leave
/// fewer than `parts` pieces, the text is instead divided into `parts`
/// pieces whose lengths differ by at most one character, so the declared
/// total in each label always matches the number of pieces returned.
pub fn split_with_context(block: &str, parts: usize) -> Vec<String> {
    let parts = parts.max(1);
    let file_name = block.split('\n').next().unwrap_or_default();

    split_runs(block, parts)
        .into_iter()
        .enumerate()
        .map(|(i, run)| format!("{}\n{}", part_label(file_name, i + 1, parts), run))
        .collect()
}

/// Format the label line for part `index` of `total`.
pub fn part_label(file_name: &str, index: usize, total: usize) -> String {
    format!("{file_name}{PART_INFIX}{index}/{total})")
}

/// A parsed force-split label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartLabel<'a> {
    pub file_name: &'a str,
    pub index: usize,
    pub total: usize,
}

/// Split a chunk produced by [`split_with_context`] into its label and body.
///
/// Returns `None` for chunks whose first line is not a part label.
pub fn parse_part(chunk: &str) -> Option<(PartLabel<'_>, &str)> {
    let (first_line, body) = chunk.split_once('\n')?;
    let (file_name, counter) = first_line.rsplit_once(PART_INFIX)?;
    let (index, total) = counter.strip_suffix(')')?.split_once('/')?;
    let label = PartLabel {
        file_name,
        index: index.parse().ok()?,
        total: total.parse().ok()?,
    };
    (label.index >= 1 && label.index <= label.total).then_some((label, body))
}

/// Cut `text` into exactly `parts` contiguous character runs.
fn split_runs(text: &str, parts: usize) -> Vec<&str> {
    // Byte offset of every char boundary, including the end of the text.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let len = bounds.len() - 1;

    let part_length = len.div_ceil(parts);
    let cuts: Vec<usize> = if part_length > 0 && len.div_ceil(part_length) == parts {
        (0..=parts).map(|i| (i * part_length).min(len)).collect()
    } else {
        let base = len / parts;
        let extra = len % parts;
        (0..=parts).map(|i| i * base + i.min(extra)).collect()
    };

    cuts.windows(2)
        .map(|w| &text[bounds[w[0]]..bounds[w[1]]])
        .collect()
}
