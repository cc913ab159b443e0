//! Positional join of per-chunk annotations onto their chunks.

use crate::error::ChunkError;
use crate::models::ChunkGroup;

/// Prefix every chunk with its annotation: element `i` of each key becomes
/// `annotations[i] + "\n" + chunks[i]`.
///
/// Output keys mirror the keys of `chunks`. Annotation keys with no chunk
/// counterpart are ignored; a missing annotation key counts as an empty
/// sequence.
///
/// # Errors
///
/// [`ChunkError::LengthMismatch`] when the sequences for any key differ in
/// length. Nothing is returned for the other keys in that case.
pub fn join_context(chunks: &ChunkGroup, annotations: &ChunkGroup) -> Result<ChunkGroup, ChunkError> {
    let mut joined = ChunkGroup::new();

    for (key, texts) in chunks.iter() {
        let notes = annotations.get(key).unwrap_or_default();
        if notes.len() != texts.len() {
            return Err(ChunkError::LengthMismatch {
                key: key.clone(),
                chunks: texts.len(),
                annotations: notes.len(),
            });
        }

        joined.extend(
            key,
            notes
                .iter()
                .zip(texts)
                .map(|(note, text)| format!("{note}\n{text}")),
        );
    }

    Ok(joined)
}
