use thiserror::Error;

/// Errors raised by the chunking core.
///
/// Parse ambiguities (fragments matching no key, fragments matching two)
/// are handled by policy in [`crate::partition`] and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// The token ceiling must be a positive integer.
    #[error("chunk ceiling must be > 0 (got {0})")]
    InvalidCeiling(usize),

    /// Chunks and annotations for a key are not the same length.
    #[error("key '{key}' has {chunks} chunks but {annotations} annotations")]
    LengthMismatch {
        key: String,
        chunks: usize,
        annotations: usize,
    },
}
