//! Token counting abstraction.
//!
//! The chunker only ever asks "how many tokens is this text?". Concrete
//! BPE backends live in the `repo-chunker` app crate; this module ships the
//! trait and a character-ratio estimator that needs no model files.

/// Approximate characters-per-token ratio used by [`ApproxCounter`].
pub const CHARS_PER_TOKEN: usize = 4;

/// Counts tokens for a fixed encoding scheme.
///
/// Implementations must be deterministic: the same text always yields the
/// same count for the same encoding.
pub trait TokenCounter: Send + Sync {
    /// Encoding identifier (e.g. `"cl100k_base"`).
    fn encoding_name(&self) -> &str;
    /// Number of tokens in `text`.
    fn count_tokens(&self, text: &str) -> usize;
}

/// Heuristic counter: one token per 4 characters, rounded up.
///
/// Counts Unicode scalar values, not bytes, so multi-byte text is not
/// over-counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxCounter;

impl TokenCounter for ApproxCounter {
    fn encoding_name(&self) -> &str {
        "approx"
    }

    fn count_tokens(&self, text: &str) -> usize {
        text.chars().count().div_ceil(CHARS_PER_TOKEN)
    }
}
