//! Annotator trait for generating per-chunk context.
//!
//! An annotator receives one chunk plus the folder key it belongs to and
//! returns a short description of where the chunk sits in the repository.
//! Scheduling (concurrency, token budget, cooldown) is the caller's job;
//! the `repo-chunker` app crate provides it.

use anyhow::Result;
use async_trait::async_trait;

/// Output of a single annotation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Generated context text.
    pub text: String,
    /// Tokens charged for the request, used for rate budgeting.
    pub tokens_used: usize,
}

/// Produces an [`Annotation`] for a chunk.
///
/// Implementations own their retry policy; an `Err` is treated as final by
/// callers.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, chunk: &str, folder_key: &str) -> Result<Annotation>;
}
