//! Error types for the search compiler.
//!
//! All failures here are deterministic for a given input; there is no
//! transient-failure surface and nothing is ever retried. An omitted
//! predicate (for example an unnormalisable phone fragment) is not an error
//! at all — it simply contributes no filter condition.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// User input exceeded the configured query length. Callers map this to
    /// a client-visible bad-request class error.
    #[error("search query exceeds the maximum length of {max_length}")]
    QueryTooLong { max_length: usize },

    /// A caller asked for an entity that was never registered. A
    /// configuration/programming error, surfaced immediately.
    #[error("search definition not found for entity: {0}")]
    UnknownEntity(String),

    /// The configured provider name resolves to no backend.
    #[error("unknown search provider: {0}")]
    UnknownProvider(String),
}
