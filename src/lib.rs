//! # Snippets - named text snippets in SQLite
//!
//! Snippets provides:
//! - A single `snippets` table keyed by keyword
//! - Atomic upsert, exact lookup, sorted catalog and substring search
//! - Hidden snippets that stay out of listings but remain retrievable

pub mod snippet;
pub mod storage;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use snippet::{SearchHit, Snippet};
pub use storage::SnippetStore;

/// Result type alias for snippet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for snippet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
