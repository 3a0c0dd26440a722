// crates/locex-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LocexError>;

/// Errors surfaced by the gazetteer store and the resolution pipeline.
///
/// "No rows matched" is never an error: lookups that find nothing return an
/// empty `Vec` (or `None`), and the candidate flows to the next stage's
/// remainder. Only genuine data-access failures end up here.
#[derive(Debug, Error)]
pub enum LocexError {
    /// The store rejected a query: connection lost, schema missing, bad SQL.
    /// The engine does not self-heal or rebuild the store; that belongs to
    /// the bootstrap step that populated it.
    #[error("gazetteer store failure: {0}")]
    Store(#[from] rusqlite::Error),

    /// No gazetteer database exists at the given path.
    #[error("gazetteer dataset not found at {0}")]
    NotFound(String),
}
