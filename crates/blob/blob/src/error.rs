use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during blob storage operations.
#[derive(Debug, Error)]
pub enum BlobError {
    /// No blob exists under the given identifier.
    #[error("blob not found: {0}")]
    NotFound(Uuid),

    /// A blob already exists under the given identifier.
    ///
    /// Identifiers are freshly generated per ingest and never reused, so a
    /// conflicting path means either an id collision or stray data in the
    /// storage root. Either way the write must not proceed.
    #[error("blob already exists: {0}")]
    AlreadyExists(Uuid),

    /// The underlying storage medium failed (disk full, permission denied, ...).
    #[error("blob storage error: {0}")]
    Io(String),
}
