use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during metadata store operations.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A record with the given id already exists.
    ///
    /// Ids are freshly generated per ingest, so this should never happen in
    /// practice. It is detected rather than silently overwritten.
    #[error("duplicate document id: {0}")]
    Duplicate(Uuid),

    /// Failed to connect to the backend.
    #[error("metadata connection error: {0}")]
    Connection(String),

    /// The backend failed to execute an operation.
    #[error("metadata backend error: {0}")]
    Backend(String),
}
