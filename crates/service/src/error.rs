use thiserror::Error;
use uuid::Uuid;

use depot_blob::BlobError;
use depot_metadata::MetadataError;

/// Errors surfaced by the document service.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No document exists with the given id.
    #[error("document not found: {0}")]
    NotFound(Uuid),

    /// The blob store failed.
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// The metadata store failed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}
