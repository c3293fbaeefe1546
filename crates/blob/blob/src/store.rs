use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::error::BlobError;

/// Pluggable blob storage backend for uploaded document content.
///
/// The store is a flat identifier-to-bytes map: no indexing, no capacity
/// management, no relation to the metadata that describes a blob. Once
/// written, a blob is immutable; there is no overwrite operation.
///
/// Implementations must be `Send + Sync` and safe for concurrent access.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `data` under `id` and return the number of bytes written.
    ///
    /// Fails with [`BlobError::AlreadyExists`] if a blob is already stored
    /// under `id`, and [`BlobError::Io`] on medium failure. A failed put
    /// must not leave readable partial content under `id`.
    async fn put(&self, id: Uuid, data: Bytes) -> Result<u64, BlobError>;

    /// Read the full content of the blob stored under `id`.
    async fn get(&self, id: Uuid) -> Result<Bytes, BlobError>;

    /// Return the byte length of the blob stored under `id`.
    async fn size(&self, id: Uuid) -> Result<u64, BlobError>;

    /// Delete the blob stored under `id`. Returns `true` if it existed.
    ///
    /// Not exposed over the API; used by the document service to reclaim a
    /// blob whose metadata insert failed.
    async fn delete(&self, id: Uuid) -> Result<bool, BlobError>;
}
