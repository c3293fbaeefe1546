use async_trait::async_trait;
use uuid::Uuid;

use depot_core::DocumentRecord;

use crate::error::MetadataError;

/// Trait for persisting document metadata records.
///
/// One record per document, keyed by id; `name` and `uploaded_at` are
/// mandatory. Records are append-only: there is no update or delete.
///
/// Implementations must be `Send + Sync` and safe for concurrent access;
/// inserts for distinct ids are independent and commute.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Insert exactly one record.
    ///
    /// Fails with [`MetadataError::Duplicate`] if a record with the same id
    /// already exists (never silently overwritten), or
    /// [`MetadataError::Backend`] on medium failure.
    async fn insert(&self, record: &DocumentRecord) -> Result<(), MetadataError>;

    /// Return every record. Order is unspecified; callers must not assume
    /// chronological ordering.
    async fn list_all(&self) -> Result<Vec<DocumentRecord>, MetadataError>;

    /// Look up the original filename for a document id.
    ///
    /// Returns `Ok(None)` when no record matches.
    async fn find_name_by_id(&self, id: Uuid) -> Result<Option<String>, MetadataError>;
}
