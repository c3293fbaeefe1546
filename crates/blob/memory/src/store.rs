use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use uuid::Uuid;

use depot_blob::error::BlobError;
use depot_blob::store::BlobStore;

/// In-memory [`BlobStore`] backed by a [`DashMap`].
///
/// Intended for tests and local development; contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    data: DashMap<Uuid, Bytes>,
}

impl MemoryBlobStore {
    /// Create a new, empty in-memory blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no blobs. Handy for test assertions.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, id: Uuid, data: Bytes) -> Result<u64, BlobError> {
        // Use the `entry` API for atomicity: only insert if vacant.
        match self.data.entry(id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(BlobError::AlreadyExists(id)),
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                let len = data.len() as u64;
                vacant.insert(data);
                Ok(len)
            }
        }
    }

    async fn get(&self, id: Uuid) -> Result<Bytes, BlobError> {
        self.data
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(BlobError::NotFound(id))
    }

    async fn size(&self, id: Uuid) -> Result<u64, BlobError> {
        self.data
            .get(&id)
            .map(|entry| entry.len() as u64)
            .ok_or(BlobError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BlobError> {
        Ok(self.data.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_size_delete() {
        let store = MemoryBlobStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.put(id, Bytes::from_static(b"hello")).await.unwrap(), 5);
        assert_eq!(store.get(id).await.unwrap(), Bytes::from_static(b"hello"));
        assert_eq!(store.size(id).await.unwrap(), 5);
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_put_is_rejected() {
        let store = MemoryBlobStore::new();
        let id = Uuid::new_v4();

        store.put(id, Bytes::from_static(b"a")).await.unwrap();
        assert!(matches!(
            store.put(id, Bytes::from_static(b"b")).await.unwrap_err(),
            BlobError::AlreadyExists(_)
        ));
    }
}
