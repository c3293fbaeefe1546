use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use depot_core::DocumentRecord;
use depot_metadata::error::MetadataError;
use depot_metadata::store::MetadataStore;

/// In-memory [`MetadataStore`] backed by a [`DashMap`].
///
/// Intended for tests and local development; records are lost on drop.
/// Iteration order of [`list_all`](MetadataStore::list_all) is arbitrary,
/// matching the trait's "order unspecified" contract.
#[derive(Debug, Default)]
pub struct MemoryMetadataStore {
    records: DashMap<Uuid, DocumentRecord>,
}

impl MemoryMetadataStore {
    /// Create a new, empty in-memory metadata store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetadataStore for MemoryMetadataStore {
    async fn insert(&self, record: &DocumentRecord) -> Result<(), MetadataError> {
        match self.records.entry(record.id) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(MetadataError::Duplicate(record.id))
            }
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                vacant.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<DocumentRecord>, MetadataError> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_name_by_id(&self, id: Uuid) -> Result<Option<String>, MetadataError> {
        Ok(self.records.get(&id).map(|entry| entry.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(name: &str) -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            name: name.into(),
            uploaded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryMetadataStore::new();
        let rec = record("report.txt");

        store.insert(&rec).await.unwrap();
        assert_eq!(
            store.find_name_by_id(rec.id).await.unwrap().as_deref(),
            Some("report.txt")
        );
        assert_eq!(store.find_name_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryMetadataStore::new();
        let rec = record("a.bin");

        store.insert(&rec).await.unwrap();
        assert!(matches!(
            store.insert(&rec).await.unwrap_err(),
            MetadataError::Duplicate(dup) if dup == rec.id
        ));
    }

    #[tokio::test]
    async fn list_all_returns_every_record() {
        let store = MemoryMetadataStore::new();
        let a = record("a");
        let b = record("b");
        store.insert(&a).await.unwrap();
        store.insert(&b).await.unwrap();

        let mut all = store.list_all().await.unwrap();
        all.sort_by_key(|r| r.name.clone());
        assert_eq!(all, vec![a, b]);
    }
}
