use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use depot_blob::{BlobError, BlobStore};
use depot_core::{Document, DocumentRecord};
use depot_metadata::MetadataStore;

use crate::error::DocumentError;

/// A fetched document: the display filename plus the blob content.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Original filename, for the download's suggested save-name.
    pub name: String,
    /// The raw blob content.
    pub data: Bytes,
    /// Byte length, for the `Content-Length` response header.
    pub size: u64,
}

/// Orchestrates blob and metadata storage into a single document abstraction.
///
/// The two stores are independent key spaces kept in sync by this service:
/// a document is `present` exactly when both its blob and its record exist,
/// and `ingest` is the only transition that creates one. Both backends are
/// constructor-injected so their lifecycles belong to the caller.
pub struct DocumentService {
    blob: Arc<dyn BlobStore>,
    metadata: Arc<dyn MetadataStore>,
    base_url: String,
}

impl DocumentService {
    /// Create a new `DocumentService`.
    ///
    /// `base_url` is the service's public address used to derive download
    /// URLs (e.g. `http://localhost:8080`).
    pub fn new(
        blob: Arc<dyn BlobStore>,
        metadata: Arc<dyn MetadataStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            blob,
            metadata,
            base_url: base_url.into(),
        }
    }

    /// Ingest an uploaded file: assign an id, write the blob, then record
    /// the metadata.
    ///
    /// The id is a freshly generated 128-bit random UUID, so concurrent
    /// ingests never collide and no coordination with either store is
    /// needed. Write ordering is blob first: if the blob write fails no
    /// record is created, and if the record insert fails afterwards the
    /// just-written blob is reclaimed (best effort) so the failure leaves no
    /// orphan behind. No step is retried; one failure aborts the ingest.
    pub async fn ingest(&self, filename: &str, data: Bytes) -> Result<Document, DocumentError> {
        let id = Uuid::new_v4();

        let size = self.blob.put(id, data).await?;

        let record = DocumentRecord {
            id,
            name: filename.to_owned(),
            uploaded_at: Utc::now(),
        };

        if let Err(e) = self.metadata.insert(&record).await {
            tracing::error!(
                document_id = %id,
                error = %e,
                "metadata insert failed after blob write, reclaiming blob"
            );
            match self.blob.delete(id).await {
                Ok(_) => {}
                Err(cleanup) => {
                    // The blob is now orphaned: present on disk, absent from
                    // the index. Logged with its id so an operator can reclaim it.
                    tracing::error!(
                        document_id = %id,
                        error = %cleanup,
                        "orphaned blob left in storage"
                    );
                }
            }
            return Err(e.into());
        }

        tracing::info!(
            document_id = %id,
            name = %record.name,
            size_bytes = size,
            "document ingested"
        );

        Ok(Document::from_record(record, &self.base_url))
    }

    /// List every document, with download URLs derived from the base URL.
    ///
    /// Metadata-only: no blob access occurs. Order is unspecified.
    pub async fn list(&self) -> Result<Vec<Document>, DocumentError> {
        let records = self.metadata.list_all().await?;
        Ok(records
            .into_iter()
            .map(|record| Document::from_record(record, &self.base_url))
            .collect())
    }

    /// Fetch a document's filename and content by id.
    ///
    /// Metadata is resolved first: an unknown id fails without touching blob
    /// storage. A record whose blob has gone missing (removed out of band)
    /// is reported as not found to the client and logged as an inconsistency.
    pub async fn fetch(&self, id: Uuid) -> Result<FetchedDocument, DocumentError> {
        let Some(name) = self.metadata.find_name_by_id(id).await? else {
            return Err(DocumentError::NotFound(id));
        };

        let data = match self.blob.get(id).await {
            Ok(data) => data,
            Err(BlobError::NotFound(_)) => {
                tracing::error!(
                    document_id = %id,
                    "metadata record exists but blob is missing"
                );
                return Err(DocumentError::NotFound(id));
            }
            Err(e) => return Err(e.into()),
        };
        let size = self.blob.size(id).await.map_err(|e| match e {
            BlobError::NotFound(_) => DocumentError::NotFound(id),
            other => other.into(),
        })?;

        Ok(FetchedDocument { name, data, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use depot_blob_memory::MemoryBlobStore;
    use depot_metadata::MetadataError;
    use depot_metadata_memory::MemoryMetadataStore;

    const BASE: &str = "http://localhost:8080";

    fn service() -> (Arc<MemoryBlobStore>, Arc<MemoryMetadataStore>, DocumentService) {
        let blob = Arc::new(MemoryBlobStore::new());
        let metadata = Arc::new(MemoryMetadataStore::new());
        let service = DocumentService::new(blob.clone(), metadata.clone(), BASE);
        (blob, metadata, service)
    }

    /// Metadata store that fails every insert, for exercising the orphan
    /// cleanup path.
    struct FailingMetadataStore;

    #[async_trait]
    impl MetadataStore for FailingMetadataStore {
        async fn insert(&self, _record: &DocumentRecord) -> Result<(), MetadataError> {
            Err(MetadataError::Backend("disk on fire".into()))
        }

        async fn list_all(&self) -> Result<Vec<DocumentRecord>, MetadataError> {
            Ok(vec![])
        }

        async fn find_name_by_id(&self, _id: Uuid) -> Result<Option<String>, MetadataError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn ingest_then_fetch_roundtrips() {
        let (_, _, service) = service();

        let doc = service
            .ingest("report.txt", Bytes::from_static(b"hello"))
            .await
            .unwrap();
        assert_eq!(doc.name, "report.txt");
        assert_eq!(doc.url, format!("{BASE}/dl/{}", doc.id));

        let fetched = service.fetch(doc.id).await.unwrap();
        assert_eq!(fetched.name, "report.txt");
        assert_eq!(fetched.data, Bytes::from_static(b"hello"));
        assert_eq!(fetched.size, 5);
    }

    #[tokio::test]
    async fn ingested_ids_are_unique() {
        let (_, _, service) = service();

        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            let doc = service
                .ingest(&format!("file-{i}"), Bytes::from_static(b"x"))
                .await
                .unwrap();
            assert!(ids.insert(doc.id), "id {} was returned twice", doc.id);
        }
    }

    #[tokio::test]
    async fn fetch_unknown_id_is_not_found() {
        let (_, _, service) = service();

        let id = Uuid::new_v4();
        assert!(matches!(
            service.fetch(id).await.unwrap_err(),
            DocumentError::NotFound(missing) if missing == id
        ));
    }

    #[tokio::test]
    async fn fetch_is_stable_across_unrelated_uploads() {
        let (_, _, service) = service();

        let doc = service
            .ingest("stable.bin", Bytes::from_static(b"payload"))
            .await
            .unwrap();
        let first = service.fetch(doc.id).await.unwrap();

        for _ in 0..5 {
            service
                .ingest("noise.bin", Bytes::from_static(b"other"))
                .await
                .unwrap();
        }

        let second = service.fetch(doc.id).await.unwrap();
        assert_eq!(first.data, second.data);
        assert_eq!(first.name, second.name);
    }

    #[tokio::test]
    async fn list_returns_every_ingested_document() {
        let (_, _, service) = service();

        let mut expected = Vec::new();
        for i in 0..4 {
            let doc = service
                .ingest(&format!("doc-{i}.txt"), Bytes::from_static(b"content"))
                .await
                .unwrap();
            expected.push((doc.id, doc.name));
        }

        let mut listed: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();
        expected.sort();
        listed.sort();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn list_derives_urls() {
        let (_, _, service) = service();

        let doc = service
            .ingest("a.txt", Bytes::from_static(b"a"))
            .await
            .unwrap();
        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].url, format!("{BASE}/dl/{}", doc.id));
    }

    #[tokio::test]
    async fn failed_metadata_insert_reclaims_the_blob() {
        let blob = Arc::new(MemoryBlobStore::new());
        let service = DocumentService::new(blob.clone(), Arc::new(FailingMetadataStore), BASE);

        let err = service
            .ingest("doomed.txt", Bytes::from_static(b"bytes"))
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Metadata(_)));

        // The blob written before the failed insert must not linger.
        assert!(blob.is_empty());
    }

    #[tokio::test]
    async fn record_without_blob_is_not_found() {
        let (blob, metadata, service) = service();

        let doc = service
            .ingest("gone.txt", Bytes::from_static(b"bye"))
            .await
            .unwrap();
        // Remove the blob out of band; the record stays behind.
        assert!(blob.delete(doc.id).await.unwrap());
        assert_eq!(
            metadata.find_name_by_id(doc.id).await.unwrap().as_deref(),
            Some("gone.txt")
        );

        assert!(matches!(
            service.fetch(doc.id).await.unwrap_err(),
            DocumentError::NotFound(missing) if missing == doc.id
        ));
    }
}
