use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The stored metadata for a document: the row the metadata store persists.
///
/// `id` doubles as the blob storage key, so a record and its blob are two
/// entries in independent key spaces kept in sync by the document service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique identifier, assigned by the service at ingest time.
    pub id: Uuid,
    /// Original filename as supplied by the uploading client.
    ///
    /// Untrusted display text. Never used to build a filesystem path.
    pub name: String,
    /// When the service accepted the upload (service-assigned, not client-supplied).
    pub uploaded_at: DateTime<Utc>,
}

/// A document as presented to API clients: the stored record plus the
/// download URL derived from the service's external base address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier.
    pub id: Uuid,
    /// Original filename.
    pub name: String,
    /// Download URL (`{base}/dl/{id}`). Derived at read time, never stored.
    pub url: String,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Assemble a [`Document`] from a stored record and the external base URL.
    ///
    /// Any trailing slash on `base_url` is ignored so configured values like
    /// `http://localhost:8080/` don't produce a double slash.
    pub fn from_record(record: DocumentRecord, base_url: &str) -> Self {
        let url = format!("{}/dl/{}", base_url.trim_end_matches('/'), record.id);
        Self {
            id: record.id,
            name: record.name,
            url,
            uploaded_at: record.uploaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_url_is_derived_from_base() {
        let record = DocumentRecord {
            id: Uuid::nil(),
            name: "report.txt".into(),
            uploaded_at: Utc::now(),
        };
        let doc = Document::from_record(record, "http://localhost:8080");
        assert_eq!(
            doc.url,
            "http://localhost:8080/dl/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let record = DocumentRecord {
            id: Uuid::nil(),
            name: "a".into(),
            uploaded_at: Utc::now(),
        };
        let doc = Document::from_record(record, "https://depot.example.com/");
        assert!(doc.url.starts_with("https://depot.example.com/dl/"));
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let record = DocumentRecord {
            id: Uuid::new_v4(),
            name: "report.txt".into(),
            uploaded_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        };
        let doc = Document::from_record(record, "http://localhost:8080");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["uploaded_at"], "2024-05-01T12:00:00Z");
        assert_eq!(json["name"], "report.txt");
        assert!(json["url"].as_str().unwrap().contains("/dl/"));
    }
}
