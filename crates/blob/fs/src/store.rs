use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use depot_blob::error::BlobError;
use depot_blob::store::BlobStore;

/// Filesystem-backed [`BlobStore`].
///
/// Blobs live in a single flat directory, one file per blob, named by the
/// blob's UUID with no extension. The UUID is the only path component ever
/// derived from request data, so client-supplied filenames can never escape
/// the storage root.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create a new `FsBlobStore` rooted at `root`, creating the directory
    /// (and any missing parents) if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::Io`] if the directory cannot be created.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, BlobError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| BlobError::Io(e.to_string()))?;
        Ok(Self { root })
    }

    /// Path of the file holding the blob with the given id.
    fn blob_path(&self, id: Uuid) -> PathBuf {
        self.root.join(id.to_string())
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, id: Uuid, data: Bytes) -> Result<u64, BlobError> {
        let path = self.blob_path(id);

        // create_new detects a pre-existing path atomically: ids are never
        // reused, so a conflict is an error rather than an overwrite.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => BlobError::AlreadyExists(id),
                _ => BlobError::Io(e.to_string()),
            })?;

        let write_result = async {
            file.write_all(&data).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = write_result {
            // Remove the partial file so a failed put leaves nothing readable
            // under this id.
            if let Err(cleanup) = fs::remove_file(&path).await {
                tracing::warn!(
                    blob_id = %id,
                    error = %cleanup,
                    "failed to remove partially written blob"
                );
            }
            return Err(BlobError::Io(e.to_string()));
        }

        Ok(data.len() as u64)
    }

    async fn get(&self, id: Uuid) -> Result<Bytes, BlobError> {
        match fs::read(self.blob_path(id)).await {
            Ok(contents) => Ok(Bytes::from(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobError::NotFound(id)),
            Err(e) => Err(BlobError::Io(e.to_string())),
        }
    }

    async fn size(&self, id: Uuid) -> Result<u64, BlobError> {
        match fs::metadata(self.blob_path(id)).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobError::NotFound(id)),
            Err(e) => Err(BlobError::Io(e.to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BlobError> {
        match fs::remove_file(self.blob_path(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BlobError::Io(e.to_string())),
        }
    }
}
