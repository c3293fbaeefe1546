use serde::Deserialize;

/// Blob storage configuration.
#[derive(Debug, Deserialize)]
pub struct BlobConfig {
    /// Directory where uploaded files are stored, one flat file per blob.
    ///
    /// Created at startup if it does not exist. Containerized deployments
    /// typically mount a volume here (e.g. `/app/uploads`).
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> String {
    "uploads".to_owned()
}
