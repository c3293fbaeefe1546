mod blob;
mod metadata;
mod server;

pub use blob::*;
pub use metadata::*;
pub use server::*;

use serde::Deserialize;

/// Top-level configuration for the depot server, loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct DepotConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Blob storage configuration.
    #[serde(default)]
    pub blob: BlobConfig,
    /// Metadata store configuration.
    #[serde(default)]
    pub metadata: MetadataConfig,
}
