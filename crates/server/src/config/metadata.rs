use serde::Deserialize;

use depot_metadata_postgres::PostgresConfig;

/// Metadata store (`PostgreSQL`) configuration.
#[derive(Debug, Deserialize)]
pub struct MetadataConfig {
    /// `PostgreSQL` connection URL.
    ///
    /// The `DEPOT_POSTGRES_URL` environment variable takes precedence when
    /// set, so deployments can keep credentials out of the config file.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Database schema for the documents table.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Prefix applied to table names.
    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,
    /// SSL mode (`disable`, `prefer`, `require`, `verify-ca`, `verify-full`).
    pub ssl_mode: Option<String>,
    /// Bounded startup connection attempts before the process gives up.
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
    /// Seconds between startup connection attempts.
    #[serde(default = "default_connect_retry_delay")]
    pub connect_retry_delay_seconds: u64,
}

impl MetadataConfig {
    /// Resolve into the backend crate's [`PostgresConfig`], applying the
    /// `DEPOT_POSTGRES_URL` environment override.
    pub fn to_postgres_config(&self) -> PostgresConfig {
        let url = std::env::var("DEPOT_POSTGRES_URL").unwrap_or_else(|_| self.url.clone());
        PostgresConfig {
            url,
            pool_size: self.pool_size,
            schema: self.schema.clone(),
            table_prefix: self.table_prefix.clone(),
            ssl_mode: self.ssl_mode.clone(),
            connect_attempts: self.connect_attempts,
            connect_retry_delay_seconds: self.connect_retry_delay_seconds,
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
            schema: default_schema(),
            table_prefix: default_table_prefix(),
            ssl_mode: None,
            connect_attempts: default_connect_attempts(),
            connect_retry_delay_seconds: default_connect_retry_delay(),
        }
    }
}

fn default_url() -> String {
    "postgres://localhost:5432/depot".to_owned()
}

fn default_pool_size() -> u32 {
    5
}

fn default_schema() -> String {
    "public".to_owned()
}

fn default_table_prefix() -> String {
    "depot_".to_owned()
}

fn default_connect_attempts() -> u32 {
    5
}

fn default_connect_retry_delay() -> u64 {
    2
}
