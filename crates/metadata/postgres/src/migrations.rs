use sqlx::PgPool;

use crate::config::PostgresConfig;

/// Run database migrations, creating required tables if they do not exist.
///
/// Creates the documents table in the configured schema with the configured
/// table prefix. `id` is the primary key; `name` and `uploaded_at` are
/// mandatory.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] if the DDL statement fails.
pub async fn run_migrations(pool: &PgPool, config: &PostgresConfig) -> Result<(), sqlx::Error> {
    let documents_table = config.documents_table();

    let create_documents = format!(
        "CREATE TABLE IF NOT EXISTS {documents_table} (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            uploaded_at TIMESTAMPTZ NOT NULL
        )"
    );

    sqlx::query(&create_documents).execute(pool).await?;

    Ok(())
}
