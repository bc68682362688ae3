// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Builds the configured repository implementation at startup.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::domain::repository::{ClientRepository, StorageBackend};
use crate::infrastructure::db::Database;
use crate::infrastructure::repositories::postgres_client::PostgresClientRepository;
use crate::infrastructure::repositories::InMemoryClientRepository;

/// Resolve the storage backend into a live repository. For PostgreSQL this
/// opens the connection pool and bootstraps the schema.
pub async fn create_client_repository(
    backend: &StorageBackend,
) -> Result<Arc<dyn ClientRepository>> {
    match backend {
        StorageBackend::InMemory => {
            info!("Using in-memory client repository");
            Ok(Arc::new(InMemoryClientRepository::new()))
        }
        StorageBackend::PostgreSQL(config) => {
            let database = Database::new(&config.connection_string)
                .await
                .context("Failed to connect to PostgreSQL")?;
            database
                .ensure_schema()
                .await
                .context("Failed to bootstrap the clients schema")?;
            info!("Using PostgreSQL client repository");
            Ok(Arc::new(PostgresClientRepository::new(
                database.get_pool().clone(),
            )))
        }
    }
}
