// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! # Repository Abstraction Layer
//!
//! Persistence ports for the client directory. Implementations live in the
//! infrastructure layer; callers only ever see these traits.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`StorageBackend`] | Which persistence implementation to run against |
//! | [`ClientRepository`] | CRUD and name search over client records |
//! | [`RepositoryError`] | Failure taxonomy shared by every backend |

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientId};

/// Storage backend selection, resolved from configuration at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorageBackend {
    /// Volatile in-process store. The default; state is lost on restart.
    InMemory,
    /// PostgreSQL-backed store.
    PostgreSQL(PostgresConfig),
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub connection_string: String,
}

/// Persistence port for client records.
///
/// `update` is a best-effort write: a record that disappeared between the
/// caller's existence check and the write is left absent and the call still
/// succeeds. Callers that need the record to exist must check first.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Every record in the directory.
    async fn get_all(&self) -> Result<Vec<Client>, RepositoryError>;

    /// Look up a single record by identifier.
    async fn get_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError>;

    /// Insert a new record. Fails with [`RepositoryError::Duplicate`] when
    /// the identifier is already taken.
    async fn create(&self, client: &Client) -> Result<(), RepositoryError>;

    /// Replace the stored record with the same identifier, if it still
    /// exists.
    async fn update(&self, client: &Client) -> Result<(), RepositoryError>;

    /// Records whose first or last name equals `name`, ignoring case.
    /// Substring matches are not returned.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Client>, RepositoryError>;
}

/// Errors surfaced by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::Database(err.to_string()),
        }
    }
}
