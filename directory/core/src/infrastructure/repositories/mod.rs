// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! # Repository Implementations
//!
//! | Implementation | Backing store |
//! |----------------|---------------|
//! | [`InMemoryClientRepository`] | Process-local `HashMap`, lost on restart |
//! | [`postgres_client::PostgresClientRepository`] | PostgreSQL `clients` table |

pub mod postgres_client;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::client::{Client, ClientId};
use crate::domain::repository::{ClientRepository, RepositoryError};

/// Reference repository backed by a process-local map. The default backend
/// for development and tests.
#[derive(Clone, Default)]
pub struct InMemoryClientRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn get_all(&self) -> Result<Vec<Client>, RepositoryError> {
        let clients = self.clients.read();
        Ok(clients.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError> {
        let clients = self.clients.read();
        Ok(clients.get(id).cloned())
    }

    async fn create(&self, client: &Client) -> Result<(), RepositoryError> {
        let mut clients = self.clients.write();
        if clients.contains_key(&client.id) {
            return Err(RepositoryError::Duplicate(client.id.to_string()));
        }
        clients.insert(client.id.clone(), client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> Result<(), RepositoryError> {
        let mut clients = self.clients.write();
        // A record that vanished since the caller's existence check stays
        // absent; the write is a silent no-op.
        if let Some(existing) = clients.get_mut(&client.id) {
            *existing = client.clone();
        }
        Ok(())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Client>, RepositoryError> {
        let needle = name.to_lowercase();
        let clients = self.clients.read();
        Ok(clients
            .values()
            .filter(|client| {
                client.first_name.to_lowercase() == needle
                    || client.last_name.to_lowercase() == needle
            })
            .cloned()
            .collect())
    }
}
