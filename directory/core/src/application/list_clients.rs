// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::error::DirectoryError;
use crate::domain::client::Client;
use crate::domain::repository::ClientRepository;

/// List every client in the directory.
#[async_trait]
pub trait ListClientsUseCase: Send + Sync {
    async fn handle(&self) -> Result<Vec<Client>, DirectoryError>;
}

pub struct StandardListClientsUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl StandardListClientsUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ListClientsUseCase for StandardListClientsUseCase {
    async fn handle(&self) -> Result<Vec<Client>, DirectoryError> {
        let clients = self.repository.get_all().await?;
        tracing::debug!(count = clients.len(), "listed client records");
        Ok(clients)
    }
}
