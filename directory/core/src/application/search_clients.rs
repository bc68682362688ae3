// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::error::DirectoryError;
use crate::domain::client::Client;
use crate::domain::repository::ClientRepository;

/// Find clients whose first or last name equals the query, ignoring case.
/// An empty result is a normal outcome, not an error.
#[async_trait]
pub trait SearchClientsUseCase: Send + Sync {
    async fn handle(&self, name: &str) -> Result<Vec<Client>, DirectoryError>;
}

pub struct StandardSearchClientsUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl StandardSearchClientsUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SearchClientsUseCase for StandardSearchClientsUseCase {
    async fn handle(&self, name: &str) -> Result<Vec<Client>, DirectoryError> {
        let matches = self.repository.search_by_name(name).await?;
        tracing::debug!(query = %name, count = matches.len(), "searched client records");
        Ok(matches)
    }
}
