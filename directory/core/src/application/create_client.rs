// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::error::DirectoryError;
use crate::domain::client::{Client, ClientPayload};
use crate::domain::repository::ClientRepository;

/// Persist a new client record.
///
/// Callers are expected to run [`validate_create`] on the payload first;
/// the use case itself only enforces identifier uniqueness.
///
/// [`validate_create`]: crate::application::validators::validate_create
#[async_trait]
pub trait CreateClientUseCase: Send + Sync {
    async fn handle(&self, payload: ClientPayload) -> Result<(), DirectoryError>;
}

pub struct StandardCreateClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl StandardCreateClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CreateClientUseCase for StandardCreateClientUseCase {
    async fn handle(&self, payload: ClientPayload) -> Result<(), DirectoryError> {
        let client = Client::from_payload(payload);
        self.repository.create(&client).await?;

        metrics::counter!("patron_clients_created_total").increment(1);
        info!(client_id = %client.id, "created client record");
        Ok(())
    }
}
