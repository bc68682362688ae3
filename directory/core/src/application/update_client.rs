// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! # Update Client Use Case
//!
//! Orchestrates the full update pipeline for a client record.
//!
//! # Flow
//!
//! 1. Validate the incoming payload (first empty field fails the request)
//! 2. Fetch the current record; an unknown id stops the pipeline
//! 3. Overlay the four mutable fields and persist the merged record
//! 4. Send the welcome notification to the client's email address
//! 5. Synchronize the client's documents from the external store
//!
//! # Error Handling
//!
//! The pipeline is deliberately not atomic. The repository write in step 3
//! commits before the collaborator calls in steps 4 and 5 run; a fault in
//! either collaborator surfaces as [`DirectoryError::ExternalService`] while
//! the persisted record keeps the new values. There is no retry and no
//! rollback. Step 5 only runs after step 4 succeeded.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::application::error::{DirectoryError, ServiceOrigin};
use crate::application::validators;
use crate::domain::client::{ClientId, ClientPayload};
use crate::domain::repository::ClientRepository;
use crate::domain::services::{DocumentSynchronizer, NotificationSender, TransientFault};

/// Greeting delivered after every successful profile update.
const WELCOME_MESSAGE: &str = "Hi there - welcome to your Patron portal.";

/// Update an existing client record and fan out to the downstream
/// collaborators.
///
/// A fault from either collaborator is reported to the caller even though
/// the repository write has already committed; callers observing an
/// [`DirectoryError::ExternalService`] must assume the new values are live.
#[async_trait]
pub trait UpdateClientUseCase: Send + Sync {
    async fn handle(&self, id: &ClientId, patch: ClientPayload) -> Result<(), DirectoryError>;
}

pub struct StandardUpdateClientUseCase {
    repository: Arc<dyn ClientRepository>,
    notifier: Arc<dyn NotificationSender>,
    doc_synchronizer: Arc<dyn DocumentSynchronizer>,
}

impl StandardUpdateClientUseCase {
    pub fn new(
        repository: Arc<dyn ClientRepository>,
        notifier: Arc<dyn NotificationSender>,
        doc_synchronizer: Arc<dyn DocumentSynchronizer>,
    ) -> Self {
        Self {
            repository,
            notifier,
            doc_synchronizer,
        }
    }

    fn external_failure(origin: ServiceOrigin, fault: TransientFault) -> DirectoryError {
        metrics::counter!("patron_external_faults_total", "origin" => origin.as_str())
            .increment(1);
        DirectoryError::ExternalService {
            origin,
            source: fault,
        }
    }
}

#[async_trait]
impl UpdateClientUseCase for StandardUpdateClientUseCase {
    async fn handle(&self, id: &ClientId, patch: ClientPayload) -> Result<(), DirectoryError> {
        let started = Instant::now();

        // Step 1: validate the mutable fields before any I/O.
        validators::validate_update(&patch)?;

        // Step 2: the record must exist; the id comes from the request
        // path, not the payload.
        let mut client = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(DirectoryError::NotFound)?;

        // Step 3: overlay the mutable fields and persist the merged record.
        // From here on the new values are committed.
        client.apply_update(patch);
        self.repository.update(&client).await?;
        info!(client_id = %client.id, "client record persisted");

        // Step 4: welcome notification, keyed by the updated email address.
        self.notifier
            .send(&client.email, WELCOME_MESSAGE)
            .await
            .map_err(|fault| {
                warn!(client_id = %client.id, error = %fault,
                    "notification delivery failed after persistence");
                Self::external_failure(ServiceOrigin::Notification, fault)
            })?;

        // Step 5: document synchronization, only after a delivered
        // notification.
        self.doc_synchronizer
            .sync_documents(&client.email)
            .await
            .map_err(|fault| {
                warn!(client_id = %client.id, error = %fault,
                    "document sync failed after persistence");
                Self::external_failure(ServiceOrigin::DocSync, fault)
            })?;

        metrics::counter!("patron_client_updates_total").increment(1);
        metrics::histogram!("patron_client_update_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        info!(client_id = %client.id, "client update pipeline completed");
        Ok(())
    }
}
