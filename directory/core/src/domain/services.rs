// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Ports for the external collaborators the update pipeline talks to after
//! persistence: the notification gateway and the document store.

use async_trait::async_trait;

/// Outbound notification gateway.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver `message` to the client's email address.
    async fn send(&self, email: &str, message: &str) -> Result<(), TransientFault>;
}

/// External document store the directory keeps in sync per client.
#[async_trait]
pub trait DocumentSynchronizer: Send + Sync {
    /// Pull the documents filed under `email` from the external store.
    async fn sync_documents(&self, email: &str) -> Result<(), TransientFault>;
}

/// A fault raised by an external collaborator. Transient in nature; the
/// caller decides whether the operation as a whole failed.
#[derive(Debug, thiserror::Error)]
pub enum TransientFault {
    #[error("service unavailable: {0}")]
    Unavailable(String),
}
