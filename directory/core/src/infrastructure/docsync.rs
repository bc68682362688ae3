// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Simulated document store. Stands in for the external system client
//! documents are pulled from; failure odds and latency come from
//! [`ChaosPolicy`].

use async_trait::async_trait;
use tracing::debug;

use crate::domain::services::{DocumentSynchronizer, TransientFault};
use crate::infrastructure::chaos::ChaosPolicy;

pub struct SimulatedDocSynchronizer {
    chaos: ChaosPolicy,
}

impl SimulatedDocSynchronizer {
    pub fn new(chaos: ChaosPolicy) -> Self {
        Self { chaos }
    }
}

#[async_trait]
impl DocumentSynchronizer for SimulatedDocSynchronizer {
    async fn sync_documents(&self, email: &str) -> Result<(), TransientFault> {
        self.chaos.roll().await?;
        debug!(%email, "documents synchronized");
        Ok(())
    }
}
