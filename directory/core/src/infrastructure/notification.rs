// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Simulated notification gateway. Stands in for a real email provider
//! during development; failure odds and latency come from [`ChaosPolicy`].

use async_trait::async_trait;
use tracing::debug;

use crate::domain::services::{NotificationSender, TransientFault};
use crate::infrastructure::chaos::ChaosPolicy;

pub struct SimulatedNotificationSender {
    chaos: ChaosPolicy,
}

impl SimulatedNotificationSender {
    pub fn new(chaos: ChaosPolicy) -> Self {
        Self { chaos }
    }
}

#[async_trait]
impl NotificationSender for SimulatedNotificationSender {
    async fn send(&self, email: &str, message: &str) -> Result<(), TransientFault> {
        self.chaos.roll().await?;
        debug!(%email, %message, "notification delivered");
        Ok(())
    }
}
