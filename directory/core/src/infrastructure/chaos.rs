// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Fault injection shared by the simulated collaborators.

use rand::Rng;
use std::time::Duration;

use crate::domain::config::ChaosConfig;
use crate::domain::services::TransientFault;

/// Dice roll plus artificial latency applied to every simulated collaborator
/// call. A single policy is cloned into each collaborator so they misbehave
/// with the same odds.
#[derive(Debug, Clone)]
pub struct ChaosPolicy {
    failure_rate: f64,
    delay: Duration,
}

impl ChaosPolicy {
    /// `failure_rate` is clamped into `[0.0, 1.0]`.
    pub fn new(failure_rate: f64, delay: Duration) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
            delay,
        }
    }

    pub fn from_config(config: &ChaosConfig) -> Self {
        Self::new(config.failure_rate, Duration::from_millis(config.delay_ms))
    }

    /// Fail with the configured probability; otherwise hold the caller for
    /// the configured delay and succeed.
    pub async fn roll(&self) -> Result<(), TransientFault> {
        let failed = self.failure_rate > 0.0 && rand::rng().random_bool(self.failure_rate);
        if failed {
            return Err(TransientFault::Unavailable(
                "simulated transient fault".to_string(),
            ));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn full_failure_rate_always_faults() {
        let policy = ChaosPolicy::new(1.0, Duration::ZERO);
        for _ in 0..16 {
            assert!(policy.roll().await.is_err());
        }
    }

    #[tokio::test]
    async fn zero_failure_rate_never_faults() {
        let policy = ChaosPolicy::new(0.0, Duration::ZERO);
        for _ in 0..16 {
            assert!(policy.roll().await.is_ok());
        }
    }

    #[tokio::test]
    async fn out_of_range_rate_is_clamped() {
        let policy = ChaosPolicy::new(7.5, Duration::ZERO);
        assert!(policy.roll().await.is_err());

        let policy = ChaosPolicy::new(-1.0, Duration::ZERO);
        assert!(policy.roll().await.is_ok());
    }
}
