// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Demo-data seeding. Idempotent: records already present are left alone,
//! so restarting against a persistent backend never duplicates or resets
//! them.

use anyhow::Result;
use tracing::{debug, info};

use crate::domain::client::{Client, ClientId};
use crate::domain::repository::{ClientRepository, RepositoryError};

fn demo_clients() -> Vec<Client> {
    vec![
        Client {
            id: ClientId::new("demo-0001"),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone_number: "+18202820232".to_string(),
        },
        Client {
            id: ClientId::new("demo-0002"),
            first_name: "Newton".to_string(),
            last_name: "John".to_string(),
            email: "newton.john@example.com".to_string(),
            phone_number: "+18202820233".to_string(),
        },
    ]
}

/// Insert the demo records that are not already present.
pub async fn seed_demo_clients(repository: &dyn ClientRepository) -> Result<()> {
    for client in demo_clients() {
        if repository.get_by_id(&client.id).await?.is_some() {
            debug!(client_id = %client.id, "seed record already present");
            continue;
        }

        match repository.create(&client).await {
            Ok(()) => info!(client_id = %client.id, "seeded demo client"),
            // Lost a seeding race against another instance; the record
            // exists, which is all we wanted.
            Err(RepositoryError::Duplicate(_)) => {
                debug!(client_id = %client.id, "seed record created concurrently");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryClientRepository;

    #[tokio::test]
    async fn seeding_twice_leaves_two_records() {
        let repo = InMemoryClientRepository::new();

        seed_demo_clients(&repo).await.unwrap();
        seed_demo_clients(&repo).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn seeding_preserves_modified_records() {
        let repo = InMemoryClientRepository::new();
        seed_demo_clients(&repo).await.unwrap();

        let id = ClientId::new("demo-0001");
        let mut record = repo.get_by_id(&id).await.unwrap().unwrap();
        record.email = "changed@example.com".to_string();
        repo.update(&record).await.unwrap();

        seed_demo_clients(&repo).await.unwrap();

        let stored = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.email, "changed@example.com");
    }
}
