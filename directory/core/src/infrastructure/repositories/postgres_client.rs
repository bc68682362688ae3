// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! # PostgreSQL Client Repository
//!
//! Stores client records in the `clients` table created by
//! [`Database::ensure_schema`](crate::infrastructure::db::Database::ensure_schema).

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::client::{Client, ClientId};
use crate::domain::repository::{ClientRepository, RepositoryError};

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn client_from_row(row: &PgRow) -> Client {
        Client {
            id: ClientId::new(row.get::<String, _>("id")),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            phone_number: row.get("phone_number"),
        }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn get_all(&self) -> Result<Vec<Client>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, phone_number FROM clients \
             ORDER BY first_name ASC, last_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::client_from_row).collect())
    }

    async fn get_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email, phone_number FROM clients WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::client_from_row(&row)))
    }

    async fn create(&self, client: &Client) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO clients (id, first_name, last_name, email, phone_number) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(client.id.as_str())
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phone_number)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            let unique_violation = err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if unique_violation {
                RepositoryError::Duplicate(client.id.to_string())
            } else {
                RepositoryError::Database(err.to_string())
            }
        })?;

        Ok(())
    }

    async fn update(&self, client: &Client) -> Result<(), RepositoryError> {
        // Zero affected rows means the record vanished since the caller's
        // existence check; the write is a silent no-op either way.
        sqlx::query(
            "UPDATE clients SET first_name = $2, last_name = $3, email = $4, phone_number = $5 \
             WHERE id = $1",
        )
        .bind(client.id.as_str())
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phone_number)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Client>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, phone_number FROM clients \
             WHERE LOWER(first_name) = LOWER($1) OR LOWER(last_name) = LOWER($1) \
             ORDER BY first_name ASC, last_name ASC",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::client_from_row).collect())
    }
}
