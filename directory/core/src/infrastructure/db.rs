// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! PostgreSQL connection management.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool handle.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a connection pool against the given connection string.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await
            .context("Failed to connect to database")?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// First-run schema bootstrap. Safe to call on every startup.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id TEXT PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone_number TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create clients table")?;

        Ok(())
    }
}
