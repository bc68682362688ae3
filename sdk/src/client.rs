// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use patron_core::domain::client::{Client, ClientPayload};

/// Client for interacting with a running Patron directory service.
pub struct PatronClient {
    base_url: String,
    client: HttpClient,
}

/// Errors returned by [`PatronClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a directory response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The directory answered with a failure envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The directory answered with a body this SDK cannot interpret.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Liveness report from `GET /health`.
#[derive(Debug, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    message: String,
    data: Option<T>,
}

impl PatronClient {
    /// Create a new directory client against a base URL such as
    /// `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: HttpClient::new(),
        }
    }

    /// Fetch every client in the directory.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        let url = format!("{}/clients", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::fetch_data(response).await
    }

    /// Search clients by exact first or last name, ignoring case.
    pub async fn search_clients(&self, name: &str) -> Result<Vec<Client>, ApiError> {
        let url = format!("{}/search/{}", self.base_url, name);
        let response = self.client.get(&url).send().await?;
        Self::fetch_data(response).await
    }

    /// Create a new client record.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<(), ApiError> {
        let url = format!("{}/clients", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        Self::expect_ack(response).await
    }

    /// Update the client record with the given identifier.
    pub async fn update_client(&self, id: &str, payload: &ClientPayload) -> Result<(), ApiError> {
        let url = format!("{}/clients/{}", self.base_url, id);
        let response = self.client.put(&url).json(payload).send().await?;
        Self::expect_ack(response).await
    }

    /// Check service liveness.
    pub async fn health(&self) -> Result<ServiceHealth, ApiError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.json().await?)
    }

    async fn fetch_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        let envelope: Envelope<T> = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Api {
                status,
                message: envelope.message,
            });
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Malformed("success envelope without data".to_string()))
    }

    async fn expect_ack(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status().as_u16();
        let envelope: Envelope<serde_json::Value> = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Api {
                status,
                message: envelope.message,
            });
        }
        Ok(())
    }
}
