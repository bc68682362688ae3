// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied identifier of a client record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A client record as stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Wire-format client payload accepted by the create and update operations.
///
/// Every field defaults to empty so that a request with missing keys still
/// deserializes and reaches the validators, which report the first missing
/// field by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientPayload {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl Client {
    /// Build a full record from a validated creation payload.
    pub fn from_payload(payload: ClientPayload) -> Self {
        Self {
            id: ClientId::new(payload.id),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone_number: payload.phone_number,
        }
    }

    /// Overlay the mutable fields from an update payload. The identifier of
    /// the stored record never changes.
    pub fn apply_update(&mut self, patch: ClientPayload) {
        self.first_name = patch.first_name;
        self.last_name = patch.last_name;
        self.email = patch.email;
        self.phone_number = patch.phone_number;
    }
}
