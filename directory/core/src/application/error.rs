// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

use std::fmt;

use crate::domain::repository::RepositoryError;
use crate::domain::services::TransientFault;

/// Which external collaborator a fault came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOrigin {
    Notification,
    DocSync,
}

impl ServiceOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOrigin::Notification => "notification",
            ServiceOrigin::DocSync => "docsync",
        }
    }
}

impl fmt::Display for ServiceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy of the directory use cases. Every error a caller can
/// observe maps onto exactly one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A required payload field is missing or empty. Carries the wire name
    /// of the first offending field.
    #[error("{0} is required")]
    Validation(&'static str),

    /// The addressed client does not exist.
    #[error("Client not found")]
    NotFound,

    /// Creation collided with an existing identifier.
    #[error("Client already exists: {0}")]
    Duplicate(String),

    /// An external collaborator failed after the repository write committed.
    /// The write is not rolled back.
    #[error("{origin} service failed: {source}")]
    ExternalService {
        origin: ServiceOrigin,
        #[source]
        source: TransientFault,
    },

    /// Anything else. The detail is logged server-side and never shown to
    /// callers verbatim.
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl From<RepositoryError> for DirectoryError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(id) => DirectoryError::Duplicate(id),
            other => DirectoryError::Unexpected(other.to_string()),
        }
    }
}
