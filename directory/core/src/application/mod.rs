// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Application layer: directory use cases and their failure taxonomy.

pub mod create_client;
pub mod error;
pub mod list_clients;
pub mod repository_factory;
pub mod search_clients;
pub mod update_client;
pub mod validators;

pub use create_client::{CreateClientUseCase, StandardCreateClientUseCase};
pub use error::{DirectoryError, ServiceOrigin};
pub use list_clients::{ListClientsUseCase, StandardListClientsUseCase};
pub use search_clients::{SearchClientsUseCase, StandardSearchClientsUseCase};
pub use update_client::{StandardUpdateClientUseCase, UpdateClientUseCase};
