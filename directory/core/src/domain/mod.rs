// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Domain layer: entities, ports and configuration for the client directory.

pub mod client;
pub mod config;
pub mod repository;
pub mod services;
