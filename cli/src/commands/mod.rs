// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the Patron CLI

pub mod clients;
pub mod config;
pub mod serve;

pub use self::clients::ClientsCommand;
pub use self::config::ConfigCommand;
