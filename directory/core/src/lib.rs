// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Patron Directory Core
//!
//! Domain model, use cases, simulated collaborators and the HTTP surface of
//! the Patron client directory.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Everything the `patron` binary wires together at startup

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
