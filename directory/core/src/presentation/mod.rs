// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! # Presentation Layer
//!
//! HTTP surface of the directory.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /health` | Liveness and uptime |
//! | `GET /clients` | List every client |
//! | `POST /clients` | Create a client |
//! | `PUT /clients/{id}` | Update a client |
//! | `GET /search/{name}` | Exact name search |

pub mod api;

pub use api::{app, ApiResponse, AppState};
