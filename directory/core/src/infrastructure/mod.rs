// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Infrastructure layer: storage backends, simulated collaborators and
//! demo-data seeding.

pub mod chaos;
pub mod db;
pub mod docsync;
pub mod notification;
pub mod repositories;
pub mod seed;
