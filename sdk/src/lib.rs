//! Patron Directory Rust SDK
//!
//! Typed client for the Patron directory HTTP API.

pub mod client;

pub use client::{ApiError, PatronClient, ServiceHealth};
pub use patron_core::domain::client::{Client, ClientId, ClientPayload};
