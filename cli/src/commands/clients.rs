// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

//! Client record commands against a running directory service

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use uuid::Uuid;

use patron_sdk::{Client, ClientPayload, PatronClient};

#[derive(Subcommand)]
pub enum ClientsCommand {
    /// List every client in the directory
    List,

    /// Search clients by exact first or last name (case-insensitive)
    Search {
        /// Name to search for
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Create a new client record
    Create {
        /// Client identifier (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,
    },

    /// Update an existing client record
    Update {
        /// Client identifier
        #[arg(value_name = "CLIENT_ID")]
        id: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,
    },
}

pub async fn handle_command(command: ClientsCommand, host: &str, port: u16) -> Result<()> {
    let client = PatronClient::new(format!("http://{}:{}", host, port));

    match command {
        ClientsCommand::List => list_clients(client).await,
        ClientsCommand::Search { name } => search_clients(client, &name).await,
        ClientsCommand::Create {
            id,
            first_name,
            last_name,
            email,
            phone,
        } => create_client(client, id, first_name, last_name, email, phone).await,
        ClientsCommand::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
        } => update_client(client, id, first_name, last_name, email, phone).await,
    }
}

async fn list_clients(client: PatronClient) -> Result<()> {
    let clients = client.list_clients().await?;
    print_clients(&clients);
    Ok(())
}

async fn search_clients(client: PatronClient, name: &str) -> Result<()> {
    let clients = client.search_clients(name).await?;
    if clients.is_empty() {
        println!("{}", format!("No clients named '{}'", name).yellow());
        return Ok(());
    }
    print_clients(&clients);
    Ok(())
}

async fn create_client(
    client: PatronClient,
    id: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
) -> Result<()> {
    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let payload = ClientPayload {
        id: id.clone(),
        first_name,
        last_name,
        email,
        phone_number: phone,
    };

    client.create_client(&payload).await?;

    println!("{}", format!("✓ Client {} created", id).green());

    Ok(())
}

async fn update_client(
    client: PatronClient,
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
) -> Result<()> {
    let payload = ClientPayload {
        id: String::new(),
        first_name,
        last_name,
        email,
        phone_number: phone,
    };

    client.update_client(&id, &payload).await?;

    println!("{}", format!("✓ Client {} updated", id).green());

    Ok(())
}

fn print_clients(clients: &[Client]) {
    if clients.is_empty() {
        println!("{}", "No clients found".yellow());
        return;
    }

    println!("{} clients found:", clients.len());
    println!(
        "{:<38} {:<14} {:<14} {:<30} {}",
        "ID", "FIRST NAME", "LAST NAME", "EMAIL", "PHONE"
    );

    for client in clients {
        println!(
            "{:<38} {:<14} {:<14} {:<30} {}",
            client.id,
            client.first_name.bold(),
            client.last_name,
            client.email,
            client.phone_number
        );
    }
}
