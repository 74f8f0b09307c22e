//! Shelfsync bookstore demo.
//!
//! An interactive client for a shared book list: mirrors the authority's
//! list over the push channel and issues mutations over HTTP. The table only
//! changes when the broadcast event comes back, never from a request's own
//! response.
//!
//! Environment variables:
//! - BOOKSTORE_CHANNEL_ADDR: push channel address (default 127.0.0.1:4001)
//! - BOOKSTORE_API_URL: mutation endpoint base URL (default http://127.0.0.1:4000)
//! - RUST_LOG: operator log filter (env_logger)
//!
//! Commands:
//! - `list`
//! - `add <name>;<owner>;<price>`
//! - `update <id> <name>;<owner>;<price>`
//! - `del <id>` (asks for confirmation)
//! - `quit`

mod commands;
mod view;

use std::net::SocketAddr;

use shelfsync::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::commands::Command;

type DemoError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    env_logger::init();

    let channel_addr: SocketAddr = std::env::var("BOOKSTORE_CHANNEL_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:4001".to_string())
        .parse()?;
    let api_url = std::env::var("BOOKSTORE_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:4000".to_string());

    log::info!("mutation endpoint: {api_url}");
    let gateway = MutationGateway::builder().base_url(api_url).build()?;
    let mut client = SyncClient::connect(channel_addr).await?;
    eprintln!("Subscribed to {channel_addr}; waiting for snapshot");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            change = client.next_change() => match change? {
                Some(update) => view::report(&update, client.items()),
                None => {
                    eprintln!("Subscription ended");
                    break;
                }
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(command) => {
                        if run_command(command, &gateway, &client, &mut lines).await? {
                            break;
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
    }

    client.close().await?;
    Ok(())
}

/// Execute one parsed command. Returns `true` when the operator quit.
async fn run_command(
    command: Command,
    gateway: &MutationGateway,
    client: &SyncClient<tokio::net::TcpStream>,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<bool, DemoError> {
    match command {
        Command::List => view::print_table(client.items()),
        Command::Add(draft) => match gateway.create(&draft).await {
            Ok(outcome) => eprintln!("add: {}", view::outcome_label(outcome)),
            Err(err) => eprintln!("add rejected: {err}"),
        },
        Command::Update(id, draft) => {
            if client.get(id).is_none() {
                eprintln!("note: no local record with id {id}, sending anyway");
            }
            match gateway.update(id, &draft).await {
                Ok(outcome) => eprintln!("update: {}", view::outcome_label(outcome)),
                Err(err) => eprintln!("update rejected: {err}"),
            }
        }
        Command::Delete(id) => {
            if confirm_delete(lines, id).await? {
                let outcome = gateway.delete(id).await;
                eprintln!("del: {}", view::outcome_label(outcome));
            } else {
                eprintln!("del: cancelled");
            }
        }
        Command::Quit => return Ok(true),
    }
    Ok(false)
}

async fn confirm_delete(lines: &mut Lines<BufReader<Stdin>>, id: ItemId) -> Result<bool, DemoError> {
    eprintln!("Delete record {id}? [y/N]");
    let answer = lines.next_line().await?;
    Ok(matches!(
        answer.as_deref().map(str::trim),
        Some("y") | Some("Y") | Some("yes")
    ))
}
