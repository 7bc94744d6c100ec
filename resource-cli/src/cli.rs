//! Command-line definition and dispatch

use anyhow::Context;
use clap::{Parser, Subcommand};
use resource_client::{ApiClient, Record, ResourceClient};
use serde_json::Value;

/// Back-office API client
#[derive(Debug, Parser)]
#[command(name = "resource-cli", version, about)]
pub struct Cli {
    /// API root URL (defaults to $API_ROOT)
    #[arg(long, global = true)]
    pub api_root: Option<String>,

    /// Default log filter, overridden by $RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rooms (salas)
    Rooms {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Zones (zonas); `update` is sent as PATCH
    Zones {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Active shifts (turnos)
    Shifts {
        #[command(subcommand)]
        action: ReadAction,
    },
    /// Ledger balances
    Ledger {
        #[command(subcommand)]
        action: LedgerAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CrudAction {
    /// Full collection
    List,
    /// One page
    Page { page: u32, page_size: u32 },
    /// One record by id
    Get { id: i64 },
    /// Create from a JSON payload
    Create { payload: String },
    /// Edit a record from a JSON payload
    Update { id: i64, payload: String },
    /// Set the estatus flag
    Status { id: i64, estatus: i32 },
    /// Delete a record
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ReadAction {
    List,
    Get { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum LedgerAction {
    List,
    Get { id: i64 },
    /// Balance of a cash register
    CashBalance { caja_id: i64 },
}

/// What a command produced
#[derive(Debug, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
    Empty,
}

impl Output {
    fn json<T: serde::Serialize>(value: T) -> anyhow::Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Text as printed on stdout
    pub fn render(&self) -> anyhow::Result<String> {
        Ok(match self {
            Self::Json(value) => serde_json::to_string_pretty(value)?,
            Self::Text(text) => text.clone(),
            Self::Empty => String::new(),
        })
    }
}

impl Command {
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Output> {
        match self {
            Self::Rooms { action } => {
                let rooms = api.rooms();
                run_crud(rooms.client(), action).await
            }
            Self::Zones { action } => {
                let zones = api.zones();
                run_crud(zones.client(), action).await
            }
            Self::Shifts { action } => {
                let shifts = api.shifts();
                match action {
                    ReadAction::List => Output::json(shifts.list().await?),
                    ReadAction::Get { id } => Output::json(shifts.get(id).await?),
                }
            }
            Self::Ledger { action } => {
                let ledger = api.ledger();
                match action {
                    LedgerAction::List => Output::json(ledger.list().await?),
                    LedgerAction::Get { id } => Output::json(ledger.get(id).await?),
                    LedgerAction::CashBalance { caja_id } => {
                        Output::json(ledger.cash_balance(caja_id).await?)
                    }
                }
            }
        }
    }
}

async fn run_crud(client: &ResourceClient<Record>, action: CrudAction) -> anyhow::Result<Output> {
    tracing::debug!(endpoint = %client.endpoint(), ?action, "Running command");
    match action {
        CrudAction::List => Output::json(client.list().await?),
        CrudAction::Page { page, page_size } => {
            Output::json(client.paginate(page, page_size).await?)
        }
        CrudAction::Get { id } => Output::json(client.get(id).await?),
        CrudAction::Create { payload } => {
            Output::json(client.create(&parse_payload(&payload)?).await?)
        }
        CrudAction::Update { id, payload } => {
            Output::json(client.update(id, &parse_payload(&payload)?).await?)
        }
        CrudAction::Status { id, estatus } => {
            Ok(Output::Text(client.update_status(id, estatus).await?))
        }
        CrudAction::Delete { id } => {
            client.delete(id).await?;
            Ok(Output::Empty)
        }
    }
}

fn parse_payload(raw: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).context("payload is not valid JSON")
}
