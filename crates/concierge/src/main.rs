// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concierge - an AI hotel concierge that searches, books, and plans trips
//! over chat.
//!
//! This is the binary entry point. All logs go to stderr so that the
//! `turn`, `hotels`, and `availability` commands keep stdout as a clean
//! JSON pipe for external front ends.

mod setup;
mod shell;
mod turn;

use clap::{Parser, Subcommand};
use concierge_catalog::Catalog;
use concierge_storage::{Database, queries};
use tracing_subscriber::EnvFilter;

/// Concierge - an AI hotel concierge.
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive concierge session in the terminal.
    Shell,
    /// Process one user turn for a session and print the JSON reply.
    Turn {
        /// Session identifier supplied by the front end.
        #[arg(long)]
        session_id: String,
        /// The user's message text.
        #[arg(long)]
        message: String,
    },
    /// Print the full hotel catalog as a JSON array.
    Hotels,
    /// Print the confirmed booking ranges for a hotel as a JSON array.
    Availability {
        /// Hotel id (e.g. "h1").
        #[arg(long)]
        hotel_id: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match concierge_config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("concierge: invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Commands::Shell => shell::run_shell(config).await,
        Commands::Turn {
            session_id,
            message,
        } => {
            turn::run_turn(config, &session_id, &message).await;
            Ok(())
        }
        Commands::Hotels => print_hotels(),
        Commands::Availability { hotel_id } => print_availability(&config, &hotel_id).await,
    };

    if let Err(e) = result {
        eprintln!("concierge: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` overrides the configured level when set.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the catalog as a JSON array for the front end's hotel cards.
fn print_hotels() -> Result<(), concierge_core::ConciergeError> {
    let catalog = Catalog::sample();
    let json = catalog
        .to_json()
        .map_err(|e| concierge_core::ConciergeError::Internal(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Prints the confirmed booking ranges for one hotel (calendar feed).
async fn print_availability(
    config: &concierge_config::ConciergeConfig,
    hotel_id: &str,
) -> Result<(), concierge_core::ConciergeError> {
    let db = Database::open(&config.storage.database_path).await?;
    let ranges = queries::reservations::confirmed_ranges(&db, hotel_id).await?;
    let json = serde_json::to_string(&ranges)
        .map_err(|e| concierge_core::ConciergeError::Internal(e.to_string()))?;
    println!("{json}");
    db.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_export_is_a_json_array() {
        let catalog = Catalog::sample();
        let json = catalog.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed.as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn availability_export_serializes_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("cli.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        let ranges = queries::reservations::confirmed_ranges(&db, "h1").await.unwrap();
        let json = serde_json::to_string(&ranges).unwrap();
        assert_eq!(json, "[]");
        db.close().await.unwrap();
    }
}
