//! listkeeper command-line client.
//!
//! Drives the same [`ListDal`] the HTTP server uses, directly against a store
//! named by `--db` (or `LISTKEEPER_DATABASE_URI`). Every command prints the
//! resulting entity as pretty JSON on stdout.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use listkeeper_store::{open_store, ErrorKind, ListDal, ListSummary, StoreError};

/// Manage listkeeper lists from the terminal.
#[derive(Parser)]
#[command(name = "listkeeper", about = "Manage listkeeper lists from the terminal")]
struct Cli {
    /// Store connection string (`sqlite://<path>`, a bare path, or `memory://`).
    #[arg(long, env = "LISTKEEPER_DATABASE_URI")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show every list with its item count, sorted by name.
    Lists,
    /// Create an empty list.
    Create { name: String },
    /// Show one list with its items.
    Show { list_id: String },
    /// Delete a list and its items.
    Delete { list_id: String },
    /// Append an item to a list.
    Add { list_id: String, label: String },
    /// Mark an item as checked.
    Check { list_id: String, item_id: String },
    /// Mark an item as not checked.
    Uncheck { list_id: String, item_id: String },
    /// Remove an item from a list.
    Remove { list_id: String, item_id: String },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    process::exit(run(cli));
}

/// Executes one command.
///
/// Returns exit code: 0 = success, 1 = storage or lookup failure,
/// 2 = malformed identifier.
fn run(cli: Cli) -> i32 {
    let dal = match open_store(&cli.db) {
        Ok(store) => ListDal::new(store),
        Err(e) => {
            eprintln!("Error: failed to open store '{}': {}", cli.db, e);
            return 1;
        }
    };

    let outcome = match cli.command {
        Commands::Lists => dal
            .list_summaries()
            .and_then(|rows| print_json(&rows.collect::<Vec<ListSummary>>())),
        Commands::Create { name } => dal.create_list(&name).and_then(|id| {
            print_json(&serde_json::json!({ "id": id, "name": name }))
        }),
        Commands::Show { list_id } => dal.get_list(&list_id).and_then(|l| print_json(&l)),
        Commands::Delete { list_id } => dal.delete_list(&list_id).and_then(|removed| {
            if removed {
                print_json(&removed)
            } else {
                Err(StoreError::NotFound(listkeeper_store::ListId::parse(&list_id)?))
            }
        }),
        Commands::Add { list_id, label } => dal
            .create_item(&list_id, &label)
            .and_then(|l| print_json(&l)),
        Commands::Check { list_id, item_id } => dal
            .set_item_checked(&list_id, &item_id, true)
            .and_then(|l| print_json(&l)),
        Commands::Uncheck { list_id, item_id } => dal
            .set_item_checked(&list_id, &item_id, false)
            .and_then(|l| print_json(&l)),
        Commands::Remove { list_id, item_id } => dal
            .delete_item(&list_id, &item_id)
            .and_then(|l| print_json(&l)),
    };

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            match e.kind() {
                ErrorKind::InvalidArgument => 2,
                ErrorKind::NotFound | ErrorKind::Storage => 1,
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), StoreError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_item_commands() {
        let cli = Cli::try_parse_from([
            "listkeeper",
            "--db",
            "memory://",
            "check",
            "65a1b2c3d4e5f60718293a4b",
            "00000000-0000-4000-8000-000000000000",
        ])
        .unwrap();
        assert_eq!(cli.db, "memory://");
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn malformed_id_exits_with_2() {
        let cli = Cli::try_parse_from(["listkeeper", "--db", "memory://", "show", "L1"]).unwrap();
        assert_eq!(run(cli), 2);
    }

    #[test]
    fn missing_list_exits_with_1() {
        let cli = Cli::try_parse_from([
            "listkeeper",
            "--db",
            "memory://",
            "delete",
            "65a1b2c3d4e5f60718293a4b",
        ])
        .unwrap();
        assert_eq!(run(cli), 1);
    }
}
