//! Prints the configuration for a user-roster table.
//!
//! Demonstrates the full builder surface: column shorthands, layout,
//! pagination, sorting, and an inline dataset. The emitted JSON is what a
//! page script would hand to the table widget's constructor.

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tabforge::{Layout, RangeMode, SortDir, TableConfig};

#[derive(Parser)]
#[command(name = "roster", about = "Print a user-roster table configuration")]
struct Args {
    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Configure a remote data endpoint instead of the inline sample rows.
    #[arg(long)]
    remote: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TableConfig::new()
        .add_text_column("Name", "name", true, true)
        .add_text_column("Email", "email", true, true)
        .add_number_column("Age", "age", true, false)
        .add_select_column("Status", "status", ["active", "suspended"], true)
        .add_checkbox_column("Verified", "verified", true)
        .add_action_column("Actions", None)
        .layout(Layout::FitColumns)
        .initial_sort("name", SortDir::Asc)
        .header_filters(true)
        .selectable(true, RangeMode::Highlight)
        .movable_columns(true);

    config = match args.remote {
        Some(url) => config.remote_pagination(url, 25),
        None => config.local_pagination(25, 1).rows(json!([
            {"name": "Ada Lovelace", "email": "ada@example.com", "age": 36, "status": "active", "verified": true},
            {"name": "Grace Hopper", "email": "grace@example.com", "age": 85, "status": "active", "verified": true},
            {"name": "Alan Turing", "email": "alan@example.com", "age": 41, "status": "suspended", "verified": false},
        ])),
    };

    let document = if args.compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };
    println!("{}", document);
    Ok(())
}
