//! climber-mapper - find climbing routes by name and map them.
//!
//! Prints a table of the routes found under a parent area and writes a
//! `<area>_<date>_coordinates.json` GeoJSON file that mapping tools such as
//! CalTopo can import.
//!
//! ```text
//! climber_mapper <state> "<area>" "<route 1>" "<route 2>" ...
//! ```

mod args;
mod config;

use std::io;

use anyhow::{Context, Result};
use climber_mapper_core::{render_table, run_query, write_geojson, DatasetLoader};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::Args;
use config::Config;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr, so stdout carries only the table
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load()?;
    let args = Args::from_env();
    info!(
        state = %args.state,
        parent_area = %args.parent_area,
        queries = ?args.route_queries,
        "Searching routes"
    );

    let loader = DatasetLoader::new(config.data_dir());
    let dataset = loader
        .load_state(&args.state)
        .with_context(|| format!("Failed to load dataset for state '{}'", args.state))?;

    let rows = run_query(&dataset, &args.query());
    println!("{}", render_table(&rows));

    let today = chrono::Local::now().date_naive();
    write_geojson(&config.output_dir(), &args.parent_area, today, &rows)
        .context("Failed to export GeoJSON")?;

    Ok(())
}
