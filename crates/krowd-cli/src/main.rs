//! KrowdGuide CLI - Crowd intelligence for city venues
//!
//! Usage:
//!   krowd cities                          List cities
//!   krowd venues --city reno              Venues with current status
//!   krowd forecast --venue "Trivia"       12-hour forecast
//!   krowd insights --limit 5              Prioritized alerts

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use krowd_core::{AlertSettings, Catalog};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let catalog = Catalog::load(cli.catalog.as_deref()).context("Failed to load venue catalog")?;

    match cli.command {
        Commands::Cities => commands::cmd_cities(&catalog, cli.json),
        Commands::Venues { city } => {
            let now = commands::reference_time(cli.at.as_deref())?;
            commands::cmd_venues(&catalog, city.as_deref(), now, cli.json)
        }
        Commands::Forecast { venue, city } => {
            let now = commands::reference_time(cli.at.as_deref())?;
            commands::cmd_forecast(&catalog, city.as_deref(), &venue, now, cli.json)
        }
        Commands::Insights { city, limit, all } => {
            let now = commands::reference_time(cli.at.as_deref())?;
            let settings = if all {
                None
            } else {
                Some(
                    AlertSettings::load(cli.settings.as_deref())
                        .context("Failed to load alert settings")?,
                )
            };
            commands::cmd_insights(
                &catalog,
                city.as_deref(),
                now,
                settings.as_ref(),
                limit,
                cli.json,
            )
        }
        Commands::Status { city } => {
            let now = commands::reference_time(cli.at.as_deref())?;
            commands::cmd_status(&catalog, city.as_deref(), now, cli.settings.as_deref())
        }
    }
}
