//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// KrowdGuide - Know before you go
#[derive(Parser)]
#[command(name = "krowd")]
#[command(about = "Crowd forecasts and insights for city venues", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Venue catalog file (defaults to the data dir override, then built-in cities)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Alert settings file (defaults to the data dir override, then all alerts on)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Reference time: "YYYY-MM-DD HH:MM" or "HH:MM" today (defaults to now)
    #[arg(long, global = true)]
    pub at: Option<String>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List cities in the catalog
    Cities,

    /// List venues in a city with their current status
    Venues {
        /// City key (e.g., "oak-cliff"); unknown keys fall back to the default city
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Show the 12-hour forecast for a venue
    Forecast {
        /// Venue name or id
        #[arg(long)]
        venue: String,

        /// City key (defaults to the catalog's default city)
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Show prioritized insights for a city
    Insights {
        /// City key (defaults to the catalog's default city)
        #[arg(short, long)]
        city: Option<String>,

        /// Show at most this many insights (the alert center shows 5)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Ignore alert settings and show every insight
        #[arg(long)]
        all: bool,
    },

    /// Show a city summary and where config was loaded from
    Status {
        /// City key (defaults to the catalog's default city)
        #[arg(short, long)]
        city: Option<String>,
    },
}
