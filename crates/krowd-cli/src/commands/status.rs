//! Status command - city summary and config sources

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use krowd_core::config::{self, SETTINGS_FILE};
use krowd_core::{derive_insights, forecast, AlertSettings, Catalog, Priority, Venue};

use super::resolve_city;

/// Aggregate numbers shown by `krowd status`
#[derive(Debug, Clone, PartialEq)]
pub struct CitySummary {
    pub venue_count: usize,
    pub average_crowd: f64,
    pub average_safety: f64,
    /// Busiest venue at the reference hour, with its crowd level
    pub busiest: Option<(String, u8)>,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

pub fn summarize(venues: &[Venue], now: NaiveDateTime) -> CitySummary {
    let venue_count = venues.len();
    let (average_crowd, average_safety) = if venue_count > 0 {
        let crowd: u32 = venues.iter().map(|v| u32::from(v.crowd)).sum();
        let safety: u32 = venues.iter().map(|v| u32::from(v.safety)).sum();
        (
            f64::from(crowd) / venue_count as f64,
            f64::from(safety) / venue_count as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let busiest = venues
        .iter()
        .filter_map(|v| forecast(v, now).first().map(|p| (v.name.clone(), p.crowd)))
        .fold(None, |best: Option<(String, u8)>, (name, crowd)| match best {
            Some((_, top)) if top >= crowd => best,
            _ => Some((name, crowd)),
        });

    let insights = derive_insights(venues, now);
    let count = |priority: Priority| insights.iter().filter(|i| i.priority == priority).count();

    CitySummary {
        venue_count,
        average_crowd,
        average_safety,
        busiest,
        high: count(Priority::High),
        medium: count(Priority::Medium),
        low: count(Priority::Low),
    }
}

pub fn cmd_status(
    catalog: &Catalog,
    city_key: Option<&str>,
    now: NaiveDateTime,
    settings_path: Option<&Path>,
) -> Result<()> {
    let city = resolve_city(catalog, city_key)?;
    let settings_source = config::locate(settings_path, SETTINGS_FILE);
    let settings = AlertSettings::load(settings_path).context("Failed to load alert settings")?;
    let summary = summarize(&city.venues, now);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          📊 KrowdGuide Status           │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  City:            {} ({})", city.name, city.key);
    println!("  Reference time:  {}", now.format("%Y-%m-%d %H:%M"));
    println!("  Venues:          {}", summary.venue_count);
    println!("  Average crowd:   {:.0}%", summary.average_crowd);
    println!("  Average safety:  {:.0}%", summary.average_safety);
    if let Some((ref name, crowd)) = summary.busiest {
        println!("  Busiest now:     {} ({}%)", name, crowd);
    }
    println!();
    println!(
        "  Insights:        🔴 {} high  🟠 {} medium  🟢 {} low",
        summary.high, summary.medium, summary.low
    );
    println!();
    println!("  Catalog:         {}", catalog.source());
    println!("  Alert settings:  {}", settings_source);
    let toggle = |on: bool| if on { "on" } else { "off" };
    println!(
        "     proactive={} surge={} parking={} events={}",
        toggle(settings.proactive_alerts),
        toggle(settings.crowd_surge_alerts),
        toggle(settings.parking_alerts),
        toggle(settings.event_alerts)
    );
    if let Some(dir) = config::config_dir() {
        println!("     Overrides dir: {}", dir.display());
    }
    println!();

    Ok(())
}
