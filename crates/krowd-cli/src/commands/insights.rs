//! Insight command - the alert center

use anyhow::Result;
use chrono::NaiveDateTime;
use krowd_core::{derive_insights, AlertSettings, Catalog, Insight};

use super::{print_json, priority_icon, resolve_city};

/// Derive, filter, and trim insights the way the alert center shows them
pub fn collect_insights(
    venues: &[krowd_core::Venue],
    now: NaiveDateTime,
    settings: Option<&AlertSettings>,
    limit: Option<usize>,
) -> Vec<Insight> {
    let insights = derive_insights(venues, now);
    let mut insights = match settings {
        Some(settings) => settings.filter(insights),
        None => insights,
    };
    if let Some(limit) = limit {
        insights.truncate(limit);
    }
    insights
}

pub fn cmd_insights(
    catalog: &Catalog,
    city_key: Option<&str>,
    now: NaiveDateTime,
    settings: Option<&AlertSettings>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let city = resolve_city(catalog, city_key)?;
    let insights = collect_insights(&city.venues, now, settings, limit);

    if json {
        return print_json(&insights);
    }

    println!();
    println!("✨ Smart Insights - {} at {}", city.name, now.format("%-I:%M %p"));
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   ✅ Nothing to flag right now. Enjoy your outing!");
        println!();
        return Ok(());
    }

    for insight in &insights {
        println!(
            "   {} {} [{}] {}",
            priority_icon(insight.priority),
            insight.venue,
            insight.priority,
            insight.message
        );
        println!("      → {}", insight.action);
    }

    println!();
    Ok(())
}
