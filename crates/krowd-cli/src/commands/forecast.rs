//! Venue forecast command

use anyhow::Result;
use chrono::NaiveDateTime;
use krowd_core::{forecast, Catalog};
use serde_json::json;

use super::{level_bar, print_json, require_query, resolve_city, status_icon};

pub fn cmd_forecast(
    catalog: &Catalog,
    city_key: Option<&str>,
    venue_query: &str,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let city = resolve_city(catalog, city_key)?;
    let venue = catalog.find_venue(&city.key, require_query(venue_query)?)?;
    let predictions = forecast(venue, now);

    if json {
        return print_json(&json!({
            "venue": venue.name,
            "city": city.key,
            "reference_time": now,
            "predictions": predictions,
        }));
    }

    println!();
    println!("🔮 {} ({})", venue.name, venue.category);
    println!(
        "   Now: {}% crowd, {}% safety",
        venue.crowd, venue.safety
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:<6} {:<16} {:>5} {:>8} {:>6}", "Time", "Crowd", "", "Parking", "Conf");

    for p in &predictions {
        println!(
            "   {:<6} {} {} {:>3}% {:>7}% {:>5}%",
            p.label,
            status_icon(p.status),
            level_bar(p.crowd),
            p.crowd,
            p.parking,
            p.confidence
        );
    }

    if !venue.events.is_empty() {
        println!();
        println!("   📅 Events");
        for event in &venue.events {
            println!("      {} {} - {}", event.time, event.name, event.impact);
        }
    }

    println!();
    Ok(())
}
