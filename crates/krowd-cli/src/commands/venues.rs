//! City and venue listing commands

use anyhow::Result;
use chrono::NaiveDateTime;
use krowd_core::{forecast, Catalog};
use serde_json::json;

use super::{level_bar, print_json, resolve_city, status_icon, truncate};

pub fn cmd_cities(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let cities: Vec<_> = catalog
            .cities()
            .iter()
            .map(|c| {
                json!({
                    "key": c.key,
                    "name": c.name,
                    "subtitle": c.subtitle,
                    "venues": c.venues.len(),
                    "default": c.key == catalog.default_city,
                })
            })
            .collect();
        return print_json(&cities);
    }

    println!();
    println!("🏙️  Cities");
    println!("   ─────────────────────────────");

    for city in catalog.cities() {
        let marker = if city.key == catalog.default_city {
            " (default)"
        } else {
            ""
        };
        println!(
            "   {:<12} {} - {} venue(s){}",
            city.key,
            city.name,
            city.venues.len(),
            marker
        );
        if let Some(ref subtitle) = city.subtitle {
            println!("   {:<12} {}", "", subtitle);
        }
    }

    println!();
    Ok(())
}

pub fn cmd_venues(
    catalog: &Catalog,
    city_key: Option<&str>,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let city = resolve_city(catalog, city_key)?;

    if json {
        let venues: Vec<_> = city
            .venues
            .iter()
            .map(|v| {
                json!({
                    "venue": v,
                    "now": forecast(v, now).into_iter().next(),
                })
            })
            .collect();
        return print_json(&venues);
    }

    if city.venues.is_empty() {
        println!("No venues tracked in {}.", city.name);
        return Ok(());
    }

    println!();
    println!("📍 {} - {}", city.name, now.format("%a %-I:%M %p"));
    println!("   ─────────────────────────────────────────────────────────────");

    for venue in &city.venues {
        let current = forecast(venue, now).into_iter().next();
        let (crowd, status) = current
            .map(|p| (p.crowd, p.status))
            .unwrap_or((venue.crowd, venue.status()));

        println!(
            "   {} [{:>2}] {:<28} {:<22} {} {:>3}%  🛡️ {}",
            status_icon(status),
            venue.id,
            truncate(&venue.name, 28),
            venue.category,
            level_bar(crowd),
            crowd,
            venue.safety
        );
        if let Some(ref description) = venue.description {
            println!("        {}", truncate(description, 60));
        }
        for event in &venue.events {
            println!("        📅 {} {}", event.time, event.name);
        }
    }

    println!();
    Ok(())
}
