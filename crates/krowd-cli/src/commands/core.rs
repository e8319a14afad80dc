//! Shared command utilities
//!
//! This module contains:
//! - `reference_time` - Parse --at or fall back to the local clock
//! - `resolve_city` - Pick the requested or default city
//! - `print_json` - Pretty JSON output for --json

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use krowd_core::{Catalog, City};
use serde::Serialize;

/// Parse the reference time for forecasts
///
/// Accepts "YYYY-MM-DD HH:MM", "YYYY-MM-DDTHH:MM", or "HH:MM" (today).
pub fn reference_time(at: Option<&str>) -> Result<NaiveDateTime> {
    let now = Local::now().naive_local();
    match at {
        None => Ok(now),
        Some(s) => parse_reference_time(s, now),
    }
}

/// Parse `s` relative to `today` (only its date is used for "HH:MM")
pub fn parse_reference_time(s: &str, today: NaiveDateTime) -> Result<NaiveDateTime> {
    let s = s.trim();
    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(time);
        }
    }

    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid --at time '{}' (use YYYY-MM-DD HH:MM or HH:MM)", s))?;
    Ok(today.date().and_time(time))
}

/// Requested city, or the catalog default when none is given
///
/// Unknown keys fall back to the default city (logged as a warning).
pub fn resolve_city<'a>(catalog: &'a Catalog, key: Option<&str>) -> Result<&'a City> {
    let city = match key {
        Some(key) => catalog.city_or_default(key)?,
        None => catalog.default_city()?,
    };
    Ok(city)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}

/// Require a non-empty venue query
pub fn require_query(query: &str) -> Result<&str> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Venue name or id must not be empty");
    }
    Ok(query)
}
