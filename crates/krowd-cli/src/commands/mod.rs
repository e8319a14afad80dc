//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (reference time, city resolution, JSON output)
//! - `venues` - City and venue listings
//! - `forecast` - Hourly venue timeline
//! - `insights` - Prioritized alerts for a city
//! - `status` - City summary and config sources

pub mod core;
pub mod forecast;
pub mod insights;
pub mod status;
pub mod venues;

// Re-export command functions for main.rs
pub use self::core::*;
pub use forecast::*;
pub use insights::*;
pub use status::*;
pub use venues::*;

use krowd_core::{CrowdStatus, Priority};

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Ten-cell gauge for a 0-100 level
pub fn level_bar(level: u8) -> String {
    let filled = (usize::from(level.min(100)) + 5) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn status_icon(status: CrowdStatus) -> &'static str {
    match status {
        CrowdStatus::Clear => "🟢",
        CrowdStatus::Moderate => "🟡",
        CrowdStatus::Busy => "🔴",
    }
}

pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟠",
        Priority::Low => "🟢",
    }
}
