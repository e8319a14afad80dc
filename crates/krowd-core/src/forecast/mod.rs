//! Hourly crowd forecasting
//!
//! Projects a venue's crowd level, parking availability and confidence for
//! the next twelve hours from its base crowd, its category curve and its
//! scheduled events. Pure and deterministic: the only clock is the reference
//! time passed in by the caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use krowd_core::forecast::forecast;
//!
//! let now = chrono::Local::now().naive_local();
//! for p in forecast(&venue, now) {
//!     println!("{} {}% {}", p.label, p.crowd, p.status);
//! }
//! ```

pub mod curve;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{CrowdStatus, Venue};

/// Number of hourly predictions per forecast
pub const HORIZON_HOURS: usize = 12;

const BASE_CONFIDENCE: i32 = 95;
const CONFIDENCE_DECAY_PER_HOUR: i32 = 5;
const CONFIDENCE_FLOOR: i32 = 60;

/// Events within this many hours of a slot boost it
const EVENT_WINDOW_HOURS: u32 = 1;
const EVENT_CROWD_BOOST: i32 = 25;
const EVENT_CROWD_CAP: i32 = 95;
const EVENT_CONFIDENCE_BONUS: i32 = 5;
const EVENT_CONFIDENCE_CAP: i32 = 90;

const PARKING_FLOOR: i32 = 10;

/// One hour of forecast for a venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub timestamp: NaiveDateTime,
    /// Hour of day (0-23)
    pub hour: u32,
    /// 12-hour display label (e.g., "6 PM")
    pub label: String,
    pub crowd: u8,
    /// Parking availability percentage
    pub parking: u8,
    pub confidence: u8,
    pub status: CrowdStatus,
}

/// Forecast the next [`HORIZON_HOURS`] hours, starting at the reference hour
pub fn forecast(venue: &Venue, reference_time: NaiveDateTime) -> Vec<Prediction> {
    (0..HORIZON_HOURS)
        .map(|offset| predict_hour(venue, reference_time, offset))
        .collect()
}

/// Like [`forecast`], but an absent venue yields no predictions
pub fn forecast_optional(venue: Option<&Venue>, reference_time: NaiveDateTime) -> Vec<Prediction> {
    venue
        .map(|v| forecast(v, reference_time))
        .unwrap_or_default()
}

fn predict_hour(venue: &Venue, reference_time: NaiveDateTime, offset: usize) -> Prediction {
    let timestamp = reference_time + Duration::hours(offset as i64);
    let hour = timestamp.hour();

    let mut crowd = venue.category.curve().crowd_at(i32::from(venue.crowd), hour);
    let mut confidence = base_confidence(offset);

    if has_nearby_event(venue, hour) {
        crowd = EVENT_CROWD_CAP.min(crowd + EVENT_CROWD_BOOST);
        confidence = EVENT_CONFIDENCE_CAP.min(confidence + EVENT_CONFIDENCE_BONUS);
    }

    let parking = PARKING_FLOOR.max(100 - crowd);
    let confidence = CONFIDENCE_FLOOR.max(confidence);
    let crowd = to_percent(crowd);

    Prediction {
        timestamp,
        hour,
        label: hour_label(&timestamp),
        crowd,
        parking: to_percent(parking),
        confidence: to_percent(confidence),
        status: CrowdStatus::from_crowd(crowd),
    }
}

/// Confidence before event adjustment and flooring
fn base_confidence(offset: usize) -> i32 {
    BASE_CONFIDENCE - CONFIDENCE_DECAY_PER_HOUR * offset as i32
}

/// Event hours are compared on the raw 0-23 clock, without midnight wraparound
fn has_nearby_event(venue: &Venue, hour: u32) -> bool {
    venue
        .events
        .iter()
        .any(|e| e.hour().abs_diff(hour) <= EVENT_WINDOW_HOURS)
}

fn to_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Hour-only 12-hour label, e.g. "9 AM"
pub fn hour_label(time: &NaiveDateTime) -> String {
    time.format("%-I %p").to_string()
}
