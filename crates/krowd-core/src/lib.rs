//! KrowdGuide Core Library
//!
//! Crowd intelligence for city venues:
//! - Hourly crowd, parking and confidence forecasts per venue
//! - Prioritized insights (surges, parking, best times, nearby events)
//! - Venue catalog of cities, embedded or loaded from TOML
//! - Alert settings that filter insights by kind
//!
//! Forecasts and insights are pure functions of the venue data and the
//! reference time passed in; nothing reads the clock or keeps state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod models;
pub mod settings;

pub use catalog::{Catalog, City};
pub use config::ConfigSource;
pub use error::{Error, Result};
pub use forecast::{forecast, forecast_optional, Prediction, HORIZON_HOURS};
pub use insights::{derive_insights, Insight, InsightEngine, InsightKind, Priority};
pub use models::{CrowdStatus, Event, EventTime, Venue, VenueCategory};
pub use settings::AlertSettings;
