//! Insight Engine - Actionable Crowd Notices
//!
//! Scans each venue's forecast and schedule and surfaces what a visitor
//! should know right now: crowds about to surge, parking about to run out,
//! a quieter time to come back, events starting nearby.
//!
//! ## Rules
//!
//! Evaluated per venue, in this order:
//!
//! - **Surge Warning** (high) - next hour is much busier than the base level
//! - **Parking Warning** (medium) - parking runs short at a quiet venue
//! - **Optimal Time** (low) - a quiet, confident slot at a busy venue
//! - **Event Notice** (high) - an event within two hours of now
//!
//! ## Usage
//!
//! ```rust,ignore
//! use krowd_core::insights::derive_insights;
//!
//! let venues = catalog.venues_for_city("oak-cliff").unwrap_or_default();
//! let insights = derive_insights(venues, now);
//! ```

pub mod engine;
pub mod event_notice;
pub mod optimal_time;
pub mod parking;
pub mod surge;
pub mod types;

pub use engine::{derive_insights, InsightEngine, InsightRule, VenueContext};
pub use event_notice::EventNoticeRule;
pub use optimal_time::OptimalTimeRule;
pub use parking::ParkingRule;
pub use surge::SurgeRule;
pub use types::{sort_by_priority, Insight, InsightKind, Priority};
