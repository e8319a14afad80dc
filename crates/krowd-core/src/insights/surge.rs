//! Surge Warning Rule
//!
//! Fires when the next hour's crowd is more than 20 points above the venue's
//! base level, and suggests the first quieter slot in the horizon.

use super::engine::{InsightRule, VenueContext};
use super::types::{Insight, InsightKind, Priority};

/// Minimum jump over base crowd that counts as a surge
const SURGE_MARGIN: u8 = 20;
/// Crowd below this is worth waiting for
const QUIETER_BELOW: u8 = 60;
const FALLBACK_LABEL: &str = "later";

pub struct SurgeRule;

impl InsightRule for SurgeRule {
    fn kind(&self) -> InsightKind {
        InsightKind::SurgeWarning
    }

    fn name(&self) -> &'static str {
        "Surge Warning"
    }

    fn evaluate(&self, ctx: &VenueContext<'_>) -> Vec<Insight> {
        let Some(next) = ctx.next_hour() else {
            return vec![];
        };

        if u16::from(next.crowd) <= u16::from(ctx.venue.crowd) + u16::from(SURGE_MARGIN) {
            return vec![];
        }

        let wait_until = ctx
            .predictions
            .iter()
            .find(|p| p.crowd < QUIETER_BELOW)
            .map_or(FALLBACK_LABEL, |p| p.label.as_str());

        vec![Insight::new(
            InsightKind::SurgeWarning,
            ctx.venue.name.clone(),
            Priority::High,
            format!("Crowd surging soon - {}% in 1 hour", next.crowd),
            format!("Visit now or wait until {}", wait_until),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::forecast;
    use crate::models::{Event, Venue, VenueCategory};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 6)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn evaluate(venue: &Venue, now: NaiveDateTime) -> Vec<Insight> {
        let predictions = forecast(venue, now);
        SurgeRule.evaluate(&VenueContext::new(venue, &predictions, now))
    }

    #[test]
    fn test_no_surge_when_crowd_steady() {
        let venue = Venue::new(2, "Kessler Theater", VenueCategory::LiveVenue, 42, 96);
        assert!(evaluate(&venue, at(16)).is_empty());
    }

    #[test]
    fn test_surge_exactly_at_margin_is_ignored() {
        // Event boost from 75 hits the 95 cap: a 20 point jump is not a surge
        let venue = Venue::new(7, "Truckee River Walk", VenueCategory::Outdoor, 75, 96)
            .with_event(Event::new("River Festival", "17:00", "Paths crowded").unwrap());
        let predictions = forecast(&venue, at(15));
        assert_eq!(predictions[1].crowd, 95);
        assert!(evaluate(&venue, at(15)).is_empty());
    }

    #[test]
    fn test_surge_names_first_quiet_slot() {
        let venue = Venue::new(5, "Oak Cliff Brewing", VenueCategory::Brewery, 45, 92)
            .with_event(Event::new("Trivia Night", "17:00", "Arrive early").unwrap());
        let insights = evaluate(&venue, at(16));

        assert_eq!(insights.len(), 1);
        let insight = &insights[0];
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.venue, "Oak Cliff Brewing");
        assert_eq!(insight.message, "Crowd surging soon - 70% in 1 hour");
        // 4 PM is off-peak: 25, boosted to 50 by the event
        assert_eq!(insight.action, "Visit now or wait until 4 PM");
    }

    #[test]
    fn test_surge_falls_back_to_later() {
        let venue = Venue::new(9, "Greater Nevada Field", VenueCategory::SportsAndEvents, 65, 90)
            .with_event(Event::new("Aces vs. Sacramento", "13:00", "Parking limited").unwrap());
        let predictions = forecast(&venue, at(11));
        assert!(predictions.iter().all(|p| p.crowd >= 60));

        let insights = evaluate(&venue, at(11));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].action, "Visit now or wait until later");
    }
}
