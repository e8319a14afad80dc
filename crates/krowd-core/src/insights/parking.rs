//! Parking Warning Rule
//!
//! A venue that is quiet now but whose parking drops below 30% within the
//! hour is worth reaching early.

use super::engine::{InsightRule, VenueContext};
use super::types::{Insight, InsightKind, Priority};

const PARKING_LOW_BELOW: u8 = 30;
/// Busier venues already signal crowding; skip the parking nudge
const QUIET_VENUE_BELOW: u8 = 60;

pub struct ParkingRule;

impl InsightRule for ParkingRule {
    fn kind(&self) -> InsightKind {
        InsightKind::ParkingWarning
    }

    fn name(&self) -> &'static str {
        "Parking Warning"
    }

    fn evaluate(&self, ctx: &VenueContext<'_>) -> Vec<Insight> {
        match ctx.next_hour() {
            Some(next)
                if next.parking < PARKING_LOW_BELOW && ctx.venue.crowd < QUIET_VENUE_BELOW =>
            {
                vec![Insight::new(
                    InsightKind::ParkingWarning,
                    ctx.venue.name.clone(),
                    Priority::Medium,
                    "Parking filling up soon",
                    "Arrive in next 30 minutes for easier parking",
                )]
            }
            _ => vec![],
        }
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
        ParkingRule.evaluate(&VenueContext::new(venue, &predictions, now))
    }

    fn trivia_at_five(crowd: u8) -> Venue {
        Venue::new(5, "Oak Cliff Brewing", VenueCategory::Brewery, crowd, 92)
            .with_event(Event::new("Trivia Night", "17:00", "Arrive early").unwrap())
    }

    #[test]
    fn test_parking_warning_for_quiet_venue() {
        // 17:00 ramp keeps 55, event lifts it to 80, leaving 20% parking
        let insights = evaluate(&trivia_at_five(55), at(16));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::ParkingWarning);
        assert_eq!(insights[0].priority, Priority::Medium);
        assert_eq!(insights[0].message, "Parking filling up soon");
        assert_eq!(
            insights[0].action,
            "Arrive in next 30 minutes for easier parking"
        );
    }

    #[test]
    fn test_no_parking_warning_for_busy_venue() {
        assert!(evaluate(&trivia_at_five(60), at(16)).is_empty());
    }

    #[test]
    fn test_parking_at_threshold_is_fine() {
        let venue = Venue::new(2, "Kessler Theater", VenueCategory::LiveVenue, 45, 96)
            .with_event(Event::new("Concert", "20:00", "Dispersal at 10").unwrap());
        let predictions = forecast(&venue, at(18));
        assert_eq!(predictions[1].parking, 30);

        assert!(evaluate(&venue, at(18)).is_empty());
    }
}
