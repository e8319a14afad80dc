//! Event Notice Rule

use super::engine::{InsightRule, VenueContext};
use super::types::{Insight, InsightKind, Priority};

/// Events this many hours either side of the reference hour are announced
const EVENT_NOTICE_HOURS: u32 = 2;

pub struct EventNoticeRule;

impl InsightRule for EventNoticeRule {
    fn kind(&self) -> InsightKind {
        InsightKind::EventNotice
    }

    fn name(&self) -> &'static str {
        "Event Notice"
    }

    fn evaluate(&self, ctx: &VenueContext<'_>) -> Vec<Insight> {
        let hour = ctx.reference_hour();

        ctx.venue
            .events
            .iter()
            .filter(|e| e.hour().abs_diff(hour) <= EVENT_NOTICE_HOURS)
            .map(|e| {
                Insight::new(
                    InsightKind::EventNotice,
                    ctx.venue.name.clone(),
                    Priority::High,
                    e.name.clone(),
                    e.impact.clone(),
                )
            })
            .collect()
    }
}
