//! Optimal Time Rule
//!
//! Points busy venues at the first forecast slot that is both quiet and
//! confidently predicted.

use super::engine::{InsightRule, VenueContext};
use super::types::{Insight, InsightKind, Priority};

const QUIET_BELOW: u8 = 50;
const CONFIDENT_ABOVE: u8 = 75;
/// Only venues busier than this get a suggestion
const BUSY_VENUE_ABOVE: u8 = 70;

pub struct OptimalTimeRule;

impl InsightRule for OptimalTimeRule {
    fn kind(&self) -> InsightKind {
        InsightKind::OptimalTime
    }

    fn name(&self) -> &'static str {
        "Optimal Time"
    }

    fn evaluate(&self, ctx: &VenueContext<'_>) -> Vec<Insight> {
        let window = ctx
            .predictions
            .iter()
            .find(|p| p.crowd < QUIET_BELOW && p.confidence > CONFIDENT_ABOVE);

        match window {
            Some(slot) if ctx.venue.crowd > BUSY_VENUE_ABOVE => vec![Insight::new(
                InsightKind::OptimalTime,
                ctx.venue.name.clone(),
                Priority::Low,
                format!("Best time to visit: {}", slot.label),
                format!(
                    "{}% capacity with {}% parking available",
                    slot.crowd, slot.parking
                ),
            )],
            _ => vec![],
        }
    }
}
