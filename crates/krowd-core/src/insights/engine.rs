//! Insight Engine - runs the rule table over every venue

use chrono::{NaiveDateTime, Timelike};

use crate::forecast::{forecast, Prediction};
use crate::models::Venue;

use super::types::{sort_by_priority, Insight, InsightKind};
use super::{EventNoticeRule, OptimalTimeRule, ParkingRule, SurgeRule};

/// Everything a rule may look at for one venue
pub struct VenueContext<'a> {
    pub venue: &'a Venue,
    /// Forecast starting at the reference hour
    pub predictions: &'a [Prediction],
    pub reference_time: NaiveDateTime,
}

impl<'a> VenueContext<'a> {
    pub fn new(
        venue: &'a Venue,
        predictions: &'a [Prediction],
        reference_time: NaiveDateTime,
    ) -> Self {
        Self {
            venue,
            predictions,
            reference_time,
        }
    }

    /// The one-hour-ahead prediction
    pub fn next_hour(&self) -> Option<&Prediction> {
        self.predictions.get(1)
    }

    pub fn reference_hour(&self) -> u32 {
        self.reference_time.hour()
    }
}

/// A predicate paired with the insight it builds
pub trait InsightRule: Send + Sync {
    /// Kind of insight this rule emits
    fn kind(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Inspect one venue and produce zero or more insights
    fn evaluate(&self, ctx: &VenueContext<'_>) -> Vec<Insight>;
}

/// Ordered rule table evaluated per venue
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules in their fixed order
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(SurgeRule));
        engine.register(Box::new(ParkingRule));
        engine.register(Box::new(OptimalTimeRule));
        engine.register(Box::new(EventNoticeRule));

        engine
    }

    /// Create an engine with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Append a rule; rules run in registration order
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule against one venue, in rule order
    pub fn analyze_venue(&self, venue: &Venue, reference_time: NaiveDateTime) -> Vec<Insight> {
        let predictions = forecast(venue, reference_time);
        let ctx = VenueContext::new(venue, &predictions, reference_time);

        let mut insights = vec![];
        for rule in &self.rules {
            let found = rule.evaluate(&ctx);
            if !found.is_empty() {
                tracing::trace!(
                    venue = venue.name.as_str(),
                    rule = rule.name(),
                    count = found.len(),
                    "Rule matched"
                );
            }
            insights.extend(found);
        }
        insights
    }

    /// Analyze all venues and return insights ordered by priority
    ///
    /// Equal priorities keep venue order, then rule order.
    pub fn derive(&self, venues: &[Venue], reference_time: NaiveDateTime) -> Vec<Insight> {
        let mut all_insights = vec![];

        for venue in venues {
            let insights = self.analyze_venue(venue, reference_time);
            tracing::debug!(
                venue = venue.name.as_str(),
                count = insights.len(),
                "Venue analysis complete"
            );
            all_insights.extend(insights);
        }

        sort_by_priority(&mut all_insights);
        all_insights
    }

    /// Get list of registered rule kinds, in evaluation order
    pub fn rule_kinds(&self) -> Vec<InsightKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }
}

/// Derive insights for `venues` with the built-in rule table
pub fn derive_insights(venues: &[Venue], reference_time: NaiveDateTime) -> Vec<Insight> {
    InsightEngine::new().derive(venues, reference_time)
}
