//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of insight a rule can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    /// Crowd jumps sharply within the next hour
    SurgeWarning,
    /// Parking about to run short at a quiet venue
    ParkingWarning,
    /// A low-crowd, high-confidence slot at a busy venue
    OptimalTime,
    /// A scheduled event is close to the reference time
    EventNotice,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::SurgeWarning => "surge-warning",
            InsightKind::ParkingWarning => "parking-warning",
            InsightKind::OptimalTime => "optimal-time",
            InsightKind::EventNotice => "event-notice",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "surge-warning" => Ok(InsightKind::SurgeWarning),
            "parking-warning" => Ok(InsightKind::ParkingWarning),
            "optimal-time" => Ok(InsightKind::OptimalTime),
            "event-notice" => Ok(InsightKind::EventNotice),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// How prominently an insight should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Sort rank (lower = shown first)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// An actionable notice about one venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    /// Name of the venue this insight is about
    pub venue: String,
    /// One-line summary (e.g., "Parking filling up soon")
    pub message: String,
    /// Suggested action (e.g., "Arrive in next 30 minutes for easier parking")
    pub action: String,
    pub priority: Priority,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        venue: impl Into<String>,
        priority: Priority,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            venue: venue.into(),
            message: message.into(),
            action: action.into(),
            priority,
        }
    }
}

/// Stable sort by priority: high, then medium, then low
pub fn sort_by_priority(insights: &mut [Insight]) {
    insights.sort_by_key(|i| i.priority.rank());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_kind_serialization() {
        assert_eq!(InsightKind::SurgeWarning.as_str(), "surge-warning");
        assert_eq!(
            InsightKind::from_str("event-notice").unwrap(),
            InsightKind::EventNotice
        );
        assert!(InsightKind::from_str("warning").is_err());
    }

    #[test]
    fn test_priority_rank() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
        assert_eq!(Priority::from_str("medium").unwrap(), Priority::Medium);
    }

    #[test]
    fn test_sort_by_priority_is_stable() {
        let mut insights = vec![
            Insight::new(InsightKind::OptimalTime, "A", Priority::Low, "a-low", ""),
            Insight::new(InsightKind::SurgeWarning, "B", Priority::High, "b-high", ""),
            Insight::new(InsightKind::ParkingWarning, "C", Priority::Medium, "c-med", ""),
            Insight::new(InsightKind::EventNotice, "D", Priority::High, "d-high", ""),
            Insight::new(InsightKind::OptimalTime, "E", Priority::Low, "e-low", ""),
            Insight::new(InsightKind::ParkingWarning, "F", Priority::Medium, "f-med", ""),
        ];

        sort_by_priority(&mut insights);

        let order: Vec<&str> = insights.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            order,
            vec!["b-high", "d-high", "c-med", "f-med", "a-low", "e-low"]
        );
    }

    #[test]
    fn test_insight_json_shape() {
        let insight = Insight::new(
            InsightKind::ParkingWarning,
            "Kessler Theater",
            Priority::Medium,
            "Parking filling up soon",
            "Arrive in next 30 minutes for easier parking",
        );
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["kind"], "parking-warning");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["venue"], "Kessler Theater");
    }
}
