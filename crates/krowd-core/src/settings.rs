//! Alert settings - which insight kinds the user wants to see

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{self, SETTINGS_FILE};
use crate::error::Result;
use crate::insights::{Insight, InsightKind};

/// Notification toggles; every switch defaults to on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    /// Master switch for all insights
    pub proactive_alerts: bool,
    pub crowd_surge_alerts: bool,
    pub parking_alerts: bool,
    pub event_alerts: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            proactive_alerts: true,
            crowd_surge_alerts: true,
            parking_alerts: true,
            event_alerts: true,
        }
    }
}

impl AlertSettings {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load with override resolution, defaulting every toggle to on
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let source = config::locate(override_path, SETTINGS_FILE);
        let settings = match config::read_source(&source)? {
            Some(content) => Self::from_toml(&content)?,
            None => Self::default(),
        };
        tracing::debug!(source = %source, ?settings, "Loaded alert settings");
        Ok(settings)
    }

    /// Whether an insight should be shown
    ///
    /// Optimal-time suggestions have no toggle of their own.
    pub fn allows(&self, insight: &Insight) -> bool {
        if !self.proactive_alerts {
            return false;
        }
        match insight.kind {
            InsightKind::SurgeWarning => self.crowd_surge_alerts,
            InsightKind::ParkingWarning => self.parking_alerts,
            InsightKind::EventNotice => self.event_alerts,
            InsightKind::OptimalTime => true,
        }
    }

    /// Drop disallowed insights, keeping order
    pub fn filter(&self, insights: Vec<Insight>) -> Vec<Insight> {
        insights.into_iter().filter(|i| self.allows(i)).collect()
    }
}
