//! Domain models for KrowdGuide

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::forecast::curve::{CrowdCurve, ARTS_AND_SHOPPING, DINING, FLAT};

/// Upper bound for crowd and safety percentages
pub const MAX_LEVEL: u8 = 100;

/// A tracked place with its static crowd profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub category: VenueCategory,
    /// Base crowd level (0-100)
    pub crowd: u8,
    /// Base safety score (0-100)
    pub safety: u8,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display-only peak label (e.g., "7:00 PM")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civic_zone: Option<String>,
    /// Free-text notes shown alongside the venue (e.g., "Limited parking")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<String>,
}

impl Venue {
    /// Create a venue with no events or display details
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: VenueCategory,
        crowd: u8,
        safety: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            crowd,
            safety,
            events: Vec::new(),
            address: None,
            distance: None,
            description: None,
            peak_time: None,
            hours: None,
            civic_zone: None,
            alerts: Vec::new(),
        }
    }

    /// Attach a scheduled event
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Check the crowd/safety ranges and name
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Venue {} has an empty name",
                self.id
            )));
        }
        if self.crowd > MAX_LEVEL {
            return Err(Error::Validation(format!(
                "Venue '{}' crowd {} is outside 0-{}",
                self.name, self.crowd, MAX_LEVEL
            )));
        }
        if self.safety > MAX_LEVEL {
            return Err(Error::Validation(format!(
                "Venue '{}' safety {} is outside 0-{}",
                self.name, self.safety, MAX_LEVEL
            )));
        }
        Ok(())
    }

    /// Status of the venue at its base crowd level
    pub fn status(&self) -> CrowdStatus {
        CrowdStatus::from_crowd(self.crowd)
    }

    /// Whether this venue matches an id or a case-insensitive name
    pub fn matches(&self, name_or_id: &str) -> bool {
        match name_or_id.parse::<i64>() {
            Ok(id) => id == self.id,
            Err(_) => self.name.eq_ignore_ascii_case(name_or_id.trim()),
        }
    }
}

/// A scheduled occurrence at a venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub time: EventTime,
    /// What attendees should expect (e.g., "Bishop Ave closed")
    pub impact: String,
    /// Expected crowd level during the event, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowd_surge: Option<u8>,
}

impl Event {
    /// Create an event from an "HH:MM" time string
    pub fn new(name: impl Into<String>, time: &str, impact: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            time: time.parse()?,
            impact: impact.into(),
            crowd_surge: None,
        })
    }

    pub fn with_crowd_surge(mut self, crowd_surge: u8) -> Self {
        self.crowd_surge = Some(crowd_surge);
        self
    }

    /// Hour of day (0-23) the event is scheduled for
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
}

/// Wall-clock time of an event, written as "HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTime {
    hour: u32,
    minute: u32,
}

impl EventTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::Validation(format!(
                "Invalid event time {}:{}",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl FromStr for EventTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| {
            Error::Validation(format!("Invalid event time '{}': expected HH:MM", s))
        })?;
        Ok(Self {
            hour: time.hour(),
            minute: time.minute(),
        })
    }
}

impl TryFrom<String> for EventTime {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<EventTime> for String {
    fn from(time: EventTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Kinds of venue, each with its own time-of-day crowd curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VenueCategory {
    Restaurant,
    Brewery,
    ArtsAndShopping,
    ArtsAndCulture,
    Shopping,
    LiveVenue,
    Outdoor,
    EntertainmentAndDining,
    SportsAndEvents,
}

impl VenueCategory {
    /// Display label, also the spelling used in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Brewery => "Brewery",
            Self::ArtsAndShopping => "Arts & Shopping",
            Self::ArtsAndCulture => "Arts & Culture",
            Self::Shopping => "Shopping",
            Self::LiveVenue => "Live Venue",
            Self::Outdoor => "Outdoor",
            Self::EntertainmentAndDining => "Entertainment & Dining",
            Self::SportsAndEvents => "Sports & Events",
        }
    }

    pub fn all() -> &'static [VenueCategory] {
        &[
            Self::Restaurant,
            Self::Brewery,
            Self::ArtsAndShopping,
            Self::ArtsAndCulture,
            Self::Shopping,
            Self::LiveVenue,
            Self::Outdoor,
            Self::EntertainmentAndDining,
            Self::SportsAndEvents,
        ]
    }

    /// Time-of-day adjustment applied to the base crowd level
    pub fn curve(&self) -> &'static CrowdCurve {
        match self {
            Self::Restaurant | Self::Brewery => &DINING,
            Self::ArtsAndShopping | Self::ArtsAndCulture | Self::Shopping => &ARTS_AND_SHOPPING,
            Self::LiveVenue | Self::Outdoor | Self::EntertainmentAndDining | Self::SportsAndEvents => {
                &FLAT
            }
        }
    }
}

impl fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VenueCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Validation(format!("Unknown venue category: {}", s)))
    }
}

impl TryFrom<String> for VenueCategory {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<VenueCategory> for String {
    fn from(category: VenueCategory) -> Self {
        category.as_str().to_string()
    }
}

/// Qualitative crowd classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdStatus {
    Clear,
    Moderate,
    Busy,
}

impl CrowdStatus {
    /// Crowd levels below this are clear
    pub const MODERATE_AT: u8 = 50;
    /// Crowd levels at or above this are busy
    pub const BUSY_AT: u8 = 75;

    pub fn from_crowd(crowd: u8) -> Self {
        if crowd < Self::MODERATE_AT {
            Self::Clear
        } else if crowd < Self::BUSY_AT {
            Self::Moderate
        } else {
            Self::Busy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Moderate => "moderate",
            Self::Busy => "busy",
        }
    }
}

impl fmt::Display for CrowdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
