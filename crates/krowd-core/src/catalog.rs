//! Venue catalog: cities and the venues tracked in each
//!
//! The catalog is an explicit value handed to the forecast and insight code,
//! never a global. The default data (Oak Cliff and Reno) is embedded from
//! `config/cities.toml`; an override file replaces it wholesale.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{self, ConfigSource, CATALOG_FILE};
use crate::error::{Error, Result};
use crate::models::Venue;

/// Embedded default catalog (compiled into binary)
const DEFAULT_CATALOG: &str = include_str!("../../../config/cities.toml");

/// A city and its venues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    /// Lookup key (e.g., "oak-cliff")
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub venues: Vec<Venue>,
}

impl City {
    /// Find a venue by id or case-insensitive name
    pub fn find_venue(&self, name_or_id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.matches(name_or_id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// City used when the requested key is unknown
    pub default_city: String,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(skip)]
    source: ConfigSource,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml(DEFAULT_CATALOG)
    }

    /// Parse and validate a catalog from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog directly from cities (validated)
    pub fn new(default_city: impl Into<String>, cities: Vec<City>) -> Result<Self> {
        let catalog = Self {
            default_city: default_city.into(),
            cities,
            source: ConfigSource::Builtin,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load with override resolution (explicit path, data dir, embedded)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let source = config::locate(override_path, CATALOG_FILE);
        let mut catalog = match config::read_source(&source)? {
            Some(content) => Self::from_toml(&content)?,
            None => Self::embedded()?,
        };

        tracing::info!(
            source = %source,
            cities = catalog.cities.len(),
            "Loaded venue catalog"
        );
        catalog.source = source;
        Ok(catalog)
    }

    /// Where this catalog was read from
    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Check city keys, the default city, and every venue
    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for city in &self.cities {
            if city.key.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "City '{}' has an empty key",
                    city.name
                )));
            }
            if !keys.insert(city.key.as_str()) {
                return Err(Error::Validation(format!(
                    "Duplicate city key: {}",
                    city.key
                )));
            }

            let mut ids = HashSet::new();
            for venue in &city.venues {
                venue.validate()?;
                if !ids.insert(venue.id) {
                    return Err(Error::Validation(format!(
                        "Duplicate venue id {} in city {}",
                        venue.id, city.key
                    )));
                }
            }
        }

        if !keys.contains(self.default_city.as_str()) {
            return Err(Error::Validation(format!(
                "Default city '{}' is not in the catalog",
                self.default_city
            )));
        }
        Ok(())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, key: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.key == key)
    }

    /// Venues for a city key, if the city exists
    pub fn venues_for_city(&self, key: &str) -> Option<&[Venue]> {
        self.city(key).map(|c| c.venues.as_slice())
    }

    pub fn default_city(&self) -> Result<&City> {
        self.city(&self.default_city)
            .ok_or_else(|| Error::NotFound(format!("city {}", self.default_city)))
    }

    /// Look up a city, falling back to the default city for unknown keys
    pub fn city_or_default(&self, key: &str) -> Result<&City> {
        match self.city(key) {
            Some(city) => Ok(city),
            None => {
                tracing::warn!(
                    city = key,
                    fallback = self.default_city.as_str(),
                    "Unknown city, using default"
                );
                self.default_city()
            }
        }
    }

    /// Find a venue in a city by id or name
    pub fn find_venue(&self, city_key: &str, name_or_id: &str) -> Result<&Venue> {
        let city = self
            .city(city_key)
            .ok_or_else(|| Error::NotFound(format!("city {}", city_key)))?;
        city.find_venue(name_or_id)
            .ok_or_else(|| Error::NotFound(format!("venue '{}' in {}", name_or_id, city_key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VenueCategory;

    const SMALL_CATALOG: &str = r#"
default_city = "springfield"

[[cities]]
key = "springfield"
name = "Springfield"

[[cities.venues]]
id = 1
name = "Moe's"
category = "Brewery"
crowd = 55
safety = 70

[[cities.venues.events]]
name = "Karaoke"
time = "21:00"
impact = "Loud"
"#;

    #[test]
    fn test_embedded_catalog() {
        let catalog = Catalog::embedded().unwrap();

        assert_eq!(catalog.default_city, "oak-cliff");
        let keys: Vec<&str> = catalog.cities().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["oak-cliff", "reno"]);
        assert_eq!(catalog.venues_for_city("oak-cliff").unwrap().len(), 5);
        assert_eq!(catalog.venues_for_city("reno").unwrap().len(), 4);
        assert_eq!(catalog.source(), &ConfigSource::Builtin);
    }

    #[test]
    fn test_embedded_venue_details() {
        let catalog = Catalog::embedded().unwrap();
        let field = catalog.find_venue("reno", "Greater Nevada Field").unwrap();

        assert_eq!(field.category, VenueCategory::SportsAndEvents);
        assert_eq!(field.events.len(), 1);
        assert_eq!(field.events[0].hour(), 19);
        assert_eq!(field.events[0].crowd_surge, Some(95));
        assert_eq!(field.alerts.len(), 2);
    }

    #[test]
    fn test_from_toml() {
        let catalog = Catalog::from_toml(SMALL_CATALOG).unwrap();
        let venue = catalog.find_venue("springfield", "1").unwrap();

        assert_eq!(venue.name, "Moe's");
        assert_eq!(venue.category, VenueCategory::Brewery);
        assert_eq!(venue.events[0].hour(), 21);
        assert!(venue.address.is_none());
    }

    #[test]
    fn test_malformed_event_time_rejected() {
        let content = SMALL_CATALOG.replace("21:00", "9pm");
        assert!(Catalog::from_toml(&content).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let content = SMALL_CATALOG.replace("Brewery", "Casino");
        assert!(Catalog::from_toml(&content).is_err());
    }

    #[test]
    fn test_out_of_range_crowd_rejected() {
        let content = SMALL_CATALOG.replace("crowd = 55", "crowd = 120");
        assert!(matches!(
            Catalog::from_toml(&content),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_default_city_rejected() {
        let content = SMALL_CATALOG.replace(
            "default_city = \"springfield\"",
            "default_city = \"shelbyville\"",
        );
        assert!(matches!(
            Catalog::from_toml(&content),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_duplicate_city_rejected() {
        let city = City {
            key: "reno".to_string(),
            name: "Reno".to_string(),
            subtitle: None,
            description: None,
            venues: vec![],
        };
        let result = Catalog::new("reno", vec![city.clone(), city]);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_duplicate_venue_id_rejected() {
        let venue = Venue::new(1, "Twice", VenueCategory::Outdoor, 10, 10);
        let city = City {
            key: "reno".to_string(),
            name: "Reno".to_string(),
            subtitle: None,
            description: None,
            venues: vec![venue.clone(), venue],
        };
        assert!(Catalog::new("reno", vec![city]).is_err());
    }

    #[test]
    fn test_city_lookup_and_fallback() {
        let catalog = Catalog::embedded().unwrap();

        assert!(catalog.city("atlantis").is_none());
        assert!(catalog.venues_for_city("atlantis").is_none());
        assert_eq!(catalog.city_or_default("atlantis").unwrap().key, "oak-cliff");
        assert_eq!(catalog.city_or_default("reno").unwrap().name, "Reno");
    }

    #[test]
    fn test_find_venue_not_found() {
        let catalog = Catalog::embedded().unwrap();

        assert!(matches!(
            catalog.find_venue("reno", "Fuel City Tacos"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            catalog.find_venue("atlantis", "1"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_load_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.toml");
        std::fs::write(&path, SMALL_CATALOG).unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.default_city, "springfield");
        assert_eq!(catalog.source(), &ConfigSource::File(path));
    }

    #[test]
    fn test_load_missing_override_uses_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(Some(&dir.path().join("missing.toml"))).unwrap();

        assert_eq!(catalog.default_city, "oak-cliff");
        assert_eq!(catalog.source(), &ConfigSource::Builtin);
    }
}
