use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExplorerError, ExplorerResult};
use crate::services::{classifier, habitability};

/// Size/temperature class of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetCategory {
    #[serde(rename = "Terrestrial")]
    Terrestrial,
    #[serde(rename = "Super Earth")]
    SuperEarth,
    #[serde(rename = "Neptunian")]
    Neptunian,
    #[serde(rename = "Gas Giant")]
    GasGiant,
}

impl PlanetCategory {
    pub const ALL: [PlanetCategory; 4] = [
        PlanetCategory::Terrestrial,
        PlanetCategory::SuperEarth,
        PlanetCategory::Neptunian,
        PlanetCategory::GasGiant,
    ];

    /// Label shown to users (and used on the wire).
    pub fn label(&self) -> &'static str {
        match self {
            PlanetCategory::Terrestrial => "Terrestrial",
            PlanetCategory::SuperEarth => "Super Earth",
            PlanetCategory::Neptunian => "Neptunian",
            PlanetCategory::GasGiant => "Gas Giant",
        }
    }
}

impl fmt::Display for PlanetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanetCategory {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "terrestrial" => Ok(PlanetCategory::Terrestrial),
            "superearth" => Ok(PlanetCategory::SuperEarth),
            "neptunian" => Ok(PlanetCategory::Neptunian),
            "gasgiant" => Ok(PlanetCategory::GasGiant),
            _ => Err(ExplorerError::invalid_input(format!(
                "Unknown planet category '{}'",
                s
            ))),
        }
    }
}

/// One catalogued exoplanet as it appears in the seed data.
///
/// Habitability and category are not part of the record; see
/// [`ProcessedExoplanet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExoplanetRecord {
    pub id: String,
    pub name: String,
    /// Right ascension, [0, 360)
    pub ra: qtty::Degrees,
    /// Declination, [-90, 90]
    pub dec: qtty::Degrees,
    pub distance: qtty::Parsecs,
    /// Earth radii
    pub radius: f64,
    /// Earth masses
    pub mass: f64,
    /// Equilibrium temperature in Kelvin
    pub temperature: f64,
    /// Orbital period in days
    pub period: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_eccentricity: Option<f64>,
    /// Relative to Earth = 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insolation_flux: Option<f64>,
    /// Host star spectral letter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_type: Option<String>,
    pub discovery_year: i32,
    /// Solar radii
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_radius: Option<f64>,
    /// Solar masses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_mass: Option<f64>,
    /// Stellar effective temperature in Kelvin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_temperature: Option<f64>,
}

impl ExoplanetRecord {
    /// Check the record's physical invariants.
    pub fn validate(&self) -> ExplorerResult<()> {
        if self.id.trim().is_empty() {
            return Err(ExplorerError::invalid_record(&self.id, "id must not be empty"));
        }

        let positive = [
            ("distance", self.distance.value()),
            ("radius", self.radius),
            ("mass", self.mass),
            ("temperature", self.temperature),
            ("period", self.period),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ExplorerError::invalid_record(
                    &self.id,
                    format!("{} must be strictly positive, got {}", field, value),
                ));
            }
        }

        let ra = self.ra.value();
        if !(0.0..360.0).contains(&ra) {
            return Err(ExplorerError::invalid_record(
                &self.id,
                format!("right ascension {} outside [0, 360)", ra),
            ));
        }
        let dec = self.dec.value();
        if !(-90.0..=90.0).contains(&dec) {
            return Err(ExplorerError::invalid_record(
                &self.id,
                format!("declination {} outside [-90, 90]", dec),
            ));
        }

        if let Some(e) = self.orbital_eccentricity {
            if !(0.0..1.0).contains(&e) {
                return Err(ExplorerError::invalid_record(
                    &self.id,
                    format!("eccentricity {} outside [0, 1)", e),
                ));
            }
        }

        Ok(())
    }
}

/// A record together with its derived habitability score and category.
///
/// Always built from a record via [`ProcessedExoplanet::from_record`], so the
/// derived fields can never drift from the raw data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedExoplanet {
    #[serde(flatten)]
    pub record: ExoplanetRecord,
    pub habitability: f64,
    pub category: PlanetCategory,
}

impl ProcessedExoplanet {
    pub fn from_record(record: &ExoplanetRecord) -> Self {
        Self {
            habitability: habitability::score_record(record),
            category: classifier::classify(record.radius, record.temperature),
            record: record.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ExoplanetRecord {
        ExoplanetRecord {
            id: "kepler-452b".to_string(),
            name: "Kepler-452b".to_string(),
            ra: qtty::Degrees::new(19.44),
            dec: qtty::Degrees::new(44.27),
            distance: qtty::Parsecs::new(1402.0),
            radius: 1.63,
            mass: 5.0,
            temperature: 265.0,
            period: 384.8,
            orbital_eccentricity: Some(0.0),
            insolation_flux: Some(1.1),
            star_type: Some("G".to_string()),
            discovery_year: 2015,
            stellar_radius: Some(1.11),
            stellar_mass: Some(1.04),
            stellar_temperature: Some(5757.0),
        }
    }

    #[test]
    fn test_category_labels_round_trip_through_from_str() {
        for category in PlanetCategory::ALL {
            assert_eq!(category.label().parse::<PlanetCategory>().unwrap(), category);
        }
        assert_eq!(
            "super_earth".parse::<PlanetCategory>().unwrap(),
            PlanetCategory::SuperEarth
        );
        assert!("Ice Giant".parse::<PlanetCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&PlanetCategory::GasGiant).unwrap();
        assert_eq!(json, "\"Gas Giant\"");
    }

    #[test]
    fn test_valid_record_passes_validation() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_non_positive_fields_are_rejected() {
        let mut record = sample_record();
        record.radius = 0.0;
        assert!(record.validate().is_err());

        let mut record = sample_record();
        record.distance = qtty::Parsecs::new(-1.0);
        assert!(record.validate().is_err());

        let mut record = sample_record();
        record.period = f64::NAN;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_coordinate_ranges_are_checked() {
        let mut record = sample_record();
        record.ra = qtty::Degrees::new(360.0);
        assert!(record.validate().is_err());

        let mut record = sample_record();
        record.dec = qtty::Degrees::new(-90.5);
        assert!(record.validate().is_err());

        let mut record = sample_record();
        record.orbital_eccentricity = Some(1.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_processed_serializes_flat_camel_case() {
        let processed = ProcessedExoplanet::from_record(&sample_record());
        let value = serde_json::to_value(&processed).unwrap();

        assert_eq!(value["id"], "kepler-452b");
        assert_eq!(value["discoveryYear"], 2015);
        assert_eq!(value["insolationFlux"], 1.1);
        assert_eq!(value["category"], "Super Earth");
        assert!(value["habitability"].as_f64().unwrap() > 0.7);
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let json = r#"{
            "id": "x", "name": "X", "ra": 10.0, "dec": 5.0, "distance": 3.0,
            "radius": 1.0, "mass": 1.0, "temperature": 288.0, "period": 365.0,
            "discoveryYear": 2020
        }"#;
        let record: ExoplanetRecord = serde_json::from_str(json).unwrap();
        assert!(record.star_type.is_none());
        assert!(record.insolation_flux.is_none());
        assert_eq!(record.distance.value(), 3.0);
    }
}
