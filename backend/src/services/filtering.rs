use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ExplorerError;
use crate::models::{PlanetCategory, ProcessedExoplanet};

/// Explorer filter controls. An absent field does not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub category: Option<PlanetCategory>,
    #[serde(default)]
    pub min_habitability: Option<f64>,
    /// Parsecs
    #[serde(default)]
    pub max_distance: Option<f64>,
    #[serde(default)]
    pub star_type: Option<String>,
    #[serde(default)]
    pub min_discovery_year: Option<i32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self == &FilterCriteria::default()
    }

    /// Whether a single planet satisfies every supplied criterion.
    pub fn matches(&self, planet: &ProcessedExoplanet) -> bool {
        if let Some(category) = self.category {
            if planet.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_habitability {
            if planet.habitability < min {
                return false;
            }
        }
        if let Some(max) = self.max_distance {
            if planet.record.distance.value() > max {
                return false;
            }
        }
        if let Some(star) = self.star_type.as_deref() {
            if planet.record.star_type.as_deref() != Some(star) {
                return false;
            }
        }
        if let Some(year) = self.min_discovery_year {
            if planet.record.discovery_year < year {
                return false;
            }
        }
        true
    }
}

/// Keep the planets matching all criteria, preserving input order.
pub fn filter_exoplanets(
    planets: &[ProcessedExoplanet],
    criteria: &FilterCriteria,
) -> Vec<ProcessedExoplanet> {
    planets
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Numeric field to order the explorer list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Distance,
    Habitability,
    Radius,
    Temperature,
    DiscoveryYear,
}

impl SortField {
    pub fn key(&self, planet: &ProcessedExoplanet) -> f64 {
        match self {
            SortField::Distance => planet.record.distance.value(),
            SortField::Habitability => planet.habitability,
            SortField::Radius => planet.record.radius,
            SortField::Temperature => planet.record.temperature,
            SortField::DiscoveryYear => f64::from(planet.record.discovery_year),
        }
    }
}

impl FromStr for SortField {
    type Err = ExplorerError;

    /// Accepts the same names as the serde form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(SortField::Distance),
            "habitability" => Ok(SortField::Habitability),
            "radius" => Ok(SortField::Radius),
            "temperature" => Ok(SortField::Temperature),
            "discoveryYear" => Ok(SortField::DiscoveryYear),
            _ => Err(ExplorerError::invalid_input(format!(
                "Unknown sort field '{}'",
                s
            ))),
        }
    }
}

/// Return a new list ordered by `field`.
///
/// The sort is stable in both directions: planets with equal keys keep their
/// relative input order.
pub fn sort_exoplanets(
    planets: &[ProcessedExoplanet],
    field: SortField,
    ascending: bool,
) -> Vec<ProcessedExoplanet> {
    let mut sorted = planets.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

/// Ascending order of two planets by `field`, total over `f64` keys.
pub fn compare_by(field: SortField, a: &ProcessedExoplanet, b: &ProcessedExoplanet) -> Ordering {
    field.key(a).total_cmp(&field.key(b))
}
