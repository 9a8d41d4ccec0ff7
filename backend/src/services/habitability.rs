//! Composite habitability score.
//!
//! Each available factor is mapped to `[0, 1]` by a bell-shaped falloff around
//! its Earth-like ideal, then the factors are averaged using their weights.
//! Only factors that are present contribute to the denominator, so a planet
//! with partial data is not penalised for what is missing.

use serde::{Deserialize, Serialize};

use crate::models::ExoplanetRecord;

pub const INSOLATION_WEIGHT: f64 = 0.30;
pub const RADIUS_WEIGHT: f64 = 0.25;
pub const TEMPERATURE_WEIGHT: f64 = 0.20;
pub const ECCENTRICITY_WEIGHT: f64 = 0.15;
pub const STAR_TYPE_WEIGHT: f64 = 0.10;

const IDEAL_INSOLATION: f64 = 1.0;
const INSOLATION_SPREAD: f64 = 0.3;
const IDEAL_RADIUS: f64 = 1.0;
const RADIUS_SPREAD: f64 = 0.5;
const IDEAL_TEMPERATURE_K: f64 = 288.0;
const TEMPERATURE_SPREAD_K: f64 = 50.0;
const ECCENTRICITY_FALLOFF: f64 = 10.0;

/// Factors the score can use. Any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitabilityInputs {
    #[serde(default)]
    pub insolation_flux: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub orbital_eccentricity: Option<f64>,
    #[serde(default)]
    pub star_type: Option<String>,
}

impl From<&ExoplanetRecord> for HabitabilityInputs {
    fn from(record: &ExoplanetRecord) -> Self {
        Self {
            insolation_flux: record.insolation_flux,
            radius: Some(record.radius),
            temperature: Some(record.temperature),
            orbital_eccentricity: record.orbital_eccentricity,
            star_type: record.star_type.clone(),
        }
    }
}

fn falloff(value: f64, ideal: f64, spread: f64) -> f64 {
    (-((value - ideal) / spread).powi(2)).exp()
}

/// Score for the host star's spectral letter.
pub fn star_type_score(star_type: &str) -> f64 {
    match star_type {
        "G" => 1.0,
        "K" => 0.9,
        "M" => 0.7,
        _ => 0.5,
    }
}

/// Weighted habitability score in `[0, 1]`; `0.0` when no factor is known.
pub fn habitability_score(inputs: &HabitabilityInputs) -> f64 {
    let mut score = 0.0;
    let mut weight = 0.0;

    if let Some(flux) = inputs.insolation_flux {
        score += falloff(flux, IDEAL_INSOLATION, INSOLATION_SPREAD) * INSOLATION_WEIGHT;
        weight += INSOLATION_WEIGHT;
    }

    if let Some(radius) = inputs.radius {
        score += falloff(radius, IDEAL_RADIUS, RADIUS_SPREAD) * RADIUS_WEIGHT;
        weight += RADIUS_WEIGHT;
    }

    if let Some(temperature) = inputs.temperature {
        score += falloff(temperature, IDEAL_TEMPERATURE_K, TEMPERATURE_SPREAD_K)
            * TEMPERATURE_WEIGHT;
        weight += TEMPERATURE_WEIGHT;
    }

    // Eccentricity is never negative; below zero scores like a circular orbit.
    if let Some(eccentricity) = inputs.orbital_eccentricity {
        score += (-eccentricity.max(0.0) * ECCENTRICITY_FALLOFF).exp() * ECCENTRICITY_WEIGHT;
        weight += ECCENTRICITY_WEIGHT;
    }

    // An empty spectral type carries no information.
    if let Some(star) = inputs.star_type.as_deref().filter(|s| !s.is_empty()) {
        score += star_type_score(star) * STAR_TYPE_WEIGHT;
        weight += STAR_TYPE_WEIGHT;
    }

    if weight > 0.0 {
        (score / weight).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Score a catalog record using every factor it carries.
pub fn score_record(record: &ExoplanetRecord) -> f64 {
    habitability_score(&HabitabilityInputs::from(record))
}
