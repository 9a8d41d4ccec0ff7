//! Data Transfer Objects for the HTTP API.
//!
//! Service types that already derive Serialize/Deserialize are re-exported
//! and used as-is. The types below cover query strings and the small
//! calculator endpoints.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub use crate::models::{PlanetCategory, ProcessedExoplanet};
pub use crate::services::characterization::SnrInputs;
pub use crate::services::explorer::{ExplorerData, ExplorerPlanet};
pub use crate::services::habitability::HabitabilityInputs;
pub use crate::services::mock_analysis::{AnalysisRequest, AnalysisResult};
pub use crate::services::projection::{CartesianPosition, ProjectionScale};

use crate::error::ExplorerError;
use crate::services::explorer::ExplorerQuery;
use crate::services::filtering::{FilterCriteria, SortField};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of records in the loaded catalog
    pub catalog_size: usize,
}

/// Query string for the catalog and explorer endpoints.
///
/// Kept flat because query strings cannot carry nested structures. Forms
/// submit untouched inputs as `key=`, so blank values count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQueryParams {
    /// Category name, e.g. `Super Earth` or `super-earth`
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_habitability: Option<f64>,
    /// Parsecs
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_distance: Option<f64>,
    #[serde(default)]
    pub star_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_discovery_year: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_by: Option<SortField>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub ascending: Option<bool>,
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

impl TryFrom<CatalogQueryParams> for ExplorerQuery {
    type Error = ExplorerError;

    fn try_from(params: CatalogQueryParams) -> Result<Self, Self::Error> {
        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PlanetCategory::from_str)
            .transpose()?;

        Ok(ExplorerQuery {
            filters: FilterCriteria {
                category,
                min_habitability: params.min_habitability,
                max_distance: params.max_distance,
                star_type: params.star_type.filter(|s| !s.trim().is_empty()),
                min_discovery_year: params.min_discovery_year,
            },
            sort_by: params.sort_by,
            ascending: params.ascending.unwrap_or(true),
        })
    }
}

/// Processed catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExoplanetListResponse {
    pub exoplanets: Vec<ProcessedExoplanet>,
    pub total: usize,
}

/// Request body for a single projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// Distance in parsecs
    pub distance: f64,
    #[serde(default)]
    pub scale: ProjectionScale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub position: CartesianPosition,
    pub scale_factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Earth radii
    pub radius: f64,
    /// Kelvin
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub category: PlanetCategory,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitabilityResponse {
    pub score: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnrResponse {
    pub snr: f64,
}

/// Mock analysis result with an id and timestamp for the client's history.
///
/// Field names stay snake_case like the result card expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl AnalyzeResponse {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_convert() {
        let params = CatalogQueryParams {
            category: Some("super-earth".into()),
            star_type: Some("  ".into()),
            sort_by: Some(SortField::Distance),
            ..Default::default()
        };
        let query = ExplorerQuery::try_from(params).unwrap();
        assert_eq!(query.filters.category, Some(PlanetCategory::SuperEarth));
        assert!(query.filters.star_type.is_none());
        assert_eq!(query.sort_by, Some(SortField::Distance));
        assert!(query.ascending);
    }

    #[test]
    fn test_query_params_blank_values_are_absent() {
        let params: CatalogQueryParams = serde_json::from_value(serde_json::json!({
            "category": "",
            "minHabitability": "",
            "maxDistance": " ",
            "minDiscoveryYear": "",
            "sortBy": "",
            "ascending": ""
        }))
        .unwrap();
        assert!(params.min_habitability.is_none());
        assert!(params.max_distance.is_none());
        assert!(params.min_discovery_year.is_none());
        assert!(params.sort_by.is_none());
        assert!(params.ascending.is_none());

        let query = ExplorerQuery::try_from(params).unwrap();
        assert!(query.filters.is_empty());
        assert!(query.ascending);
    }

    #[test]
    fn test_query_params_parse_present_values() {
        let params: CatalogQueryParams = serde_json::from_value(serde_json::json!({
            "minHabitability": "0",
            "maxDistance": "12.5",
            "sortBy": "discoveryYear",
            "ascending": "false"
        }))
        .unwrap();
        assert_eq!(params.min_habitability, Some(0.0));
        assert_eq!(params.max_distance, Some(12.5));
        assert_eq!(params.sort_by, Some(SortField::DiscoveryYear));
        assert_eq!(params.ascending, Some(false));

        let bad = serde_json::from_value::<CatalogQueryParams>(serde_json::json!({
            "maxDistance": "far"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_query_params_reject_unknown_category() {
        let params = CatalogQueryParams {
            category: Some("Dwarf".into()),
            ..Default::default()
        };
        assert!(ExplorerQuery::try_from(params).is_err());
    }

    #[test]
    fn test_projection_request_default_scale() {
        let req: ProjectionRequest =
            serde_json::from_str(r#"{"ra": 10.0, "dec": -5.0, "distance": 12.0}"#).unwrap();
        assert_eq!(req.scale, ProjectionScale::Primary);

        let req: ProjectionRequest = serde_json::from_str(
            r#"{"ra": 10.0, "dec": -5.0, "distance": 12.0, "scale": "compact"}"#,
        )
        .unwrap();
        assert_eq!(req.scale, ProjectionScale::Compact);
    }
}
