//! Explorer and 3D viewer payloads.
//!
//! Combines the processed catalog with projected positions, display colors
//! and summary statistics, so the frontend renders without recomputing any
//! of it.

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{Catalog, PlanetCategory, ProcessedExoplanet};
use crate::services::colors::{category_color, habitability_color};
use crate::services::filtering::{filter_exoplanets, sort_exoplanets, FilterCriteria, SortField};
use crate::services::projection::{project_record, CartesianPosition, ProjectionSettings};

/// Filter and sort selection coming from the explorer controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerQuery {
    #[serde(flatten)]
    pub filters: FilterCriteria,
    #[serde(default)]
    pub sort_by: Option<SortField>,
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_ascending() -> bool {
    true
}

impl Default for ExplorerQuery {
    fn default() -> Self {
        Self {
            filters: FilterCriteria::default(),
            sort_by: None,
            ascending: true,
        }
    }
}

/// One planet as the viewers consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerPlanet {
    #[serde(flatten)]
    pub planet: ProcessedExoplanet,
    /// Position in the full 3D viewer
    pub position: CartesianPosition,
    /// Position in the compact viewer
    pub compact_position: CartesianPosition,
    pub category_color: String,
    pub habitability_color: String,
}

/// Legend entry for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: PlanetCategory,
    pub color: String,
    pub count: usize,
}

/// Summary shown next to the scatter plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerStats {
    pub total_count: usize,
    pub catalog_count: usize,
    pub mean_habitability: f64,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub most_habitable_id: Option<String>,
}

/// Explorer visualization data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerData {
    pub planets: Vec<ExplorerPlanet>,
    pub categories: Vec<CategoryInfo>,
    pub stats: ExplorerStats,
}

/// Attach positions and colors to a processed planet.
pub fn decorate_planet(
    planet: ProcessedExoplanet,
    settings: &ProjectionSettings,
) -> ExplorerResult<ExplorerPlanet> {
    let position = project_record(&planet.record, settings.primary_scale)?;
    let compact_position = project_record(&planet.record, settings.compact_scale)?;
    Ok(ExplorerPlanet {
        category_color: category_color(planet.category).to_string(),
        habitability_color: habitability_color(planet.habitability).to_string(),
        position,
        compact_position,
        planet,
    })
}

/// Processed catalog after the query's filters and optional sort.
pub fn query_planets(catalog: &Catalog, query: &ExplorerQuery) -> Vec<ProcessedExoplanet> {
    let filtered = filter_exoplanets(&catalog.processed(), &query.filters);
    match query.sort_by {
        Some(field) => sort_exoplanets(&filtered, field, query.ascending),
        None => filtered,
    }
}

/// Build the explorer payload for a query.
pub fn compute_explorer_data(
    catalog: &Catalog,
    query: &ExplorerQuery,
    settings: &ProjectionSettings,
) -> ExplorerResult<ExplorerData> {
    let selected = query_planets(catalog, query);

    let mut habitability_sum = 0.0;
    let mut distance_min: Option<f64> = None;
    let mut distance_max: Option<f64> = None;
    let mut most_habitable: Option<(&str, f64)> = None;

    for planet in &selected {
        habitability_sum += planet.habitability;
        let d = planet.record.distance.value();
        distance_min = Some(distance_min.map_or(d, |v| v.min(d)));
        distance_max = Some(distance_max.map_or(d, |v| v.max(d)));

        if most_habitable.map_or(true, |(_, best)| planet.habitability > best) {
            most_habitable = Some((planet.record.id.as_str(), planet.habitability));
        }
    }

    let categories = PlanetCategory::ALL
        .iter()
        .map(|category| CategoryInfo {
            category: *category,
            color: category_color(*category).to_string(),
            count: selected.iter().filter(|p| p.category == *category).count(),
        })
        .collect();

    let total_count = selected.len();
    let stats = ExplorerStats {
        total_count,
        catalog_count: catalog.len(),
        mean_habitability: if total_count > 0 {
            habitability_sum / total_count as f64
        } else {
            0.0
        },
        distance_min,
        distance_max,
        most_habitable_id: most_habitable.map(|(id, _)| id.to_string()),
    };

    let planets = selected
        .into_iter()
        .map(|p| decorate_planet(p, settings))
        .collect::<ExplorerResult<Vec<_>>>()?;

    log::debug!(
        "Explorer view: {} of {} planets selected",
        stats.total_count,
        stats.catalog_count
    );

    Ok(ExplorerData {
        planets,
        categories,
        stats,
    })
}

/// Look up one planet with its derived fields and positions.
pub fn find_planet(
    catalog: &Catalog,
    id: &str,
    settings: &ProjectionSettings,
) -> ExplorerResult<ExplorerPlanet> {
    let record = catalog
        .get(id)
        .ok_or_else(|| ExplorerError::NotFound(format!("exoplanet '{}'", id)))?;
    decorate_planet(ProcessedExoplanet::from_record(record), settings)
}

#[cfg(test)]
#[path = "explorer_tests.rs"]
mod tests;
