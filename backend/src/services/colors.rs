use crate::models::PlanetCategory;

pub fn category_color(category: PlanetCategory) -> &'static str {
    match category {
        PlanetCategory::Terrestrial => "#4ade80", // Green
        PlanetCategory::SuperEarth => "#60a5fa",  // Blue
        PlanetCategory::GasGiant => "#f59e0b",    // Orange
        PlanetCategory::Neptunian => "#8b5cf6",   // Purple
    }
}

/// Banded color for a habitability score.
pub fn habitability_color(score: f64) -> &'static str {
    if score >= 0.8 {
        "#10b981" // Green
    } else if score >= 0.6 {
        "#f59e0b" // Yellow
    } else if score >= 0.4 {
        "#f97316" // Orange
    } else {
        "#ef4444" // Red
    }
}
