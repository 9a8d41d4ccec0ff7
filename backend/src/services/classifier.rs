use crate::models::PlanetCategory;

/// Classify a planet by radius (Earth radii) and equilibrium temperature (K).
///
/// Rules are checked in order and the first match wins. Combinations no rule
/// covers (e.g. small hot planets) fall back to [`PlanetCategory::SuperEarth`].
pub fn classify(radius: f64, temperature: f64) -> PlanetCategory {
    if radius > 10.0 && temperature > 1000.0 {
        PlanetCategory::GasGiant
    } else if (1.25..=2.0).contains(&radius) && (250.0..=500.0).contains(&temperature) {
        PlanetCategory::SuperEarth
    } else if radius <= 1.25 && (250.0..=350.0).contains(&temperature) {
        PlanetCategory::Terrestrial
    } else if (2.0..=10.0).contains(&radius) && temperature < 1000.0 {
        PlanetCategory::Neptunian
    } else {
        PlanetCategory::SuperEarth
    }
}
