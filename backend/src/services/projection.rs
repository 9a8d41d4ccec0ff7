//! Celestial coordinates to 3D scene positions.
//!
//! Distances are compressed with `log10(d + 1) * scale` so that Proxima
//! Centauri (1.3 pc) and Kepler-452b (1402 pc) fit in the same scene. The
//! result is meant for rendering only and is not astrometrically exact.

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, ExplorerResult};
use crate::models::ExoplanetRecord;

/// Scale factor used by the full-size 3D viewer.
pub const PRIMARY_SCALE: f64 = 5.0;
/// Scale factor used by the compact viewer embedded in result cards.
pub const COMPACT_SCALE: f64 = 3.0;

/// Multiplier applied to the logarithmic distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionScale {
    #[default]
    Primary,
    Compact,
    Custom(f64),
}

/// Resolved scale factors for the two viewers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub primary_scale: f64,
    pub compact_scale: f64,
}

impl ProjectionSettings {
    /// Resolve a named scale against these settings.
    pub fn resolve(&self, scale: ProjectionScale) -> f64 {
        match scale {
            ProjectionScale::Primary => self.primary_scale,
            ProjectionScale::Compact => self.compact_scale,
            ProjectionScale::Custom(f) => f,
        }
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            primary_scale: PRIMARY_SCALE,
            compact_scale: COMPACT_SCALE,
        }
    }
}

/// Scene position, y-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    pub const ORIGIN: CartesianPosition = CartesianPosition {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance from the scene origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Project (RA, Dec, distance) into the scene using `scale` as multiplier.
///
/// # Errors
///
/// Negative distances are rejected with [`ExplorerError::NegativeDistance`];
/// non-finite inputs with [`ExplorerError::InvalidInput`].
pub fn celestial_to_cartesian(
    ra: qtty::Degrees,
    dec: qtty::Degrees,
    distance: qtty::Parsecs,
    scale: f64,
) -> ExplorerResult<CartesianPosition> {
    let (ra, dec, distance) = (ra.value(), dec.value(), distance.value());
    if !(ra.is_finite() && dec.is_finite() && distance.is_finite() && scale.is_finite()) {
        return Err(ExplorerError::invalid_input(format!(
            "non-finite projection input (ra={}, dec={}, distance={}, scale={})",
            ra, dec, distance, scale
        )));
    }
    if distance < 0.0 {
        return Err(ExplorerError::NegativeDistance(distance));
    }

    let ra_rad = ra.to_radians();
    let dec_rad = dec.to_radians();
    let scaled_distance = (distance + 1.0).log10() * scale;

    Ok(CartesianPosition {
        x: scaled_distance * dec_rad.cos() * ra_rad.cos(),
        y: scaled_distance * dec_rad.sin(),
        z: scaled_distance * dec_rad.cos() * ra_rad.sin(),
    })
}

/// Project a catalog record.
pub fn project_record(record: &ExoplanetRecord, scale: f64) -> ExplorerResult<CartesianPosition> {
    celestial_to_cartesian(record.ra, record.dec, record.distance, scale)
}
