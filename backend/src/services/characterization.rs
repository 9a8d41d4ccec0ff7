use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, ExplorerResult};

/// Inputs for the simplified transit signal-to-noise estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnrInputs {
    pub stellar_radius: f64,
    /// Same unit as `stellar_radius`
    pub planetary_radius: f64,
    pub telescope_diameter: f64,
    pub distance: f64,
}

/// Simplified transit SNR: transit depth times relative stellar flux, over
/// a noise floor that shrinks with aperture.
///
/// ```text
/// depth = (rp / rs)^2
/// flux  = rs^2 / d^2
/// noise = 1 / sqrt(D)
/// snr   = depth * flux / noise
/// ```
pub fn calculate_snr(inputs: &SnrInputs) -> ExplorerResult<f64> {
    let SnrInputs {
        stellar_radius,
        planetary_radius,
        telescope_diameter,
        distance,
    } = *inputs;

    for (name, value) in [
        ("stellar radius", stellar_radius),
        ("telescope diameter", telescope_diameter),
        ("distance", distance),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ExplorerError::invalid_input(format!(
                "{} must be strictly positive, got {}",
                name, value
            )));
        }
    }
    if !(planetary_radius.is_finite() && planetary_radius >= 0.0) {
        return Err(ExplorerError::invalid_input(format!(
            "planetary radius must be non-negative, got {}",
            planetary_radius
        )));
    }

    let transit_depth = (planetary_radius / stellar_radius).powi(2);
    let stellar_flux = stellar_radius.powi(2) / distance.powi(2);
    let noise = 1.0 / telescope_diameter.sqrt();

    Ok(transit_depth * stellar_flux / noise)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_value() {
        // depth = 0.01, flux = 1/4, noise = 1/2 -> 0.005
        let snr = calculate_snr(&SnrInputs {
            stellar_radius: 1.0,
            planetary_radius: 0.1,
            telescope_diameter: 4.0,
            distance: 2.0,
        })
        .unwrap();
        assert!((snr - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_larger_aperture_increases_snr() {
        let base = SnrInputs {
            stellar_radius: 0.5,
            planetary_radius: 0.05,
            telescope_diameter: 1.0,
            distance: 10.0,
        };
        let big = SnrInputs {
            telescope_diameter: 6.5,
            ..base
        };
        assert!(calculate_snr(&big).unwrap() > calculate_snr(&base).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        let ok = SnrInputs {
            stellar_radius: 1.0,
            planetary_radius: 0.1,
            telescope_diameter: 4.0,
            distance: 2.0,
        };
        assert!(calculate_snr(&SnrInputs { distance: 0.0, ..ok }).is_err());
        assert!(calculate_snr(&SnrInputs { stellar_radius: -1.0, ..ok }).is_err());
        assert!(calculate_snr(&SnrInputs { telescope_diameter: f64::NAN, ..ok }).is_err());
        assert!(calculate_snr(&SnrInputs { planetary_radius: -0.1, ..ok }).is_err());
    }
}
