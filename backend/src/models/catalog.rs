//! The read-only exoplanet catalog.
//!
//! A [`Catalog`] is built once at startup (normally from [`Catalog::seed`])
//! and shared by reference afterwards. It never changes, so callers can hold
//! clones across threads without locking.

use std::collections::HashSet;
use std::sync::Arc;

use super::exoplanet::{ExoplanetRecord, ProcessedExoplanet};
use crate::error::{ExplorerError, ExplorerResult};

/// Immutable table of exoplanet records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ExoplanetRecord]>,
}

impl Catalog {
    /// Build a catalog from caller-supplied records.
    ///
    /// Every record is validated and ids must be unique.
    pub fn from_records(records: Vec<ExoplanetRecord>) -> ExplorerResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(ExplorerError::DuplicateId(record.id.clone()));
            }
        }
        log::debug!("Catalog built with {} records", records.len());
        Ok(Self {
            records: records.into(),
        })
    }

    /// The ten NASA Exoplanet Archive entries shipped with the explorer.
    pub fn seed() -> Self {
        Self {
            records: seed_records().into(),
        }
    }

    pub fn records(&self) -> &[ExoplanetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ExoplanetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records with habitability and category filled in, in catalog order.
    ///
    /// Derived fresh on each call.
    pub fn processed(&self) -> Vec<ProcessedExoplanet> {
        self.records
            .iter()
            .map(ProcessedExoplanet::from_record)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn seed_records() -> Vec<ExoplanetRecord> {
    vec![
        crate::seed_record! {
            id: "kepler-442b", name: "Kepler-442b",
            ra: 19.01, dec: 39.18, distance: 342.0,
            radius: 1.34, mass: 2.3, temperature: 233.0, period: 112.3,
            star: "K", year: 2015,
            stellar: (0.6, 0.61, 4402.0),
            ecc: 0.04, flux: 0.7,
        },
        crate::seed_record! {
            id: "kepler-186f", name: "Kepler-186f",
            ra: 19.54, dec: 43.91, distance: 492.0,
            radius: 1.17, mass: 1.4, temperature: 188.0, period: 129.9,
            star: "M", year: 2014,
            stellar: (0.47, 0.48, 3788.0),
            ecc: 0.04, flux: 0.32,
        },
        crate::seed_record! {
            id: "proxima-centauri-b", name: "Proxima Centauri b",
            ra: 14.29, dec: -62.68, distance: 1.3,
            radius: 1.3, mass: 1.27, temperature: 234.0, period: 11.2,
            star: "M", year: 2016,
            stellar: (0.15, 0.12, 3042.0),
            ecc: 0.35, flux: 0.65,
        },
        crate::seed_record! {
            id: "trappist-1e", name: "TRAPPIST-1e",
            ra: 23.06, dec: -5.04, distance: 12.4,
            radius: 0.92, mass: 0.69, temperature: 251.0, period: 6.1,
            star: "M", year: 2017,
            stellar: (0.12, 0.09, 2559.0),
            ecc: 0.01, flux: 0.6,
        },
        crate::seed_record! {
            id: "kepler-452b", name: "Kepler-452b",
            ra: 19.44, dec: 44.27, distance: 1402.0,
            radius: 1.63, mass: 5.0, temperature: 265.0, period: 384.8,
            star: "G", year: 2015,
            stellar: (1.11, 1.04, 5757.0),
            ecc: 0.0, flux: 1.1,
        },
        crate::seed_record! {
            id: "kepler-1649c", name: "Kepler-1649c",
            ra: 19.11, dec: 41.88, distance: 300.0,
            radius: 1.06, mass: 1.2, temperature: 237.0, period: 19.5,
            star: "M", year: 2020,
            stellar: (0.23, 0.2, 3240.0),
            ecc: 0.0, flux: 0.75,
        },
        crate::seed_record! {
            id: "toi-715b", name: "TOI-715b",
            ra: 19.25, dec: -79.32, distance: 137.0,
            radius: 1.55, mass: 3.0, temperature: 234.0, period: 19.3,
            star: "M", year: 2023,
            stellar: (0.24, 0.25, 3075.0),
            ecc: 0.0, flux: 0.67,
        },
        crate::seed_record! {
            id: "kepler-22b", name: "Kepler-22b",
            ra: 19.16, dec: 47.89, distance: 600.0,
            radius: 2.38, mass: 6.4, temperature: 262.0, period: 289.9,
            star: "G", year: 2011,
            stellar: (0.98, 0.97, 5518.0),
            ecc: 0.0, flux: 0.53,
        },
        crate::seed_record! {
            id: "hd-40307g", name: "HD 40307g",
            ra: 5.54, dec: -60.03, distance: 42.4,
            radius: 2.0, mass: 7.1, temperature: 278.0, period: 197.8,
            star: "K", year: 2012,
            stellar: (0.72, 0.77, 4977.0),
            ecc: 0.22, flux: 0.62,
        },
        crate::seed_record! {
            id: "gj-667cc", name: "GJ 667Cc",
            ra: 17.19, dec: -34.99, distance: 22.7,
            radius: 1.5, mass: 3.8, temperature: 277.0, period: 28.1,
            star: "M", year: 2011,
            stellar: (0.42, 0.33, 3700.0),
            ecc: 0.0, flux: 0.9,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanetCategory;

    #[test]
    fn test_seed_has_ten_valid_records() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
        for record in catalog.records() {
            assert!(record.validate().is_ok(), "{} failed validation", record.id);
        }
    }

    #[test]
    fn test_seed_passes_from_records() {
        let catalog = Catalog::from_records(Catalog::seed().records().to_vec()).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut records = Catalog::seed().records().to_vec();
        records.push(records[0].clone());
        let err = Catalog::from_records(records).unwrap_err();
        assert!(matches!(err, ExplorerError::DuplicateId(id) if id == "kepler-442b"));
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut records = Catalog::seed().records().to_vec();
        records[3].mass = -1.0;
        assert!(Catalog::from_records(records).is_err());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get("trappist-1e").unwrap().name, "TRAPPIST-1e");
        assert!(catalog.get("earth").is_none());
    }

    #[test]
    fn test_processed_keeps_order_and_derives_fields() {
        let catalog = Catalog::seed();
        let processed = catalog.processed();
        assert_eq!(processed.len(), catalog.len());
        for (p, r) in processed.iter().zip(catalog.records()) {
            assert_eq!(p.record.id, r.id);
            assert!((0.0..=1.0).contains(&p.habitability));
        }

        let trappist = processed.iter().find(|p| p.record.id == "trappist-1e").unwrap();
        assert_eq!(trappist.category, PlanetCategory::Terrestrial);
        let kepler22 = processed.iter().find(|p| p.record.id == "kepler-22b").unwrap();
        assert_eq!(kepler22.category, PlanetCategory::Neptunian);
    }

    #[test]
    fn test_processed_is_stable_across_calls() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.processed(), catalog.processed());
    }
}
