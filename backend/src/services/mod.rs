//! Service layer for catalog processing and the analysis endpoints.
//!
//! The dataset utilities (`classifier`, `habitability`, `projection`,
//! `filtering`, `colors`) are pure functions over catalog records. `explorer`
//! composes them into viewer payloads. `mock_analysis` and `proxy` back the
//! analysis endpoints of the HTTP layer.

pub mod characterization;

pub mod classifier;

pub mod colors;

pub mod explorer;

pub mod filtering;

pub mod habitability;

pub mod mock_analysis;

pub mod projection;

pub mod proxy;

pub use classifier::classify;
pub use colors::{category_color, habitability_color};
pub use explorer::{compute_explorer_data, find_planet};
pub use filtering::{filter_exoplanets, sort_exoplanets};
pub use habitability::habitability_score;
pub use projection::celestial_to_cartesian;
