//! # Exoplanet Explorer Backend
//!
//! Data processing and REST API for the NASA Exoplanet Explorer.
//!
//! This crate owns the exoplanet dataset utilities the explorer views are built
//! on (classification, habitability scoring, sky-to-Cartesian projection,
//! filtering and sorting) and the HTTP surface the React frontend talks to:
//! catalog endpoints, a mock light-curve analysis endpoint, and passthrough
//! proxies to the external ML backend.
//!
//! ## Architecture
//!
//! - [`models`]: catalog records, derived views and the seed catalog
//! - [`services`]: pure processing functions and the analysis/proxy services
//! - [`config`]: TOML + environment configuration
//! - [`error`]: crate-wide error type
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use exoplanet_explorer::models::Catalog;
//! use exoplanet_explorer::services::filtering::{sort_exoplanets, SortField};
//!
//! let catalog = Catalog::seed();
//! let nearest = sort_exoplanets(&catalog.processed(), SortField::Distance, true);
//! assert_eq!(nearest[0].record.id, "proxima-centauri-b");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ExplorerError, ExplorerResult};
