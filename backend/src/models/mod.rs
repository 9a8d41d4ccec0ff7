pub mod catalog;
pub mod exoplanet;
pub mod macros;

pub use catalog::*;
pub use exoplanet::*;
