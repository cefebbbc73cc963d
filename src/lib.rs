//! Loyers Paris - rent-control reference data ETL
//!
//! Reads the Paris "encadrement des loyers" spreadsheet, cleans it, replaces a
//! MongoDB collection with the result and renders a filterable Leaflet map.

pub mod config;
pub mod data;
pub mod logger;
pub mod map;
pub mod pipeline;
pub mod store;

pub use data::{extract_transform, Dataset, RentRecord};
pub use map::render_map;
pub use store::load;
