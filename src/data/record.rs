//! Rent Record Module
//! The cleaned, validated row shape shared by the loader and the map.

use serde::{Deserialize, Serialize};

/// One row of cleaned rent-control reference data.
///
/// Serializes as a flat six-key mapping, which is both the document shape
/// in the store and the element shape of the JSON embedded in the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentRecord {
    pub quartier: String,
    pub pieces: u32,
    /// Reference rent, euros per m².
    pub loyer: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub type_location: String,
}

/// Records in source row order after filtering.
pub type Dataset = Vec<RentRecord>;
