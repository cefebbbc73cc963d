//! Rent Gradient Module
//! Linear red (high rent) to green (low rent) marker coloring.

use crate::data::RentRecord;
use serde::Serialize;

/// Minimum and maximum rent over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentRange {
    pub min: f64,
    pub max: f64,
}

impl RentRange {
    /// `None` for an empty dataset.
    pub fn from_dataset(dataset: &[RentRecord]) -> Option<Self> {
        let mut rents = dataset.iter().map(|r| r.loyer);
        let first = rents.next()?;
        let (min, max) = rents.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// Position of `loyer` in the range, clamped to [0, 1].
    ///
    /// A degenerate range (all rents equal) puts every rent at the midpoint.
    pub fn ratio(&self, loyer: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((loyer - self.min) / span).clamp(0.0, 1.0)
    }

    /// Marker color for `loyer`. The page script's `color` computes the same value.
    pub fn color(&self, loyer: f64) -> Rgb {
        let ratio = self.ratio(loyer);
        Rgb {
            r: (255.0 * ratio).floor() as u8,
            g: (255.0 * (1.0 - ratio)).floor() as u8,
            b: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Legend entries: (swatch color, label).
pub const LEGEND: [(Rgb, &str); 3] = [
    (Rgb { r: 255, g: 0, b: 0 }, "Loyer élevé"),
    (Rgb { r: 255, g: 255, b: 0 }, "Loyer moyen"),
    (Rgb { r: 0, g: 255, b: 0 }, "Loyer bas"),
];
