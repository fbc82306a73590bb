//! Linear scales mapping season data onto chart coordinates.

use crate::types::TeamSeasonRecord;

/// Smallest domain width used when a season's data collapses to one value
pub const MIN_DOMAIN_WIDTH: f64 = 1e-6;

/// Linear mapping from a numeric domain onto a pixel range, unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Build a scale; a zero-width domain is widened to [`MIN_DOMAIN_WIDTH`]
    /// so that `apply` never divides by zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < MIN_DOMAIN_WIDTH {
            d1 = d0 + MIN_DOMAIN_WIDTH;
        }
        Self {
            domain: (d0, d1),
            range,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Horizontal (games played) and vertical (cumulative differential) scales,
/// shared by every chart of a season so positions compare across divisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePair {
    pub horizontal: LinearScale,
    pub vertical: LinearScale,
}

impl ScalePair {
    /// `width` and `height` are the plot area inside the chart margins.
    /// The vertical range is inverted: a higher differential draws nearer the top.
    pub fn from_records(records: &[TeamSeasonRecord], width: f64, height: f64) -> Self {
        let max_games = records.iter().map(|r| r.games).max().unwrap_or(0);

        let mut all_results = records.iter().flat_map(|r| r.results.iter().copied());
        let (min, max) = match all_results.next() {
            Some(first) => all_results.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))),
            None => (0, 0),
        };

        Self {
            horizontal: LinearScale::new((0.0, max_games as f64), (0.0, width)),
            vertical: LinearScale::new((min as f64, max as f64), (height, 0.0)),
        }
    }
}
