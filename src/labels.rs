//! Label placement for the per-team rows beside each chart.
//!
//! A label starts at the vertical position of its team's final differential and is
//! then nudged so no two labels in the same division overlap.

use crate::scale::LinearScale;
use crate::types::DivisionGroup;

/// Default vertical separation between two label rows, in chart pixels
pub const DEFAULT_LABEL_GAP: f64 = 11.0;

/// Assigns `label_position` to every row of a division.
///
/// Implementations must keep row order and every other field untouched, and
/// must leave any two positions at least the placer's minimum gap apart.
pub trait LabelPlacer {
    fn place(&self, group: DivisionGroup, vertical: &LinearScale) -> DivisionGroup;
}

/// Sweep-based placer: push labels down to respect the gap, then pull them
/// back up if the last one runs past `max_y`.
#[derive(Debug, Clone, Copy)]
pub struct SeparatingPlacer {
    pub min_gap: f64,
    pub max_y: f64,
}

impl SeparatingPlacer {
    /// A gap that is not a positive number falls back to `DEFAULT_LABEL_GAP`
    pub fn new(min_gap: f64, max_y: f64) -> Self {
        let min_gap = if min_gap.is_finite() && min_gap > 0.0 {
            min_gap
        } else {
            DEFAULT_LABEL_GAP
        };
        Self { min_gap, max_y }
    }
}

impl LabelPlacer for SeparatingPlacer {
    fn place(&self, mut group: DivisionGroup, vertical: &LinearScale) -> DivisionGroup {
        let mut positions: Vec<f64> = group
            .values
            .iter()
            .map(|row| vertical.apply(row.record.final_result() as f64))
            .collect();

        for i in 1..positions.len() {
            let floor = positions[i - 1] + self.min_gap;
            if positions[i] < floor {
                positions[i] = floor;
            }
        }

        if let Some(&last) = positions.last() {
            if last > self.max_y {
                let n = positions.len();
                positions[n - 1] = self.max_y;
                for i in (0..n - 1).rev() {
                    let ceiling = positions[i + 1] - self.min_gap;
                    if positions[i] > ceiling {
                        positions[i] = ceiling;
                    }
                }
            }
        }

        for (row, y) in group.values.iter_mut().zip(positions) {
            row.label_position = y;
        }
        group
    }
}

/// Horizontal offset of the final-differential label, right-aligning one-
/// and two-digit numbers with or without a minus sign.
pub fn result_label_offset(result: i32) -> f64 {
    if result <= -10 {
        0.0
    } else if result < 0 {
        5.0
    } else if result < 10 {
        10.0
    } else {
        5.0
    }
}
