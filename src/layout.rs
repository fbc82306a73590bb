//! Responsive layout: canonical-size columns when the container is an exact
//! multiple of the chart width, a single proportionally scaled column otherwise.

use tracing::debug;

use crate::chart::Size;
use crate::focus::{FocusController, FocusState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Charts at canonical size, `columns` per row
    Wide { columns: usize },
    /// One chart per row, scaled to the container
    Narrow,
}

impl LayoutMode {
    pub fn is_wide(&self) -> bool {
        matches!(self, LayoutMode::Wide { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub mode: LayoutMode,
    /// Resting size of every chart
    pub chart_size: Size,
    /// Whether clicking a chart enlarges it
    pub focus_enabled: bool,
}

impl Layout {
    pub fn columns(&self) -> usize {
        match self.mode {
            LayoutMode::Wide { columns } => columns,
            LayoutMode::Narrow => 1,
        }
    }
}

/// Outcome of a re-evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutChange {
    pub layout: Layout,
    pub mode_changed: bool,
    /// Charts the focus controller let go of, if it was reset
    pub displaced: FocusState,
}

#[derive(Debug, Clone)]
pub struct ResponsiveLayoutEngine {
    canonical: Size,
    current: Option<Layout>,
}

impl Default for ResponsiveLayoutEngine {
    fn default() -> Self {
        Self::new(Size::canonical())
    }
}

impl ResponsiveLayoutEngine {
    pub fn new(canonical: Size) -> Self {
        Self {
            canonical,
            current: None,
        }
    }

    pub fn current(&self) -> Option<Layout> {
        self.current
    }

    /// Pure layout decision for a container width in pixels
    pub fn evaluate(&self, container_width: u32) -> Layout {
        let canonical_width = self.canonical.width as u32;
        let wide = container_width > 0
            && canonical_width > 0
            && container_width % canonical_width == 0;

        if wide {
            let columns = (container_width / canonical_width) as usize;
            Layout {
                mode: LayoutMode::Wide { columns },
                chart_size: self.canonical,
                // A lone column has no neighbour to displace
                focus_enabled: columns >= 2,
            }
        } else {
            let width = container_width as f64;
            // Height keeps the canonical view box's reference aspect
            let height = self.canonical.height * (width / self.canonical.height) / 2.0;
            Layout {
                mode: LayoutMode::Narrow,
                chart_size: Size::new(width, height),
                focus_enabled: false,
            }
        }
    }

    /// Re-evaluate after a resize, resetting focus when the layout mode flips
    /// or focus interaction goes away.
    pub fn update(&mut self, container_width: u32, focus: &mut FocusController) -> LayoutChange {
        let layout = self.evaluate(container_width);
        let mode_changed = match self.current {
            Some(previous) => previous.mode.is_wide() != layout.mode.is_wide(),
            None => true,
        };

        let mut displaced = if mode_changed {
            focus.reset()
        } else {
            FocusState::default()
        };
        let released = focus.set_enabled(layout.focus_enabled);
        if displaced.is_empty() {
            displaced = released;
        }

        if self.current != Some(layout) {
            debug!(
                "LAYOUT: width={} -> {:?} ({}x{}), focus {}",
                container_width,
                layout.mode,
                layout.chart_size.width,
                layout.chart_size.height,
                if layout.focus_enabled { "on" } else { "off" }
            );
        }
        self.current = Some(layout);

        LayoutChange {
            layout,
            mode_changed,
            displaced,
        }
    }

    /// Forget the previous layout; the next `update` counts as a mode change
    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Where a chart lands on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub size: Size,
}

/// Inline flow of charts across a container: left to right, wrapping when the
/// next chart would overflow. Each row is as tall as its tallest chart.
/// Zero-width (hidden) charts take no space.
pub fn flow(sizes: &[Size], container_width: f64) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(sizes.len());
    let (mut x, mut y, mut row_height) = (0.0_f64, 0.0_f64, 0.0_f64);

    for size in sizes {
        if x > 0.0 && x + size.width > container_width + f64::EPSILON {
            y += row_height;
            x = 0.0;
            row_height = 0.0;
        }
        placements.push(Placement { x, y, size: *size });
        if !size.is_hidden() {
            x += size.width;
            row_height = row_height.max(size.height);
        }
    }
    placements
}

/// Total height taken by a flow
pub fn flow_height(placements: &[Placement]) -> f64 {
    placements
        .iter()
        .filter(|p| !p.size.is_hidden())
        .map(|p| p.y + p.size.height)
        .fold(0.0, f64::max)
}
