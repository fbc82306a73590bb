use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::layout::{flow, Placement};
use crate::season_query::DEFAULT_SEASON;
use crate::types::ChartId;

use super::animation::Animator;

/// Rows above the chart area (title)
pub const CHART_AREA_TOP: u16 = 1;

/// Rows below the chart area (status line)
pub const CHART_AREA_BOTTOM: u16 = 1;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone)]
pub struct AppState {
    pub year: i32,
    pub dashboard: Dashboard,
    pub animator: Animator,

    /// Chart picked with the keyboard
    pub selected: Option<ChartId>,
    /// First chart-area row shown, in terminal rows
    pub scroll: u16,
    pub loading: bool,
    pub status: Option<StatusMessage>,

    /// Terminal size in cells
    pub terminal_width: u16,
    pub terminal_height: u16,

    pub config: Config,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_SEASON, Config::default())
    }
}

impl AppState {
    pub fn new(year: i32, config: Config) -> Self {
        Self {
            year,
            dashboard: Dashboard::new(0),
            animator: Animator::new(config.animation_ms),
            selected: None,
            scroll: 0,
            loading: false,
            status: None,
            terminal_width: 0,
            terminal_height: 0,
            config,
        }
    }

    /// Horizontal pixels per terminal column
    pub fn cell_width(&self) -> f64 {
        f64::from(self.config.cell_width_px.max(1))
    }

    /// Terminal cells are roughly twice as tall as they are wide
    pub fn cell_height(&self) -> f64 {
        self.cell_width() * 2.0
    }

    /// Width of the chart area in pixels
    pub fn container_width_px(&self) -> u32 {
        u32::from(self.terminal_width) * u32::from(self.config.cell_width_px.max(1))
    }

    pub fn chart_area_height(&self) -> u16 {
        self.terminal_height
            .saturating_sub(CHART_AREA_TOP + CHART_AREA_BOTTOM)
    }

    /// Where each chart currently sits, in pixels
    pub fn placements(&self) -> Vec<Placement> {
        flow(self.animator.displayed(), f64::from(self.container_width_px()))
    }

    /// Chart under a terminal cell, if any
    pub fn chart_at(&self, column: u16, row: u16) -> Option<ChartId> {
        let area_row = row.checked_sub(CHART_AREA_TOP)?;
        if area_row >= self.chart_area_height() {
            return None;
        }
        let x = f64::from(column) * self.cell_width();
        let y = f64::from(area_row + self.scroll) * self.cell_height();

        self.placements()
            .iter()
            .position(|p| {
                !p.size.is_hidden()
                    && x >= p.x
                    && x < p.x + p.size.width
                    && y >= p.y
                    && y < p.y + p.size.height
            })
            .map(ChartId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Size;

    fn state_with_two_charts() -> AppState {
        let mut state = AppState::default();
        state.terminal_width = 160;
        state.terminal_height = 50;
        state.animator.reset_to(&[Size::canonical(), Size::canonical()]);
        state
    }

    #[test]
    fn test_container_width_uses_cell_width() {
        let state = state_with_two_charts();
        assert_eq!(state.container_width_px(), 800);
        assert_eq!(state.chart_area_height(), 48);
    }

    #[test]
    fn test_chart_at_hits_side_by_side_charts() {
        let state = state_with_two_charts();
        // 400px charts are 80 columns wide and 20 rows tall
        assert_eq!(state.chart_at(0, 1), Some(ChartId(0)));
        assert_eq!(state.chart_at(79, 20), Some(ChartId(0)));
        assert_eq!(state.chart_at(80, 5), Some(ChartId(1)));
        assert_eq!(state.chart_at(10, 21), None);
    }

    #[test]
    fn test_chart_at_ignores_title_and_hidden_charts() {
        let mut state = state_with_two_charts();
        assert_eq!(state.chart_at(5, 0), None);

        state
            .animator
            .reset_to(&[Size::hidden(Size::canonical()), Size::enlarged()]);
        // The hidden chart takes no space, so the enlarged one starts at x=0
        assert_eq!(state.chart_at(5, 5), Some(ChartId(1)));
    }

    #[test]
    fn test_chart_at_accounts_for_scroll() {
        let mut state = state_with_two_charts();
        state.terminal_width = 80;
        state.animator.reset_to(&[Size::canonical(), Size::canonical()]);
        // One column: second chart starts at row 20 of the chart area
        assert_eq!(state.chart_at(5, 21), Some(ChartId(1)));
        state.scroll = 20;
        assert_eq!(state.chart_at(5, 1), Some(ChartId(1)));
    }
}
