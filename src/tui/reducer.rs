use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::action::Action;
use super::effects::Effect;
use super::state::{AppState, StatusMessage};
use crate::dashboard::{DashboardEvent, RenderCommand};
use crate::season_query::step_season;
use crate::types::ChartId;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; season loads come back as `Effect::LoadSeason`.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let mut state = state;
    match action {
        Action::ClickChart(chart) => {
            state.selected = Some(chart);
            dispatch(&mut state, DashboardEvent::Click(chart));
            (state, Effect::None)
        }
        Action::ToggleSelected => match state.selected {
            Some(chart) => reduce(state, Action::ClickChart(chart)),
            None => (state, Effect::None),
        },
        Action::SelectNext => {
            state.selected = step_selection(&state, true);
            (state, Effect::None)
        }
        Action::SelectPrevious => {
            state.selected = step_selection(&state, false);
            (state, Effect::None)
        }
        Action::ClearSelection => {
            state.selected = None;
            (state, Effect::None)
        }
        Action::ScrollUp => {
            state.scroll = state.scroll.saturating_sub(1);
            (state, Effect::None)
        }
        Action::ScrollDown => {
            state.scroll = state.scroll.saturating_add(1).min(max_scroll(&state));
            (state, Effect::None)
        }

        Action::NextSeason => {
            let year = step_season(state.year, true);
            reduce(state, Action::LoadSeason(year))
        }
        Action::PreviousSeason => {
            let year = step_season(state.year, false);
            reduce(state, Action::LoadSeason(year))
        }
        Action::LoadSeason(year) => {
            debug!("SEASON: requesting {}", year);
            state.year = year;
            state.loading = true;
            state.status = Some(StatusMessage {
                text: format!("Loading season {}...", year),
                is_error: false,
            });
            (state, Effect::LoadSeason(year))
        }
        Action::SeasonLoaded(year, result) => {
            if year != state.year {
                debug!("SEASON: dropping stale load of {} (showing {})", year, state.year);
                return (state, Effect::None);
            }
            state.loading = false;
            match result {
                Ok(view) => {
                    info!("SEASON: {} loaded", year);
                    state.status = None;
                    state.selected = None;
                    state.scroll = 0;
                    dispatch(&mut state, DashboardEvent::SeasonLoaded(view));
                }
                Err(message) => {
                    warn!("SEASON: {} failed: {}", year, message);
                    state.status = Some(StatusMessage {
                        text: message,
                        is_error: true,
                    });
                    state.selected = None;
                    dispatch(&mut state, DashboardEvent::SeasonFailed);
                }
            }
            (state, Effect::None)
        }

        Action::Resize(width, height) => {
            state.terminal_width = width;
            state.terminal_height = height;
            let container = state.container_width_px();
            dispatch(&mut state, DashboardEvent::Resize(container));
            state.scroll = state.scroll.min(max_scroll(&state));
            (state, Effect::None)
        }
        Action::Tick(delta_ms) => {
            let finished = state.animator.tick(delta_ms);
            for id in finished {
                dispatch(&mut state, DashboardEvent::AnimationFinished(id));
            }
            (state, Effect::None)
        }
        Action::Quit => (state, Effect::None),
    }
}

/// Feed an event to the dashboard and carry out the render commands,
/// including any that follow from transitions finishing on the spot.
fn dispatch(state: &mut AppState, event: DashboardEvent) {
    let mut events = VecDeque::from([event]);

    while let Some(event) = events.pop_front() {
        for command in state.dashboard.handle(event) {
            let finished = match command {
                RenderCommand::Rebuild { .. } => {
                    state.animator.reset_to(state.dashboard.target_sizes())
                }
                RenderCommand::Clear => state.animator.reset_to(&[]),
                RenderCommand::ResizeAll { size } => state.animator.snap_all(size),
                RenderCommand::Animate { id, moves } => state.animator.start(id, &moves),
            };
            events.extend(finished.into_iter().map(DashboardEvent::AnimationFinished));
        }
    }
}

/// Next or previous chart that is not hidden, wrapping around
fn step_selection(state: &AppState, forward: bool) -> Option<ChartId> {
    let sizes = state.animator.displayed();
    let count = sizes.len();
    if count == 0 {
        return None;
    }

    let start = match (state.selected, forward) {
        (Some(ChartId(i)), true) => i + 1,
        (Some(ChartId(i)), false) => i + count - 1,
        (None, true) => 0,
        (None, false) => count - 1,
    };
    let step = if forward { 1 } else { count - 1 };

    (0..count)
        .map(|n| (start + n * step) % count)
        .find(|&i| !sizes[i].is_hidden())
        .map(ChartId)
}

/// Rows of content below the visible chart area
fn max_scroll(state: &AppState) -> u16 {
    let content_px = crate::layout::flow_height(&state.placements());
    let content_rows = (content_px / state.cell_height()).ceil() as u16;
    content_rows.saturating_sub(state.chart_area_height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Size;
    use crate::config::Config;
    use crate::fixtures::{modern_season, two_division_season};
    use crate::season_view::{SeasonView, SeasonViewOptions};

    fn loaded(width: u16, animation_ms: u64) -> AppState {
        let config = Config {
            animation_ms,
            ..Config::default()
        };
        let state = AppState::new(2015, config);
        let (state, _) = reduce(state, Action::Resize(width, 60));
        let view = SeasonView::build(2015, &two_division_season(), &SeasonViewOptions::default());
        let (state, _) = reduce(state, Action::SeasonLoaded(2015, Ok(Box::new(view))));
        state
    }

    #[test]
    fn test_load_season_returns_effect() {
        let (state, effect) = reduce(AppState::default(), Action::LoadSeason(1999));
        assert_eq!(state.year, 1999);
        assert!(state.loading);
        assert!(matches!(effect, Effect::LoadSeason(1999)));
    }

    #[test]
    fn test_previous_season_requests_load() {
        let (state, effect) = reduce(AppState::new(2015, Config::default()), Action::PreviousSeason);
        assert_eq!(state.year, 2014);
        assert!(matches!(effect, Effect::LoadSeason(2014)));
    }

    #[test]
    fn test_season_loaded_shows_canonical_charts() {
        let state = loaded(160, 300);
        assert!(!state.loading);
        assert_eq!(state.status, None);
        assert_eq!(state.animator.displayed(), &[Size::canonical(), Size::canonical()]);
    }

    #[test]
    fn test_stale_season_load_is_dropped() {
        let state = loaded(160, 300);
        let (state, _) = reduce(state, Action::LoadSeason(2016));
        let view = SeasonView::build(2015, &modern_season(10), &SeasonViewOptions::default());
        let (state, _) = reduce(state, Action::SeasonLoaded(2015, Ok(Box::new(view))));
        assert!(state.loading);
        assert_eq!(state.dashboard.view().map(|v| v.chart_count()), Some(2));
    }

    #[test]
    fn test_failed_load_clears_charts_and_reports() {
        let state = loaded(160, 300);
        let (state, _) = reduce(state, Action::LoadSeason(1920));
        let (state, _) = reduce(
            state,
            Action::SeasonLoaded(1920, Err("Failed to read season file".to_string())),
        );
        assert!(state.dashboard.view().is_none());
        assert!(state.animator.displayed().is_empty());
        assert!(state.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_click_animates_then_settles() {
        let state = loaded(160, 300);
        let (state, _) = reduce(state, Action::ClickChart(ChartId(1)));
        assert!(state.animator.is_animating());
        assert_eq!(state.dashboard.focus_state().enlarged, Some(ChartId(1)));

        let (state, _) = reduce(state, Action::Tick(300));
        assert!(!state.animator.is_animating());
        assert!(state.dashboard.focus().is_settled());
        assert_eq!(state.animator.displayed()[1], Size::enlarged());
        assert!(state.animator.displayed()[0].is_hidden());
    }

    #[test]
    fn test_click_with_instant_animation_settles_in_one_step() {
        let state = loaded(160, 0);
        let (state, _) = reduce(state, Action::ClickChart(ChartId(0)));
        assert!(!state.animator.is_animating());
        assert!(state.dashboard.focus().is_settled());
        assert_eq!(state.animator.displayed()[0], Size::enlarged());

        let (state, _) = reduce(state, Action::ClickChart(ChartId(0)));
        assert_eq!(state.animator.displayed(), &[Size::canonical(), Size::canonical()]);
    }

    #[test]
    fn test_narrowing_terminal_resets_focus() {
        let state = loaded(160, 0);
        let (state, _) = reduce(state, Action::ClickChart(ChartId(1)));
        let (state, _) = reduce(state, Action::Resize(150, 60));
        assert!(state.dashboard.focus_state().is_empty());
        let narrow = Size::new(750.0, 375.0);
        assert_eq!(state.animator.displayed(), &[narrow, narrow]);
    }

    #[test]
    fn test_selection_skips_hidden_charts() {
        let state = loaded(160, 0);
        let (state, _) = reduce(state, Action::ClickChart(ChartId(1)));
        // Chart 0 is hidden now
        let (state, _) = reduce(state, Action::SelectNext);
        assert_eq!(state.selected, Some(ChartId(1)));
        let (state, _) = reduce(state, Action::SelectPrevious);
        assert_eq!(state.selected, Some(ChartId(1)));
    }

    #[test]
    fn test_toggle_selected_without_selection_is_noop() {
        let state = loaded(160, 0);
        let (state, _) = reduce(state, Action::ToggleSelected);
        assert!(state.dashboard.focus_state().is_empty());
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let state = loaded(160, 0);
        // Both charts fit in one 20-row band; nothing to scroll
        let (state, _) = reduce(state, Action::ScrollDown);
        assert_eq!(state.scroll, 0);
    }
}
