//! Draws the dashboard onto the terminal.
//!
//! Charts are laid out in pixels exactly as on the web page and mapped to
//! cells through `cell_width_px`; each chart is a braille canvas whose bounds
//! are the canonical chart box, so enlarged and narrow charts are stretched
//! versions of the same drawing.

use ratatui::layout::{Constraint, Layout as TuiLayout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::state::{AppState, CHART_AREA_BOTTOM, CHART_AREA_TOP};
use crate::chart::{ChartDrawing, TextLabel, FULL_HEIGHT, FULL_WIDTH};
use crate::config::parse_color;
use crate::layout::Placement;
use crate::types::ChartId;

const KEY_HINTS: &str = "[ ] season  ←/→ select  enter enlarge  ↑/↓ scroll  q quit";

pub fn draw(f: &mut Frame, state: &AppState) {
    let [title_area, chart_area, status_area] = TuiLayout::vertical([
        Constraint::Length(CHART_AREA_TOP),
        Constraint::Min(0),
        Constraint::Length(CHART_AREA_BOTTOM),
    ])
    .areas(f.area());

    draw_title(f, title_area, state);
    draw_charts(f, chart_area, state);
    draw_status(f, status_area, state);
}

fn draw_title(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            format!("MLB Sparklines:  {}", state.year),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_charts(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(view) = state.dashboard.view() else {
        return;
    };
    let enlarged = state.dashboard.focus_state().enlarged;

    for (chart, placement) in view.charts.iter().zip(state.placements().iter()) {
        let Some(viewport) = chart_viewport(placement, state, area) else {
            continue;
        };

        let border = if state.selected == Some(chart.id) {
            state.config.theme.selection_fg
        } else if enlarged == Some(chart.id) {
            state.config.theme.unfocused_selection_fg()
        } else {
            Color::DarkGray
        };

        let canvas = Canvas::default()
            .block(Block::bordered().border_style(Style::default().fg(border)))
            .marker(Marker::Braille)
            .x_bounds(viewport.x_bounds)
            .y_bounds(viewport.y_bounds)
            .paint(|ctx| paint_chart(ctx, chart));
        f.render_widget(canvas, viewport.rect);
    }
}

fn paint_chart(ctx: &mut ratatui::widgets::canvas::Context, chart: &ChartDrawing) {
    for line in &chart.lines {
        let color = parse_color(&line.color).unwrap_or(Color::Gray);
        for pair in line.points.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            ctx.draw(&CanvasLine::new(
                x1,
                FULL_HEIGHT - y1,
                x2,
                FULL_HEIGHT - y2,
                color,
            ));
        }
    }

    // Text goes on top of the lines
    ctx.layer();

    for (i, header) in chart.headers.iter().enumerate() {
        let style = if i == 0 {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        print_label(ctx, header, style);
    }
    for label in &chart.labels {
        let color = label
            .color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Reset);
        print_label(ctx, label, Style::default().fg(color));
    }
}

fn print_label(ctx: &mut ratatui::widgets::canvas::Context, label: &TextLabel, style: Style) {
    ctx.print(
        label.x,
        FULL_HEIGHT - label.y,
        Span::styled(label.text.clone(), style),
    );
}

/// Visible part of a chart on screen plus the slice of the chart box it shows
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChartViewport {
    rect: Rect,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

fn chart_viewport(placement: &Placement, state: &AppState, area: Rect) -> Option<ChartViewport> {
    if placement.size.is_hidden() {
        return None;
    }
    let (cw, ch) = (state.cell_width(), state.cell_height());

    let left = (placement.x / cw).round() as i32;
    let top = (placement.y / ch).round() as i32 - i32::from(state.scroll);
    let width = (placement.size.width / cw).round() as i32;
    let height = (placement.size.height / ch).round() as i32;
    if width <= 0 || height <= 0 {
        return None;
    }

    let visible_left = left.max(0);
    let visible_top = top.max(0);
    let visible_right = (left + width).min(i32::from(area.width));
    let visible_bottom = (top + height).min(i32::from(area.height));
    if visible_right <= visible_left || visible_bottom <= visible_top {
        return None;
    }

    let chart_x = |column: i32| FULL_WIDTH * f64::from(column - left) / f64::from(width);
    let chart_y = |row: i32| FULL_HEIGHT * f64::from(row - top) / f64::from(height);

    Some(ChartViewport {
        rect: Rect::new(
            area.x + visible_left as u16,
            area.y + visible_top as u16,
            (visible_right - visible_left) as u16,
            (visible_bottom - visible_top) as u16,
        ),
        x_bounds: [chart_x(visible_left), chart_x(visible_right)],
        // Canvas y grows upwards
        y_bounds: [
            FULL_HEIGHT - chart_y(visible_bottom),
            FULL_HEIGHT - chart_y(visible_top),
        ],
    })
}

fn draw_status(f: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status {
        Some(status) if status.is_error => Line::from(Span::styled(
            format!("Error: {}", status.text),
            Style::default().fg(Color::Red),
        )),
        Some(status) => Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            describe_focus(state),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn describe_focus(state: &AppState) -> String {
    let Some(view) = state.dashboard.view() else {
        return "No season loaded".to_string();
    };
    let layout = state.dashboard.layout();
    let key = |id: ChartId| view.chart(id).map(|c| c.key.as_str()).unwrap_or("?");

    match state.dashboard.focus_state().enlarged {
        Some(enlarged) => format!("{} enlarged", key(enlarged)),
        None if layout.focus_enabled => format!("{} columns", layout.columns()),
        None if layout.mode.is_wide() => "1 column".to_string(),
        None => "narrow layout".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Size;
    use crate::fixtures::two_division_season;
    use crate::season_view::{SeasonView, SeasonViewOptions};
    use crate::tui::action::Action;
    use crate::tui::reducer::reduce;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn loaded(width: u16, height: u16) -> AppState {
        let mut state = AppState::default();
        state.config.animation_ms = 0;
        state.animator = crate::tui::animation::Animator::new(0);
        let (state, _) = reduce(state, Action::Resize(width, height));
        let view = SeasonView::build(2015, &two_division_season(), &SeasonViewOptions::default());
        let (state, _) = reduce(state, Action::SeasonLoaded(2015, Ok(Box::new(view))));
        state
    }

    fn render(state: &AppState) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(state.terminal_width, state.terminal_height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_and_both_divisions_drawn() {
        let output = render(&loaded(160, 40));
        assert!(output.contains("MLB Sparklines:  2015"));
        assert!(output.contains("NL East"));
        assert!(output.contains("AL East"));
        assert!(output.contains("2 columns"));
    }

    #[test]
    fn test_enlarged_chart_hides_partner() {
        let state = loaded(160, 50);
        let (state, _) = reduce(state, Action::ClickChart(ChartId(1)));
        let output = render(&state);
        assert!(output.contains("AL East"));
        assert!(!output.contains("NL East"));
    }

    #[test]
    fn test_failed_season_shows_error() {
        let state = loaded(160, 40);
        let (state, _) = reduce(state, Action::LoadSeason(1930));
        let (state, _) = reduce(
            state,
            Action::SeasonLoaded(1930, Err("no data for 1930".to_string())),
        );
        let output = render(&state);
        assert!(output.contains("Error: no data for 1930"));
        assert!(!output.contains("NL East"));
    }

    #[test]
    fn test_viewport_clips_chart_below_area() {
        let state = loaded(80, 20);
        let placement = Placement {
            x: 0.0,
            y: 0.0,
            size: Size::canonical(),
        };
        // 20 rows tall, only 10 visible: the top half of the chart box
        let viewport = chart_viewport(&placement, &state, Rect::new(0, 1, 80, 10)).unwrap();
        assert_eq!(viewport.rect, Rect::new(0, 1, 80, 10));
        assert_eq!(viewport.x_bounds, [0.0, FULL_WIDTH]);
        assert_eq!(viewport.y_bounds, [FULL_HEIGHT / 2.0, FULL_HEIGHT]);
    }

    #[test]
    fn test_hidden_chart_has_no_viewport() {
        let state = loaded(80, 20);
        let placement = Placement {
            x: 0.0,
            y: 0.0,
            size: Size::hidden(Size::canonical()),
        };
        assert!(chart_viewport(&placement, &state, Rect::new(0, 1, 80, 10)).is_none());
    }
}
