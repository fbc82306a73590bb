//! Chart geometry and per-chart draw instructions.
//!
//! Everything here is expressed in the canonical chart's own coordinate space
//! (a 400×200 view box). Renderers stretch that space to whatever size the
//! chart currently has.

use crate::constants::team_color;
use crate::labels::result_label_offset;
use crate::scale::ScalePair;
use crate::types::{ChartId, DivisionGroup, League, TeamSeasonRecord};

/// Canonical chart width, also the column width of the wide layout
pub const FULL_WIDTH: f64 = 400.0;
pub const FULL_HEIGHT: f64 = FULL_WIDTH / 2.0;

/// Factor applied to the canonical size when a chart is enlarged
pub const ENLARGE_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// The right margin hosts the label columns
pub const MARGIN: Margin = Margin {
    top: 20.0,
    right: 175.0,
    bottom: 10.0,
    left: 10.0,
};

/// Plot area inside the margins
pub const PLOT_WIDTH: f64 = FULL_WIDTH - MARGIN.left - MARGIN.right;
pub const PLOT_HEIGHT: f64 = FULL_HEIGHT - MARGIN.top - MARGIN.bottom;

// Label column x offsets, relative to the right edge of the plot area
const ABBREVIATION_X: f64 = 20.0;
const WIN_LOSS_X: f64 = 51.0;
const HOME_X: f64 = 88.0;
const ROAD_X: f64 = 120.0;
const PCT_X: f64 = 152.0;

/// Baseline of the header row
const HEADER_Y: f64 = 10.0;

/// Displayed size of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn canonical() -> Self {
        Self::new(FULL_WIDTH, FULL_HEIGHT)
    }

    pub fn enlarged() -> Self {
        Self::new(FULL_WIDTH * ENLARGE_FACTOR, FULL_HEIGHT * ENLARGE_FACTOR)
    }

    /// Zero width, height left alone
    pub fn hidden(from: Size) -> Self {
        Self::new(0.0, from.height)
    }

    pub fn is_hidden(&self) -> bool {
        self.width <= 0.0
    }

    /// Linear interpolation towards `to`, `t` in [0, 1]
    pub fn lerp(&self, to: Size, t: f64) -> Size {
        let t = t.clamp(0.0, 1.0);
        Size::new(
            self.width + (to.width - self.width) * t,
            self.height + (to.height - self.height) * t,
        )
    }
}

/// A positioned piece of text. `color` is a hex string; `None` means the
/// renderer's default foreground.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Option<String>,
}

impl TextLabel {
    fn plain(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color: None,
        }
    }
}

/// One team's trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLine {
    pub abbreviation: String,
    pub color: String,
    pub points: Vec<(f64, f64)>,
}

impl TeamLine {
    /// SVG path data, e.g. `M10,105L10.9,100`
    pub fn path_data(&self) -> String {
        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            path.push(if i == 0 { 'M' } else { 'L' });
            path.push_str(&format!("{},{}", round2(*x), round2(*y)));
        }
        path
    }
}

/// Everything a renderer needs to draw one division chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDrawing {
    pub id: ChartId,
    pub key: String,
    pub league: League,
    /// Division title and column headings
    pub headers: Vec<TextLabel>,
    pub lines: Vec<TeamLine>,
    /// Per-team label rows, one `TextLabel` per column
    pub labels: Vec<TextLabel>,
}

impl ChartDrawing {
    /// Lay out one division. Rows must already carry their label positions.
    pub fn build(id: ChartId, group: &DivisionGroup, scales: &ScalePair) -> Self {
        let label_origin_x = MARGIN.left + PLOT_WIDTH;

        let headers = vec![
            TextLabel::plain(MARGIN.left, HEADER_Y, group.key.clone()),
            TextLabel::plain(label_origin_x + HOME_X, HEADER_Y, "home"),
            TextLabel::plain(label_origin_x + ROAD_X, HEADER_Y, "road"),
            TextLabel::plain(label_origin_x + PCT_X, HEADER_Y, "pct"),
        ];

        let mut lines = Vec::with_capacity(group.values.len());
        let mut labels = Vec::with_capacity(group.values.len() * 6);

        for row in &group.values {
            let record = &row.record;
            let color = team_color(&record.abbreviation).to_string();

            let points = record
                .results
                .iter()
                .enumerate()
                .map(|(i, &r)| {
                    (
                        MARGIN.left + scales.horizontal.apply(i as f64),
                        MARGIN.top + scales.vertical.apply(r as f64),
                    )
                })
                .collect();
            lines.push(TeamLine {
                abbreviation: record.abbreviation.clone(),
                color: color.clone(),
                points,
            });

            let y = MARGIN.top + row.label_position;
            let columns = [
                (
                    result_label_offset(record.final_result()),
                    record.final_result().to_string(),
                ),
                (ABBREVIATION_X, record.abbreviation.clone()),
                (WIN_LOSS_X + win_loss_pad(record), win_loss(record.wins, record.losses)),
                (HOME_X, win_loss(record.wins_home, record.losses_home)),
                (ROAD_X, win_loss(record.wins_road, record.losses_road)),
                (PCT_X, format_pct(record.winning_percentage())),
            ];
            for (x, text) in columns {
                labels.push(TextLabel {
                    x: label_origin_x + x,
                    y,
                    text,
                    color: Some(color.clone()),
                });
            }
        }

        Self {
            id,
            key: group.key.clone(),
            league: group.league(),
            headers,
            lines,
            labels,
        }
    }
}

/// Three-digit win or loss totals shift left to stay clear of the home column
fn win_loss_pad(record: &TeamSeasonRecord) -> f64 {
    if record.wins > 99 || record.losses > 99 {
        -5.0
    } else {
        0.0
    }
}

pub fn win_loss(wins: u32, losses: u32) -> String {
    format!("{}–{}", wins, losses)
}

/// `.537` style; a perfect record prints as `1.000`
pub fn format_pct(pct: f64) -> String {
    let s = format!("{:.3}", pct);
    match s.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => s,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
