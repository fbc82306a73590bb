use unicode_width::UnicodeWidthStr;

use crate::chart::{format_pct, win_loss};
use crate::types::DivisionGroup;

/// Box-drawing characters for table rules
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

// Column widths of the division table
const TEAM_COL_WIDTH: usize = 5;
const RECORD_COL_WIDTH: usize = 8;
const PCT_COL_WIDTH: usize = 6;
const DIFF_COL_WIDTH: usize = 5;

/// Width of one division table, used to line up side-by-side columns
pub const DIVISION_TABLE_WIDTH: usize =
    TEAM_COL_WIDTH + 3 * (RECORD_COL_WIDTH + 1) + PCT_COL_WIDTH + 1 + DIFF_COL_WIDTH + 1;

/// Spacing between columns in two-column layout
const COLUMN_SPACING: usize = 4;

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `box_chars` - Characters to draw the underline with
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text width
pub fn format_header(text: &str, double_line: bool, box_chars: &BoxChars) -> String {
    let separator_char = if double_line {
        &box_chars.double_horizontal
    } else {
        &box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Pad `text` on the right to `width` display columns
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Pad `text` on the left to `width` display columns
fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

/// One division as a text table, teams in display order
pub fn format_division_table(group: &DivisionGroup, box_chars: &BoxChars) -> Vec<String> {
    let mut lines: Vec<String> = format_header(&group.key, true, box_chars)
        .lines()
        .map(|s| s.to_string())
        .collect();

    lines.push(format!(
        "{} {} {} {} {} {}",
        pad_right("Team", TEAM_COL_WIDTH),
        pad_left("W–L", RECORD_COL_WIDTH),
        pad_left("home", RECORD_COL_WIDTH),
        pad_left("road", RECORD_COL_WIDTH),
        pad_left("pct", PCT_COL_WIDTH),
        pad_left("+/-", DIFF_COL_WIDTH),
    ));
    lines.push(box_chars.horizontal.repeat(DIVISION_TABLE_WIDTH));

    for row in &group.values {
        let r = &row.record;
        lines.push(format!(
            "{} {} {} {} {} {}",
            pad_right(&r.abbreviation, TEAM_COL_WIDTH),
            pad_left(&win_loss(r.wins, r.losses), RECORD_COL_WIDTH),
            pad_left(&win_loss(r.wins_home, r.losses_home), RECORD_COL_WIDTH),
            pad_left(&win_loss(r.wins_road, r.losses_road), RECORD_COL_WIDTH),
            pad_left(&format_pct(r.winning_percentage()), PCT_COL_WIDTH),
            pad_left(&format!("{:+}", r.final_result()), DIFF_COL_WIDTH),
        ));
    }

    lines
}

/// Place two blocks of lines side by side
pub fn merge_columns(left_lines: Vec<String>, right_lines: Vec<String>, column_width: usize) -> String {
    let mut output = String::new();
    let max_len = left_lines.len().max(right_lines.len());

    for i in 0..max_len {
        let left = left_lines.get(i).map(|s| s.as_str()).unwrap_or("");
        let right = right_lines.get(i).map(|s| s.as_str()).unwrap_or("");

        let line = format!(
            "{}{}{}",
            pad_right(left, column_width),
            " ".repeat(COLUMN_SPACING),
            right
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Divisions in display order, `columns` per row
pub fn format_divisions(groups: &[DivisionGroup], columns: usize, box_chars: &BoxChars) -> String {
    let columns = columns.max(1);
    let mut output = String::new();

    for row in groups.chunks(columns) {
        output.push('\n');
        let mut merged: Option<Vec<String>> = None;
        for group in row {
            let table = format_division_table(group, box_chars);
            merged = Some(match merged {
                None => table,
                Some(left) => {
                    // Left block may already hold several columns
                    let width = left.iter().map(|l| l.width()).max().unwrap_or(0);
                    merge_columns(left, table, width.max(DIVISION_TABLE_WIDTH))
                        .lines()
                        .map(|s| s.to_string())
                        .collect()
                }
            });
        }
        for line in merged.unwrap_or_default() {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}
