//! Static SVG rendering of a prepared season.
//!
//! Each division becomes a nested `<svg>` whose view box is the canonical
//! chart, stretched (no aspect preservation) to the chart's current size.

use std::fmt::Write;

use crate::chart::{ChartDrawing, Size, TextLabel, FULL_HEIGHT, FULL_WIDTH};
use crate::layout::{flow, flow_height};
use crate::season_view::SeasonView;

const FONT_SIZE: f64 = 10.0;
const TITLE_HEIGHT: f64 = 30.0;

/// Render the whole page: a title and one chart per division.
///
/// `sizes` holds the displayed size of each chart in display order; charts of
/// zero width are left out.
pub fn render_page(view: &SeasonView, sizes: &[Size], container_width: f64) -> String {
    let placements = flow(sizes, container_width);
    let height = TITLE_HEIGHT + flow_height(&placements);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif" font-size="{}">"#,
        container_width, height, FONT_SIZE
    );
    let _ = writeln!(
        out,
        r#"  <text x="0" y="20" font-size="18">MLB Sparklines:  {}</text>"#,
        view.year
    );

    for (chart, placement) in view.charts.iter().zip(placements.iter()) {
        if placement.size.is_hidden() {
            continue;
        }
        out.push_str(&render_chart(
            chart,
            placement.x,
            TITLE_HEIGHT + placement.y,
            placement.size,
        ));
    }

    out.push_str("</svg>\n");
    out
}

/// One division chart positioned at (`x`, `y`) with the given displayed size
pub fn render_chart(chart: &ChartDrawing, x: f64, y: f64, size: Size) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"  <svg x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none" data-division="{}">"#,
        x,
        y,
        size.width,
        size.height,
        FULL_WIDTH,
        FULL_HEIGHT,
        escape(&chart.key)
    );

    for header in &chart.headers {
        out.push_str(&text_element(header));
    }

    for line in &chart.lines {
        let _ = writeln!(
            out,
            r#"    <path class="line" fill="none" stroke="{}" d="{}"/>"#,
            line.color,
            line.path_data()
        );
    }

    for label in &chart.labels {
        out.push_str(&text_element(label));
    }

    out.push_str("  </svg>\n");
    out
}

fn text_element(label: &TextLabel) -> String {
    let fill = label
        .color
        .as_deref()
        .map(|c| format!(r#" fill="{}""#, c))
        .unwrap_or_default();
    format!(
        "    <text x=\"{}\" y=\"{}\"{}>{}</text>\n",
        label.x,
        label.y,
        fill,
        escape(&label.text)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::two_division_season;
    use crate::season_view::SeasonViewOptions;

    fn view() -> SeasonView {
        SeasonView::build(2015, &two_division_season(), &SeasonViewOptions::default())
    }

    #[test]
    fn test_page_contains_every_division_in_order() {
        let view = view();
        let svg = render_page(&view, &[Size::canonical(); 2], 800.0);
        let nl = svg.find(r#"data-division="NL East""#).unwrap();
        let al = svg.find(r#"data-division="AL East""#).unwrap();
        assert!(nl < al);
        assert!(svg.contains("MLB Sparklines:  2015"));
        assert_eq!(svg.matches("<path").count(), 4);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_hidden_chart_is_skipped() {
        let view = view();
        let sizes = [Size::hidden(Size::canonical()), Size::enlarged()];
        let svg = render_page(&view, &sizes, 800.0);
        assert!(!svg.contains(r#"data-division="NL East""#));
        assert!(svg.contains(r#"width="800" height="400" viewBox="0 0 400 200""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A&B <C>"), "A&amp;B &lt;C&gt;");
    }
}
