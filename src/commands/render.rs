use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::commands::load_season_view;
use crate::config::Config;
use crate::dashboard::{Dashboard, DashboardEvent, RenderCommand};
use crate::season::SeasonSource;
use crate::season_view::SeasonView;
use crate::svg::render_page;
use crate::types::ChartId;

/// Render a season to a static SVG page
///
/// With `focus` set, the named division is shown enlarged, exactly as a click
/// in the viewer would leave it once the animation settles.
pub async fn run(
    source: &dyn SeasonSource,
    year: i32,
    width: u32,
    focus: Option<String>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let view = load_season_view(source, year, config).await?;
    let svg = render_svg(view, width, focus.as_deref())?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, svg)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("RENDER: wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

/// Drive a dashboard to its settled state and draw it
pub fn render_svg(view: SeasonView, width: u32, focus: Option<&str>) -> Result<String> {
    let focus_chart = match focus {
        Some(key) => match view.charts.iter().position(|c| c.key == key) {
            Some(index) => Some(ChartId(index)),
            None => bail!("No division named '{}' in season {}", key, view.year),
        },
        None => None,
    };

    let mut dashboard = Dashboard::new(width);
    dashboard.handle(DashboardEvent::SeasonLoaded(Box::new(view)));

    if let Some(chart) = focus_chart {
        if !dashboard.layout().focus_enabled {
            bail!(
                "Width {} does not allow enlarging charts (needs an exact multiple of 400 of at least 800)",
                width
            );
        }
        settle(&mut dashboard, DashboardEvent::Click(chart));
    }

    let view = dashboard
        .view()
        .context("Season view missing after load")?;
    Ok(render_page(view, dashboard.target_sizes(), width as f64))
}

/// Apply an event and answer every animation immediately
fn settle(dashboard: &mut Dashboard, event: DashboardEvent) {
    let mut commands = dashboard.handle(event);
    while let Some(command) = commands.pop() {
        if let RenderCommand::Animate { id, .. } = command {
            commands.extend(dashboard.handle(DashboardEvent::AnimationFinished(id)));
        }
    }
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
    fn test_render_without_focus() {
        let svg = render_svg(view(), 800, None).unwrap();
        assert_eq!(svg.matches("data-division").count(), 2);
    }

    #[test]
    fn test_render_with_focus_hides_partner() {
        let svg = render_svg(view(), 800, Some("AL East")).unwrap();
        assert!(svg.contains(r#"data-division="AL East""#));
        assert!(!svg.contains(r#"data-division="NL East""#));
    }

    #[test]
    fn test_render_unknown_division_fails() {
        let err = render_svg(view(), 800, Some("AL Nowhere")).unwrap_err();
        assert!(err.to_string().contains("AL Nowhere"));
    }

    #[test]
    fn test_render_focus_on_narrow_width_fails() {
        assert!(render_svg(view(), 700, Some("AL East")).is_err());
    }
}
