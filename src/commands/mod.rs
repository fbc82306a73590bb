pub mod render;
pub mod standings;

use anyhow::{Context, Result};

use crate::aggregate::DataAggregator;
use crate::cache::fetch_season_cached;
use crate::config::Config;
use crate::division_order::DivisionOrderer;
use crate::season::SeasonSource;
use crate::season_view::{SeasonView, SeasonViewOptions};

/// Pipeline options derived from the configuration file
pub fn season_view_options(config: &Config) -> SeasonViewOptions {
    SeasonViewOptions {
        aggregator: DataAggregator::new(DivisionOrderer::new(config.division_priority.clone())),
        label_gap: config.label_gap,
    }
}

/// Load a season and prepare it for drawing
///
/// Any load failure is fatal for the season: nothing is prepared from partial data.
pub async fn load_season_view(
    source: &dyn SeasonSource,
    year: i32,
    config: &Config,
) -> Result<SeasonView> {
    let records = fetch_season_cached(source, year)
        .await
        .with_context(|| format!("Failed to load season {}", year))?;
    Ok(SeasonView::build(year, &records, &season_view_options(config)))
}
