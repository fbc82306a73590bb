use anyhow::Result;

use crate::commands::load_season_view;
use crate::config::Config;
use crate::formatting::{format_divisions, format_header, BoxChars};
use crate::season::SeasonSource;

/// Print each division's table, NL and AL partners side by side
pub async fn run(
    source: &dyn SeasonSource,
    year: i32,
    columns: usize,
    config: &Config,
) -> Result<()> {
    let view = load_season_view(source, year, config).await?;
    let box_chars = BoxChars::from_use_unicode(config.use_unicode);

    print!("{}", format_header(&format!("Season {}", view.year), false, &box_chars));
    print!("{}", format_divisions(&view.groups, columns, &box_chars));
    Ok(())
}
