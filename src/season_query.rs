//! Season selection from a navigation query such as `?year=1998`.

use chrono::Datelike;

/// Season shown when the query names none (or names one badly)
pub const DEFAULT_SEASON: i32 = 2015;

/// First season with data available
pub const FIRST_SEASON: i32 = 1919;

/// Read the `year` parameter from a query string.
///
/// Accepts an optional leading `?` and `&`-separated `key=value` pairs.
/// Anything missing or unparsable yields [`DEFAULT_SEASON`].
pub fn parse_season(query: &str) -> i32 {
    season_from_query(query).unwrap_or(DEFAULT_SEASON)
}

fn season_from_query(query: &str) -> Option<i32> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "year")
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// Seasons offered by the season selector: from the first season with data
/// up to, but not including, the current calendar year.
pub fn available_seasons() -> std::ops::Range<i32> {
    FIRST_SEASON..chrono::Local::now().year()
}

/// Step to the previous or next available season, staying in range
pub fn step_season(current: i32, forward: bool) -> i32 {
    let seasons = available_seasons();
    let next = if forward { current + 1 } else { current - 1 };
    if seasons.contains(&next) {
        next
    } else {
        current
    }
}
