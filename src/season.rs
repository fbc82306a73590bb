//! Season data loading.
//!
//! A season is a JSON array of team records stored as `<data_dir>/<year>.json`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::fixtures;
use crate::types::TeamSeasonRecord;

#[derive(Error, Debug)]
pub enum SeasonError {
    #[error("Failed to read season file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed season data for {year}")]
    Parse {
        year: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record for {abbreviation} in {year}: {reason}")]
    InvalidRecord {
        year: i32,
        abbreviation: String,
        reason: String,
    },

    #[error("Season {0} has no teams")]
    Empty(i32),
}

/// Where season datasets come from
#[async_trait]
pub trait SeasonSource: Send + Sync {
    async fn season(&self, year: i32) -> Result<Vec<TeamSeasonRecord>, SeasonError>;
}

/// Reads `<dir>/<year>.json`
#[derive(Debug, Clone)]
pub struct FileSeasonSource {
    dir: PathBuf,
}

impl FileSeasonSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}.json", year))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SeasonSource for FileSeasonSource {
    async fn season(&self, year: i32) -> Result<Vec<TeamSeasonRecord>, SeasonError> {
        let path = self.path_for(year);
        debug!("SEASON: reading {}", path.display());
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SeasonError::Io {
                path: path.clone(),
                source,
            })?;
        parse_season(year, &content)
    }
}

/// Built-in generated seasons, for running without a data directory
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSeasonSource;

#[async_trait]
impl SeasonSource for DemoSeasonSource {
    async fn season(&self, year: i32) -> Result<Vec<TeamSeasonRecord>, SeasonError> {
        // Vary the length a little so switching seasons visibly changes the charts
        let games = 120 + (year.rem_euclid(5) as u32) * 10;
        Ok(fixtures::modern_season(games))
    }
}

/// Parse and validate a season file's contents
pub fn parse_season(year: i32, content: &str) -> Result<Vec<TeamSeasonRecord>, SeasonError> {
    let records: Vec<TeamSeasonRecord> =
        serde_json::from_str(content).map_err(|source| SeasonError::Parse { year, source })?;
    validate(year, &records)?;
    Ok(records)
}

/// Reject datasets the pipeline cannot draw faithfully
pub fn validate(year: i32, records: &[TeamSeasonRecord]) -> Result<(), SeasonError> {
    if records.is_empty() {
        return Err(SeasonError::Empty(year));
    }

    let mut seen = HashSet::new();
    for record in records {
        let invalid = |reason: String| {
            warn!("SEASON: {} {}: {}", year, record.abbreviation, reason);
            SeasonError::InvalidRecord {
                year,
                abbreviation: record.abbreviation.clone(),
                reason,
            }
        };

        if !seen.insert(record.abbreviation.as_str()) {
            return Err(invalid("duplicate abbreviation".to_string()));
        }
        if record.results.len() > record.games as usize {
            return Err(invalid(format!(
                "{} results for {} games",
                record.results.len(),
                record.games
            )));
        }
        if record.wins + record.losses > record.games {
            return Err(invalid(format!(
                "{}-{} record exceeds {} games",
                record.wins, record.losses, record.games
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::record;
    use std::time::{SystemTime, UNIX_EPOCH};

    const VALID: &str = r#"[
        {"abbreviation":"NYY","league":"AL East","games":10,"wins":1,"losses":0,
         "winsHome":1,"lossesHome":0,"winsRoad":0,"lossesRoad":0,"results":[1]},
        {"abbreviation":"NYM","league":"NL East","games":10,"wins":0,"losses":1,
         "winsHome":0,"lossesHome":0,"winsRoad":0,"lossesRoad":1,"results":[-1]}
    ]"#;

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir = std::env::temp_dir().join(format!("sparklines-test-{}", nanos));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_valid_season() {
        let records = parse_season(2015, VALID).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].league, "NL East");
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_season(2015, "{not json").unwrap_err();
        assert!(matches!(err, SeasonError::Parse { year: 2015, .. }));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_season(2015, r#"[{"abbreviation":"NYY"}]"#).unwrap_err();
        assert!(matches!(err, SeasonError::Parse { .. }));
    }

    #[test]
    fn test_empty_season_rejected() {
        assert!(matches!(parse_season(1990, "[]"), Err(SeasonError::Empty(1990))));
    }

    #[test]
    fn test_too_many_results_rejected() {
        let rec = record("NYY", "AL East", 1, &[1, 2]);
        let err = validate(2015, &[rec]).unwrap_err();
        assert!(matches!(err, SeasonError::InvalidRecord { .. }));
        assert!(err.to_string().contains("NYY"));
    }

    #[test]
    fn test_duplicate_abbreviation_rejected() {
        let records = vec![
            record("NYY", "AL East", 2, &[1]),
            record("NYY", "AL East", 2, &[-1]),
        ];
        let err = validate(2015, &records).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[tokio::test]
    async fn test_file_source_reads_year_file() {
        let dir = temp_dir();
        std::fs::write(dir.join("2015.json"), VALID).unwrap();
        let source = FileSeasonSource::new(&dir);

        let records = source.season(2015).await.unwrap();
        assert_eq!(records.len(), 2);

        let err = source.season(2014).await.unwrap_err();
        assert!(matches!(err, SeasonError::Io { .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_demo_source_is_valid() {
        let records = DemoSeasonSource.season(2015).await.unwrap();
        assert!(validate(2015, &records).is_ok());
    }
}
