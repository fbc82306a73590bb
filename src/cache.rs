use std::sync::Arc;

use cached::proc_macro::cached;

use crate::season::{SeasonError, SeasonSource};
use crate::types::TeamSeasonRecord;

pub use cached::Cached;

/// Seasons kept in memory at once
const SEASON_CACHE_SIZE: usize = 8;

#[cfg(test)]
pub async fn clear_all_caches() {
    SEASON_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
pub async fn season_is_cached(year: i32) -> bool {
    SEASON_CACHE.lock().await.cache_get(&year).is_some()
}

/// Load a season once; later requests for the same year reuse the parsed
/// records. Failures are not cached, so a retry goes back to the source.
#[cached(
    name = "SEASON_CACHE",
    type = "cached::SizedCache<i32, Arc<Vec<TeamSeasonRecord>>>",
    create = "{ cached::SizedCache::with_size(SEASON_CACHE_SIZE) }",
    convert = r#"{ year }"#,
    result = true
)]
pub async fn fetch_season_cached(
    source: &dyn SeasonSource,
    year: i32,
) -> Result<Arc<Vec<TeamSeasonRecord>>, SeasonError> {
    source.season(year).await.map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl SeasonSource for CountingSource {
        async fn season(&self, year: i32) -> Result<Vec<TeamSeasonRecord>, SeasonError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SeasonError::Empty(year))
            } else {
                Ok(crate::fixtures::two_division_season())
            }
        }
    }

    // Other tests load seasons concurrently, so only year 1901 is inspected here
    #[tokio::test]
    async fn test_season_cache_behaviour() {
        clear_all_caches().await;
        assert!(!season_is_cached(1901).await);

        let failing = CountingSource {
            calls: AtomicUsize::new(0),
            fail: true,
        };
        assert!(fetch_season_cached(&failing, 1901).await.is_err());
        assert!(fetch_season_cached(&failing, 1901).await.is_err());
        assert_eq!(failing.calls.load(Ordering::SeqCst), 2);
        assert!(!season_is_cached(1901).await);

        let source = CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        };
        let first = fetch_season_cached(&source, 1901).await.unwrap();
        let second = fetch_season_cached(&source, 1901).await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(season_is_cached(1901).await);
    }
}
