use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::action::Action;
use crate::cache;
use crate::season::SeasonSource;
use crate::season_view::{SeasonView, SeasonViewOptions};

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    /// Load and prepare a season; resolved by the runtime through `DataEffects`
    LoadSeason(i32),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => write!(f, "Action({:?})", action),
            Effect::Batch(effects) => write!(f, "Batch({:?})", effects),
            Effect::LoadSeason(year) => write!(f, "LoadSeason({})", year),
            Effect::Async(_) => write!(f, "Async(..)"),
        }
    }
}

/// Effect handler for season loading
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded action when complete.
pub struct DataEffects {
    source: Arc<dyn SeasonSource>,
    options: SeasonViewOptions,
}

impl DataEffects {
    pub fn new(source: Arc<dyn SeasonSource>, options: SeasonViewOptions) -> Self {
        Self { source, options }
    }

    /// Fetch a season (with caching) and prepare its charts off the UI loop
    pub fn load_season(&self, year: i32) -> Effect {
        let source = self.source.clone();
        let options = self.options.clone();
        Effect::Async(Box::pin(async move {
            debug!("EFFECT: loading season {}", year);
            let result = cache::fetch_season_cached(source.as_ref(), year)
                .await
                .map(|records| Box::new(SeasonView::build(year, &records, &options)))
                .map_err(|e| e.to_string());
            Action::SeasonLoaded(year, result)
        }))
    }
}
