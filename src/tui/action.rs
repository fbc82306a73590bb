use crate::season_view::SeasonView;
use crate::types::ChartId;

/// Global actions - like Redux actions
///
/// All state changes in the viewer happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - Effects (async season loading)
/// - The main loop (terminal resize, animation ticks)
#[derive(Debug)]
pub enum Action {
    // Chart interaction
    ClickChart(ChartId),
    SelectNext,
    SelectPrevious,
    ToggleSelected,
    ClearSelection,
    ScrollUp,
    ScrollDown,

    // Season selection
    NextSeason,
    PreviousSeason,
    LoadSeason(i32),

    // Data loaded (from effects)
    SeasonLoaded(i32, Result<Box<SeasonView>, String>),

    // System actions
    /// Terminal is now this many columns by rows
    Resize(u16, u16),
    /// Milliseconds since the previous tick
    Tick(u64),
    Quit,
}
