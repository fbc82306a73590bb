pub mod action;
pub mod animation;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod view;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::{key_to_action, mouse_to_action};
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::commands::season_view_options;
use crate::config::Config;
use crate::season::SeasonSource;

/// Event poll timeout while charts are animating (about 60 frames per second)
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Event poll timeout when idle
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Main entry point for TUI mode
pub async fn run(source: Arc<dyn SeasonSource>, year: i32, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(source, season_view_options(&config)));
    let mut runtime = Runtime::new(AppState::new(year, config), data_effects);

    let size = terminal.size()?;
    runtime.dispatch(Action::Resize(size.width, size.height));
    runtime.dispatch(Action::LoadSeason(year));

    let result = event_loop(&mut terminal, &mut runtime).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Milliseconds to advance running animations by.
///
/// An animation started during this pass waited on the idle poll, so its
/// first frame is capped at one animation frame.
fn tick_delta(elapsed: Duration, was_animating: bool) -> u64 {
    let elapsed = if was_animating {
        elapsed
    } else {
        elapsed.min(ANIMATION_FRAME)
    };
    elapsed.as_millis() as u64
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    let mut last_tick = Instant::now();

    loop {
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| view::draw(f, runtime.state()))?;

        let was_animating = runtime.state().animator.is_animating();
        let timeout = if was_animating {
            ANIMATION_FRAME
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => key_to_action(key),
                Event::Mouse(mouse) => mouse_to_action(mouse, runtime.state()),
                Event::Resize(width, height) => Some(Action::Resize(width, height)),
                _ => None,
            };

            if let Some(action) = action {
                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
                runtime.dispatch(action);
            }
        }

        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        if runtime.state().animator.is_animating() {
            runtime.dispatch(Action::Tick(tick_delta(elapsed, was_animating)));
        }

        // Let spawned season loads make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
