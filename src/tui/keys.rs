//! Keyboard and mouse event to action mapping
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use super::action::Action;
use super::state::AppState;

pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    trace!("KEY: {:?}", key.code);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char(']') => Some(Action::NextSeason),
        KeyCode::Char('[') => Some(Action::PreviousSeason),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Action::SelectNext),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Action::SelectPrevious),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleSelected),
        KeyCode::Esc => Some(Action::ClearSelection),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        _ => None,
    }
}

/// A left click on a chart clicks that chart; anything else is ignored
pub fn mouse_to_action(mouse: MouseEvent, state: &AppState) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => state
            .chart_at(mouse.column, mouse.row)
            .map(Action::ClickChart),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        _ => None,
    }
}
