//! Terminal input mapping
//!
//! Turns crossterm events into semantic `Action`s. Anything unmapped is
//! ignored by the event loop.

use crate::reveal::Action;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Map a key press to an action
///
/// Only presses count; releases and repeats map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event to an action; only the wheel does anything
#[must_use]
pub fn map_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => Some(Action::Scroll),
        _ => None,
    }
}

/// Map any terminal event to an action
#[must_use]
pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => None,
    }
}
