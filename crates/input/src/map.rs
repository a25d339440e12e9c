//! Key event to input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use arcade_types::Input;

/// Map a keyboard event to a session input.
pub fn map_key_event(key: KeyEvent) -> Input {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Input::Exit;
    }
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') => Input::Up,
        KeyCode::Down | KeyCode::Char('s') => Input::Down,
        KeyCode::Left | KeyCode::Char('a') => Input::Left,
        KeyCode::Right | KeyCode::Char('d') => Input::Right,

        // Module swapping
        KeyCode::Char('g') | KeyCode::Char('G') => Input::SwitchGame,
        KeyCode::Char('l') | KeyCode::Char('L') => Input::SwitchGraphics,

        // Session controls
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Restart,
        KeyCode::Char('m') | KeyCode::Char('M') => Input::Menu,
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Exit,
        KeyCode::Enter => Input::Enter,
        KeyCode::Backspace => Input::Back,
        KeyCode::Esc => Input::Escape,

        _ => Input::None,
    }
}
