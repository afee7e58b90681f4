//! Keyboard handling for the TUI
//!
//! There is a single screen: the input field always has focus, so printable
//! keys edit it and control keys drive the list.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle one key press; returns `true` when the app should exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('r') if ctrl => app.spawn_refresh(),
        KeyCode::Char('y') if ctrl => copy_selected(app),
        KeyCode::Char('u') if ctrl => app.controller.clear_input(),
        KeyCode::Enter => app.spawn_submit(),
        KeyCode::Backspace => app.controller.pop_char(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => {
            let len = app.controller.snapshot().entries.len();
            app.move_down(len);
        }
        KeyCode::Char(c) if !ctrl => app.controller.push_char(c),
        _ => {}
    }

    app.should_quit
}

fn copy_selected(app: &mut App) {
    let state = app.controller.snapshot();
    let Some(url) = app.selected_short_url(&state) else {
        app.set_status("Nothing selected");
        return;
    };

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url.clone())) {
        Ok(()) => app.set_status(format!("Copied: {}", url)),
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            app.set_status("Clipboard unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::tui::test_support::null_app as app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_input() {
        let mut app = app();
        for c in "http://a.comx".chars() {
            assert!(!handle_key_event(&mut app, press(KeyCode::Char(c))));
        }
        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.controller.snapshot().input_value, "http://a.com");

        // q 是普通字符，不退出
        assert!(!handle_key_event(&mut app, press(KeyCode::Char('q'))));

        handle_key_event(&mut app, ctrl('u'));
        assert_eq!(app.controller.snapshot().input_value, "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(handle_key_event(&mut app, press(KeyCode::Esc)));

        let mut app = self::app();
        assert!(handle_key_event(&mut app, ctrl('c')));
    }

    #[test]
    fn test_copy_without_selection() {
        let mut app = app();
        handle_key_event(&mut app, ctrl('y'));
        assert_eq!(app.status_message, "Nothing selected");
    }
}
