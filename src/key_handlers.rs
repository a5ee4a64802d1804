use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One handler for both screens: the input field is always live, and the
/// first accepted send flips the screen to chatting on its own.
pub fn handle_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_focused = true;
            app.submit_draft();
        }
        KeyCode::Esc => {
            // Terminal analogue of tapping outside the input field.
            app.input_focused = false;
        }
        KeyCode::Backspace => {
            app.conversation.pop_draft_char();
        }
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.scroll_up(10),
                    'd' => app.scroll_down(10),
                    _ => {}
                }
            } else {
                app.input_focused = true;
                app.conversation.push_draft_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::AppEvent;
    use crate::transport::ChatClient;
    use crossterm::event::KeyEvent;
    use tokio::sync::mpsc;

    fn test_app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(ChatClient::new(&Config::default()), tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_edits_draft() {
        let (mut app, _rx) = test_app();
        handle_key(press(KeyCode::Char('h')), &mut app);
        handle_key(press(KeyCode::Char('i')), &mut app);
        assert_eq!(app.conversation.draft_text(), "hi");

        handle_key(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.conversation.draft_text(), "h");
    }

    #[test]
    fn test_esc_blurs_and_typing_refocuses() {
        let (mut app, _rx) = test_app();
        handle_key(press(KeyCode::Esc), &mut app);
        assert!(!app.input_focused);
        handle_key(press(KeyCode::Char('x')), &mut app);
        assert!(app.input_focused);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _rx) = test_app();
        handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app);
        assert!(app.should_quit);
    }
}
