use crate::app::{App, AppScreen};
use crate::{chat_view, intro_screen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    match app.screen {
        AppScreen::Intro => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
                .margin(1)
                .split(size);

            intro_screen::draw_intro(f, app, chunks[0]);
            chat_view::draw_input(f, app, chunks[1]);
        }
        AppScreen::Chatting => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1)].as_ref())
                .margin(1)
                .split(size);

            chat_view::draw_chat(f, app, chunks[0]);
        }
    }
}
