use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Welcome banner shown in place of the message list until the first message
/// is accepted. The input field below it stays live the whole time.
pub fn draw_intro(f: &mut Frame, app: &App, area: Rect) {
    let banner = r#"
▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄
 T A L K   N A T I V E
▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀
    "#;

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(area);

    let banner_par = Paragraph::new(banner)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    f.render_widget(banner_par, vert[1]);

    let mut hint_lines = vec![Line::from(Span::styled(
        "Welcome to TalkNative!",
        Style::default().fg(Color::White),
    ))];
    hint_lines.push(Line::from(Span::styled(
        "type a message and press Enter to start",
        Style::default().fg(Color::DarkGray),
    )));
    if let Some(notice) = &app.notice {
        hint_lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let hint_par = Paragraph::new(hint_lines).alignment(Alignment::Center);
    f.render_widget(hint_par, vert[2]);
}
