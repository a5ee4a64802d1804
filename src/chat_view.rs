use crate::app::App;
use crate::conversation::{Message, Sender};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    draw_messages(f, app, chunks[0]);
    draw_status(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.conversation.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, area));
    }

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.max_scroll = total_lines.saturating_sub(area.height);

    // Pin to the newest content only while the viewport is at the bottom;
    // otherwise leave the user where they scrolled to.
    if app.stick_to_bottom {
        app.scroll = app.max_scroll;
    } else if app.scroll > app.max_scroll {
        app.scroll = app.max_scroll;
    }

    let msgs_para = Paragraph::new(lines)
        .style(Style::default())
        .wrap(Wrap { trim: false });
    f.render_widget(msgs_para.scroll((app.scroll, 0)), area);
}

/// One bubble: a timestamp header, wrapped body lines, and a footer rail,
/// styled by sender. User bubbles are indented to set them apart.
fn render_message(message: &Message, area: Rect) -> Vec<Line<'static>> {
    let (style, indent) = match message.sender() {
        Sender::User => (Style::default().fg(Color::Rgb(255, 223, 128)), "  "),
        Sender::Bot => (Style::default().fg(Color::Rgb(144, 238, 144)), ""),
    };

    let mut lines = Vec::new();
    let timestamp = message.timestamp().format("%H:%M").to_string();
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─".to_string(), style),
        Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
    ]));

    let wrap_width = (area.width as usize).saturating_sub(4);
    for wrapped_line in wrap(message.text(), wrap_width.max(1)) {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(wrapped_line.to_string(), style),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let spinner = if app.in_flight > 0 {
        SPINNER_FRAMES[app.spinner_idx % SPINNER_FRAMES.len()]
    } else {
        " "
    };

    // Send errors show up here as a system notice, never as a bot bubble.
    let (status_text, status_color) = match &app.notice {
        Some(notice) => (notice.as_str(), Color::Red),
        None if app.in_flight > 0 => ("waiting for reply...", Color::DarkGray),
        None => ("", Color::DarkGray),
    };

    let status = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(status_text, Style::default().fg(status_color)),
    ]);
    f.render_widget(Paragraph::new(status), area);
}

pub fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.conversation.draft_text().to_string(),
            Style::default().fg(Color::White),
        ),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.conversation.draft_text().width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );

    if app.input_focused {
        let cursor_x = area.x + 2 + text_width - scroll_offset;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
