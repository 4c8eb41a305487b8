//! Contact view.

use folio_core::contact::Field;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::common::theme;
use crate::state::AppState;

const CURSOR: &str = "▌";

pub fn render_contact(app: &AppState, frame: &mut Frame, area: Rect) {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [header, name, email, message, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Let's Connect", theme::heading())),
            Line::from(Span::styled(
                "Have a project in mind or just want to say hi? Drop a message.",
                theme::muted(),
            )),
        ])
        .alignment(Alignment::Center),
        header,
    );

    for (field, field_area) in [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Message, message),
    ] {
        render_field(app, frame, field, field_area);
    }

    let button = if app.contact.is_submitting() {
        Span::styled("[ Sending... ]", theme::muted())
    } else {
        Span::styled(
            "[ Send Message ]",
            theme::accent().add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(button),
            Line::from(vec![
                Span::styled("Ctrl+S", theme::key_hint()),
                Span::styled(" send  ", theme::muted()),
                Span::styled("↑/↓", theme::key_hint()),
                Span::styled(" switch field  ", theme::muted()),
                Span::styled("Tab", theme::key_hint()),
                Span::styled(" next section", theme::muted()),
            ]),
        ])
        .alignment(Alignment::Center),
        footer,
    );
}

fn render_field(app: &AppState, frame: &mut Frame, field: Field, area: Rect) {
    let focused = app.contact.focused == field;
    let value = app.contact.value(field);

    let border_style = if focused { theme::accent() } else { theme::muted() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(field.label(), border_style));

    let show_cursor = focused && !app.contact.is_submitting();
    let cursor = Span::styled(CURSOR, theme::accent());
    let text = if value.is_empty() {
        let placeholder = Span::styled(field.placeholder(), theme::muted());
        if show_cursor {
            Text::from(Line::from(vec![cursor, placeholder]))
        } else {
            Text::from(Line::from(placeholder))
        }
    } else {
        let mut text = Text::from(
            value
                .split('\n')
                .map(|line| Line::from(line.to_string()))
                .collect::<Vec<_>>(),
        );
        if show_cursor {
            text.push_span(cursor);
        }
        text
    };

    // Keep the tail of long messages in view.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = text.lines.len().saturating_sub(inner_height) as u16;

    let para = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(para, area);
}
