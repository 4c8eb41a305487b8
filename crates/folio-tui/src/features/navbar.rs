//! Navbar and footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::theme;
use crate::state::{AppState, Section};

pub fn render_navbar(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::muted());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand, tabs] =
        Layout::horizontal([Constraint::Length(8), Constraint::Fill(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", app.portfolio.profile.initials),
            theme::accent().add_modifier(Modifier::BOLD),
        )),
        brand,
    );

    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == app.section {
            theme::accent().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("{} ", i + 1), theme::muted()));
        spans.push(Span::styled(section.label(), style));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        tabs,
    );
}

pub fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let profile = &app.portfolio.profile;
    let quit_hint = if app.section == Section::Contact {
        "Ctrl+C quit"
    } else {
        "q quit"
    };
    let line = Line::from(vec![
        Span::styled(format!("© {}. {}", profile.name, profile.footer), theme::muted()),
        Span::raw("   "),
        Span::styled(quit_hint, theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
