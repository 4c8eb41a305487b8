//! Hero view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::theme;
use crate::features::socials;
use crate::state::AppState;

pub fn render_hero(app: &AppState, frame: &mut Frame, area: Rect) {
    let profile = &app.portfolio.profile;

    let role_line = match app.hero.typewriter() {
        Some(typewriter) => Line::from(vec![
            Span::styled(typewriter.display().to_string(), theme::accent()),
            Span::styled(typewriter.cursor_glyph().to_string(), theme::accent()),
        ]),
        None => Line::from(""),
    };

    let socials: Vec<Span> = app
        .portfolio
        .socials
        .iter()
        .enumerate()
        .flat_map(|(i, social)| {
            let sep = (i > 0).then(|| Span::styled("  ·  ", theme::muted()));
            sep.into_iter().chain(socials::hint(i, &social.label))
        })
        .collect();

    let speed_ms = app.hero.sequence().typing_speed().as_millis();
    let lines = vec![
        Line::from(Span::styled(profile.greeting.clone(), theme::muted())),
        Line::from(Span::styled(
            profile.name.clone(),
            theme::heading().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        role_line,
        Line::from(""),
        Line::from(profile.tagline.clone()),
        Line::from(""),
        Line::from(socials),
        Line::from(""),
        Line::from(vec![
            Span::styled("+/-", theme::key_hint()),
            Span::styled(format!(" typing speed ({speed_ms}ms)"), theme::muted()),
        ]),
    ];

    let height = lines.len() as u16 + 2;
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, body, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(80),
        Constraint::Fill(1),
    ])
    .areas(body);

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, body);
}
