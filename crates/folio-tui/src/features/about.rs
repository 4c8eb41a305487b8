//! About section.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::theme;
use crate::features::socials;
use crate::state::AppState;

pub fn render_about(app: &AppState, frame: &mut Frame, area: Rect) {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(76),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![
        Line::from(Span::styled("About Me", theme::heading())),
        Line::from(""),
    ];
    for paragraph in &app.portfolio.profile.about {
        lines.push(Line::from(paragraph.clone()));
        lines.push(Line::from(""));
    }
    if !app.portfolio.socials.is_empty() {
        lines.push(Line::from(Span::styled("Find me on", theme::muted())));
        for (i, social) in app.portfolio.socials.iter().enumerate() {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(socials::hint(i, &format!("{:<10}", social.label)));
            spans.push(Span::styled(social.url.clone(), theme::muted()));
            lines.push(Line::from(spans));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), column);
}
