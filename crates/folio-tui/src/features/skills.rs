//! Skills section: a grid of colored cards.

use folio_core::content::Skill;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::common::theme;
use crate::state::AppState;

const CARD_HEIGHT: u16 = 5;
const MIN_CARD_WIDTH: u16 = 28;

pub fn render_skills(app: &AppState, frame: &mut Frame, area: Rect) {
    let [header, grid] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled("Skills & Technologies", theme::heading()))
            .alignment(Alignment::Center),
        header,
    );

    let skills = &app.portfolio.skills;
    if skills.is_empty() {
        return;
    }
    let columns = (grid.width / MIN_CARD_WIDTH).clamp(1, 3) as usize;
    let rows = skills.chunks(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows.len()]).split(grid);

    for (row, row_area) in rows.zip(row_areas.iter()) {
        let cells = Layout::horizontal(vec![Constraint::Fill(1); columns]).split(*row_area);
        for (skill, cell) in row.iter().zip(cells.iter()) {
            render_skill(frame, skill, *cell);
        }
    }
}

fn render_skill(frame: &mut Frame, skill: &Skill, area: Rect) {
    let color = skill
        .rgb()
        .map_or(theme::ACCENT, |(r, g, b)| Color::Rgb(r, g, b));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(skill.name.clone(), Style::default().fg(color)));
    let para = Paragraph::new(Line::from(skill.description.clone()))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(para, area);
}
