//! Projects view: card strip with arrows, pagination and link buttons.

use folio_core::carousel::Direction;
use folio_core::content::{LinkKind, Project};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::common::text::truncate_with_ellipsis;
use crate::common::theme;
use crate::state::AppState;

const ARROW_WIDTH: u16 = 3;
/// Cells per pagination dot, glyph plus gap.
const DOT_WIDTH: u16 = 2;

pub fn render_projects(app: &AppState, frame: &mut Frame, area: Rect) {
    let [header, strip, dots, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let carousel = &app.projects.carousel;
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Featured Projects", theme::heading())),
            status_line(app),
        ])
        .alignment(Alignment::Center),
        header,
    );

    if carousel.is_empty() {
        app.projects.area.set(Rect::default());
        app.projects.dot_areas.borrow_mut().clear();
        frame.render_widget(
            Paragraph::new(Span::styled("No projects yet.", theme::muted()))
                .alignment(Alignment::Center),
            strip,
        );
        return;
    }

    let [prev, cards, next] = Layout::horizontal([
        Constraint::Length(ARROW_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(ARROW_WIDTH),
    ])
    .areas(strip);
    app.projects.area.set(cards);
    app.projects.prev_area.set(prev);
    app.projects.next_area.set(next);

    render_arrow(frame, prev, "◀", carousel.can_advance(Direction::Backward));
    render_arrow(frame, next, "▶", carousel.can_advance(Direction::Forward));

    let indices = carousel.visible_indices();
    let slots = Layout::horizontal(vec![Constraint::Fill(1); indices.len()]).split(cards);
    for (slot, index) in slots.iter().zip(indices.iter()) {
        if let Some(project) = app.portfolio.projects.get(*index) {
            let active = *index == carousel.active_index();
            render_card(frame, *slot, project, active);
        }
    }

    render_dots(app, frame, dots);

    let hint = Line::from(vec![
        Span::styled("←/→", theme::key_hint()),
        Span::styled(" browse  ", theme::muted()),
        Span::styled("Space", theme::key_hint()),
        Span::styled(" autoplay  ", theme::muted()),
        Span::styled("v", theme::key_hint()),
        Span::styled(" view  ", theme::muted()),
        Span::styled("g", theme::key_hint()),
        Span::styled(" code", theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hints);
}

fn status_line(app: &AppState) -> Line<'static> {
    let carousel = &app.projects.carousel;
    let autoplay = if !carousel.autoplay_enabled() {
        Span::styled("autoplay off", theme::muted())
    } else if carousel.hover_paused() {
        Span::styled("autoplay paused", Style::default().fg(theme::WARNING))
    } else {
        Span::styled("autoplay on", theme::accent())
    };
    Line::from(vec![
        autoplay,
        Span::styled(
            format!("  ·  {}/{}", carousel.active_index() + 1, carousel.len()),
            theme::muted(),
        ),
    ])
}

fn render_arrow(frame: &mut Frame, area: Rect, glyph: &'static str, enabled: bool) {
    let style = if enabled {
        theme::accent().add_modifier(Modifier::BOLD)
    } else {
        theme::muted()
    };
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(glyph, style)).alignment(Alignment::Center),
        mid,
    );
}

fn render_card(frame: &mut Frame, area: Rect, project: &Project, active: bool) {
    let border_style = if active { theme::accent() } else { theme::muted() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            truncate_with_ellipsis(&project.title, area.width.saturating_sub(4) as usize),
            theme::heading(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, footer] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(inner);

    let mut lines = vec![Line::from(project.description.clone()), Line::from("")];
    if !project.tags.is_empty() {
        let tags: Vec<Span> = project
            .tags
            .iter()
            .flat_map(|tag| {
                [
                    Span::styled(format!("#{tag}"), theme::accent()),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(tags));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);

    let video = match &project.video {
        Some(video) => Span::styled(format!("▶ {video}"), theme::muted()),
        None => Span::styled("▶ no preview", theme::muted()),
    };
    let buttons = Line::from(vec![
        link_button(project, LinkKind::Live),
        Span::raw("  "),
        link_button(project, LinkKind::Source),
    ]);
    frame.render_widget(
        Paragraph::new(vec![Line::from(video), Line::from(""), buttons]),
        footer,
    );
}

fn link_button(project: &Project, kind: LinkKind) -> Span<'static> {
    let label = format!("[ {} ]", kind.label());
    if project.link_target(kind).is_open() {
        Span::styled(label, theme::accent().add_modifier(Modifier::BOLD))
    } else {
        Span::styled(label, theme::muted().add_modifier(Modifier::CROSSED_OUT))
    }
}

fn render_dots(app: &AppState, frame: &mut Frame, area: Rect) {
    let carousel = &app.projects.carousel;
    let visible = carousel.visible_indices();
    let total = u16::try_from(carousel.len())
        .unwrap_or(u16::MAX)
        .saturating_mul(DOT_WIDTH);
    let width = total.min(area.width);
    let row = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height.min(1),
    );

    let mut hit_areas = app.projects.dot_areas.borrow_mut();
    hit_areas.clear();
    let mut dots = Vec::with_capacity(carousel.len());
    for i in 0..carousel.len() {
        let Some(offset) = u16::try_from(i)
            .ok()
            .and_then(|i| i.checked_mul(DOT_WIDTH))
            .filter(|offset| *offset < width)
        else {
            break;
        };
        hit_areas.push(Rect::new(
            row.x + offset,
            row.y,
            DOT_WIDTH.min(width - offset),
            row.height,
        ));
        dots.push(if visible.contains(&i) {
            Span::styled("● ", theme::accent())
        } else {
            Span::styled("○ ", theme::muted())
        });
    }
    frame.render_widget(Paragraph::new(Line::from(dots)), row);
}
