use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::{Toast, ToastKind};
use crate::common::theme;

const MAX_WIDTH: u16 = 48;

/// Draws the toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✓", theme::SUCCESS),
        ToastKind::Error => ("✗", theme::ERROR),
        ToastKind::Info => ("i", theme::ACCENT),
    };

    let width = (toast.message.width() as u16 + 6)
        .min(MAX_WIDTH)
        .min(area.width);
    let inner_width = width.saturating_sub(4).max(1);
    let rows = (toast.message.width() as u16 + 2).div_ceil(inner_width).max(1);
    let height = (rows + 2).min(area.height);

    let popup = Rect::new(
        area.right().saturating_sub(width + 1),
        area.bottom().saturating_sub(height + 1),
        width,
        height,
    )
    .intersection(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let para = Paragraph::new(Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color)),
        Span::raw(toast.message.clone()),
    ]))
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(para, popup);
}
