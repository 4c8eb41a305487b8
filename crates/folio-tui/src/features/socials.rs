//! Social links, shown on Home and About and opened by letter key.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content::LinkTarget;
use ratatui::text::Span;
use tracing::{info, warn};

use crate::common::theme;
use crate::effects::UiEffect;
use crate::features::toast::{self, ToastKind};
use crate::state::AppState;

/// Keys for the first socials, in content order.
const KEYS: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];

pub fn key_for(index: usize) -> Option<char> {
    KEYS.get(index).copied()
}

/// Opens the social at `index`, or reports why its URL cannot be opened.
pub fn open(app: &mut AppState, index: usize) -> Vec<UiEffect> {
    let Some(social) = app.portfolio.socials.get(index) else {
        return vec![];
    };
    let label = social.label.clone();
    match LinkTarget::parse(Some(&social.url)) {
        LinkTarget::Open(url) => {
            info!(social = %label, %url, "Opening social link");
            vec![UiEffect::OpenBrowser {
                url: url.to_string(),
            }]
        }
        LinkTarget::Inert(reason) => {
            warn!(social = %label, %reason, "Social link unavailable");
            vec![toast::show(
                app,
                ToastKind::Error,
                format!("{label} link is {reason}"),
            )]
        }
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let KeyCode::Char(c) = key.code else {
        return vec![];
    };
    match KEYS.iter().position(|k| *k == c) {
        Some(index) => open(app, index),
        None => vec![],
    }
}

/// `[a] GitHub` style label; socials past the last key get no hint.
pub fn hint(index: usize, label: &str) -> Vec<Span<'static>> {
    match key_for(index) {
        Some(key) => vec![
            Span::styled(format!("[{key}]"), theme::key_hint()),
            Span::raw(format!(" {label}")),
        ],
        None => vec![Span::raw(label.to_string())],
    }
}
