//! Transient notifications.
//!
//! At most one toast is visible. Showing a new one replaces the old one and
//! restarts the expiry timer.

mod render;

pub use render::render_toast;

use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Shows a toast and returns the effect that arms its expiry.
pub fn show(app: &mut AppState, kind: ToastKind, message: impl Into<String>) -> UiEffect {
    app.toast = Some(Toast {
        kind,
        message: message.into(),
    });
    app.timers
        .schedule(TimerKind::ToastExpiry, app.config.toast.duration())
}

pub fn expire(app: &mut AppState) {
    app.toast = None;
}
