//! Hero reducer: typewriter lifecycle and speed control.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::typewriter::Typewriter;
use tracing::{debug, info};

use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::features::socials;
use crate::state::AppState;

const SPEED_STEP: Duration = Duration::from_millis(20);
const MIN_SPEED: Duration = Duration::from_millis(20);
const MAX_SPEED: Duration = Duration::from_millis(400);

/// Creates a fresh typewriter and arms both of its timers.
pub fn mount(app: &mut AppState) -> Vec<UiEffect> {
    let typewriter = Typewriter::new(app.hero.sequence.clone());
    let delay = typewriter.next_delay();
    app.hero.typewriter = Some(typewriter);
    debug!(?delay, "Typewriter mounted");
    vec![
        app.timers.schedule(TimerKind::TypewriterStep, delay),
        app.timers.schedule(TimerKind::CursorBlink, app.hero.cursor_blink),
    ]
}

/// Drops the typewriter and cancels its timers.
pub fn unmount(app: &mut AppState) -> Vec<UiEffect> {
    app.hero.typewriter = None;
    vec![
        app.timers.cancel(TimerKind::TypewriterStep),
        app.timers.cancel(TimerKind::CursorBlink),
    ]
}

pub fn on_typewriter_step(app: &mut AppState) -> Vec<UiEffect> {
    let Some(typewriter) = app.hero.typewriter.as_mut() else {
        return vec![];
    };
    let delay = typewriter.tick();
    vec![app.timers.schedule(TimerKind::TypewriterStep, delay)]
}

pub fn on_cursor_blink(app: &mut AppState) -> Vec<UiEffect> {
    let Some(typewriter) = app.hero.typewriter.as_mut() else {
        return vec![];
    };
    typewriter.toggle_cursor();
    vec![app.timers.schedule(TimerKind::CursorBlink, app.hero.cursor_blink)]
}

/// Adjusts the typing speed. A mounted typewriter restarts with the new
/// sequence and its pending step is replaced.
pub fn change_speed(app: &mut AppState, faster: bool) -> Vec<UiEffect> {
    let current = app.hero.sequence.typing_speed();
    let target = if faster {
        current.saturating_sub(SPEED_STEP).max(MIN_SPEED)
    } else {
        (current + SPEED_STEP).min(MAX_SPEED)
    };
    if target == current {
        return vec![];
    }
    let Ok(sequence) = app.hero.sequence.with_typing_speed(target) else {
        return vec![];
    };
    info!(speed_ms = target.as_millis() as u64, "Typing speed changed");
    app.hero.sequence = sequence.clone();

    let Some(typewriter) = app.hero.typewriter.as_mut() else {
        return vec![];
    };
    typewriter.reconfigure(sequence);
    let delay = typewriter.next_delay();
    vec![app.timers.schedule(TimerKind::TypewriterStep, delay)]
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('+' | '=') => change_speed(app, true),
        KeyCode::Char('-' | '_') => change_speed(app, false),
        _ => socials::handle_key(app, key),
    }
}
