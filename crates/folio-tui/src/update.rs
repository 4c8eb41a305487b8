//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Sections own their timers: entering a section mounts it (arms timers)
//! and leaving unmounts it (disarms them). A fire that arrives after its
//! timer was disarmed or replaced is dropped before it reaches a feature.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use folio_core::timer::TimerId;
use tracing::{debug, info};

use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{contact, hero, projects, socials, toast};
use crate::state::{AppState, Section};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => handle_frame(app, width, height),
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TimerFired { kind, id } => handle_timer(app, kind, id),
        UiEvent::ContactSubmitted { result } => contact::handle_submit_result(app, result),
    }
}

/// Mounts the initial section. Called once before the first frame.
pub fn start(app: &mut AppState) -> Vec<UiEffect> {
    let section = app.section;
    mount(app, section)
}

fn mount(app: &mut AppState, section: Section) -> Vec<UiEffect> {
    match section {
        Section::Home => hero::mount(app),
        Section::Projects => projects::mount(app),
        Section::About | Section::Skills | Section::Contact => vec![],
    }
}

fn unmount(app: &mut AppState, section: Section) -> Vec<UiEffect> {
    match section {
        Section::Home => hero::unmount(app),
        Section::Projects => projects::unmount(app),
        Section::About | Section::Skills | Section::Contact => vec![],
    }
}

/// Switches sections, unmounting the old one before mounting the new one.
pub fn switch_section(app: &mut AppState, target: Section) -> Vec<UiEffect> {
    let current = app.section;
    if current == target {
        return vec![];
    }
    info!(from = current.label(), to = target.label(), "Switching section");
    let mut effects = unmount(app, current);
    app.section = target;
    effects.extend(mount(app, target));
    effects
}

fn handle_frame(app: &mut AppState, width: u16, height: u16) -> Vec<UiEffect> {
    if app.viewport == (width, height) {
        return vec![];
    }
    app.viewport = (width, height);
    let mounted = app.section == Section::Projects;
    projects::resize(app, width, mounted)
}

fn handle_timer(app: &mut AppState, kind: TimerKind, id: TimerId) -> Vec<UiEffect> {
    if !app.timers.fire_if_active(kind, id) {
        debug!(?kind, ?id, "Dropping stale timer fire");
        return vec![];
    }
    match kind {
        TimerKind::TypewriterStep => hero::on_typewriter_step(app),
        TimerKind::CursorBlink => hero::on_cursor_blink(app),
        TimerKind::CarouselAutoplay => projects::on_autoplay(app),
        TimerKind::ToastExpiry => {
            toast::expire(app);
            vec![]
        }
    }
}

// ============================================================================
// Terminal Input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) if app.section == Section::Contact => {
            contact::handle_paste(app, &text);
            vec![]
        }
        Event::Resize(width, height) => handle_frame(app, width, height),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    let section = app.section;
    match key.code {
        KeyCode::Tab => return switch_section(app, section.next()),
        KeyCode::BackTab => return switch_section(app, section.prev()),
        _ => {}
    }

    // The form captures plain characters, so global shortcuts stay out of it.
    if section == Section::Contact {
        if key.code == KeyCode::Esc {
            return switch_section(app, Section::Home);
        }
        return contact::handle_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char(c) if c.is_ascii_digit() => match Section::from_digit(c) {
            Some(target) => switch_section(app, target),
            None => vec![],
        },
        _ => match section {
            Section::Home => hero::handle_key(app, key),
            Section::Projects => projects::handle_key(app, key),
            Section::About => socials::handle_key(app, key),
            Section::Skills | Section::Contact => vec![],
        },
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    match app.section {
        Section::Projects => projects::handle_mouse(app, mouse),
        _ => vec![],
    }
}
