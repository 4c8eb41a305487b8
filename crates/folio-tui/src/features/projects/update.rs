//! Projects reducer: autoplay timer, navigation, hover pause and links.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_core::carousel::{AutoplayChange, Direction};
use folio_core::content::{LinkKind, LinkTarget};
use folio_core::viewport::visible_count_for;
use ratatui::layout::Position;
use tracing::{debug, info, warn};

use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::features::toast::{self, ToastKind};
use crate::state::AppState;

/// Arms autoplay if it should be running.
pub fn mount(app: &mut AppState) -> Vec<UiEffect> {
    restart_autoplay(app)
}

/// Cancels autoplay. Hover state does not survive leaving the section.
pub fn unmount(app: &mut AppState) -> Vec<UiEffect> {
    app.projects.carousel.hover_exit();
    vec![app.timers.cancel(TimerKind::CarouselAutoplay)]
}

/// Whether the autoplay timer has anything to do. Stays false at the end
/// of a finite carousel until the user moves back.
fn autoplay_due(app: &AppState) -> bool {
    let carousel = &app.projects.carousel;
    carousel.autoplay_running() && carousel.can_advance(Direction::Forward)
}

/// Schedules a full interval when autoplay is due, cancels otherwise.
fn restart_autoplay(app: &mut AppState) -> Vec<UiEffect> {
    if autoplay_due(app) {
        let interval = app.projects.carousel.interval();
        vec![app.timers.schedule(TimerKind::CarouselAutoplay, interval)]
    } else if app.timers.disarm(TimerKind::CarouselAutoplay) {
        vec![UiEffect::CancelTimer {
            kind: TimerKind::CarouselAutoplay,
        }]
    } else {
        vec![]
    }
}

pub fn on_autoplay(app: &mut AppState) -> Vec<UiEffect> {
    if app.projects.carousel.autoplay_tick() {
        debug!(
            index = app.projects.carousel.active_index(),
            "Autoplay advanced"
        );
    }
    restart_autoplay(app)
}

/// Manual navigation. A successful move restarts the autoplay interval.
pub fn navigate(app: &mut AppState, direction: Direction) -> Vec<UiEffect> {
    if !app.projects.carousel.advance(direction) {
        return vec![];
    }
    debug!(
        ?direction,
        index = app.projects.carousel.active_index(),
        "Carousel moved"
    );
    restart_autoplay(app)
}

/// Jumps to a slide from the pagination dots. Restarts the interval like
/// any manual move.
pub fn jump(app: &mut AppState, index: usize) -> Vec<UiEffect> {
    if !app.projects.carousel.go_to(index) {
        return vec![];
    }
    debug!(
        index = app.projects.carousel.active_index(),
        "Carousel jumped"
    );
    restart_autoplay(app)
}

pub fn toggle_autoplay(app: &mut AppState) -> Vec<UiEffect> {
    let change = app.projects.carousel.toggle_autoplay();
    info!(?change, "Carousel autoplay toggled");
    match change {
        AutoplayChange::Started => restart_autoplay(app),
        AutoplayChange::Stopped => vec![app.timers.cancel(TimerKind::CarouselAutoplay)],
    }
}

/// Applies the slides-per-view rule for a terminal width. When the carousel
/// is mounted, a new window size can make autoplay due again or moot.
pub fn resize(app: &mut AppState, width: u16, mounted: bool) -> Vec<UiEffect> {
    let carousel = &mut app.projects.carousel;
    let before = carousel.visible_count();
    carousel.set_visible_count(visible_count_for(&app.projects.breakpoints, width));
    if carousel.visible_count() == before {
        return vec![];
    }
    debug!(width, visible = carousel.visible_count(), "Carousel resized");
    if mounted && autoplay_due(app) != app.timers.is_armed(TimerKind::CarouselAutoplay) {
        restart_autoplay(app)
    } else {
        vec![]
    }
}

/// Opens a link of the active project, or explains why it cannot.
pub fn open_link(app: &mut AppState, kind: LinkKind) -> Vec<UiEffect> {
    let Some(project) = app
        .portfolio
        .projects
        .get(app.projects.carousel.active_index())
    else {
        return vec![];
    };
    match project.link_target(kind) {
        LinkTarget::Open(url) => {
            info!(project = %project.title, %url, "Opening project link");
            vec![UiEffect::OpenBrowser {
                url: url.to_string(),
            }]
        }
        LinkTarget::Inert(reason) => {
            warn!(project = %project.title, link = kind.label(), %reason, "Project link unavailable");
            let message = format!("{} has no {} link", project.title, kind.label());
            vec![toast::show(app, ToastKind::Error, message)]
        }
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => navigate(app, Direction::Backward),
        KeyCode::Right | KeyCode::Char('l') => navigate(app, Direction::Forward),
        KeyCode::Char(' ') => toggle_autoplay(app),
        KeyCode::Char('v') | KeyCode::Enter => open_link(app, LinkKind::Live),
        KeyCode::Char('g') => open_link(app, LinkKind::Source),
        _ => vec![],
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => hover(app, position),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            navigate(app, Direction::Forward)
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            navigate(app, Direction::Backward)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.projects.prev_area.get().contains(position) {
                navigate(app, Direction::Backward)
            } else if app.projects.next_area.get().contains(position) {
                navigate(app, Direction::Forward)
            } else {
                let dot = app
                    .projects
                    .dot_areas
                    .borrow()
                    .iter()
                    .position(|area| area.contains(position));
                dot.map_or_else(Vec::new, |index| jump(app, index))
            }
        }
        _ => vec![],
    }
}

fn hover(app: &mut AppState, position: Position) -> Vec<UiEffect> {
    if !app.projects.pause_on_hover {
        return vec![];
    }
    let inside = app.projects.area.get().contains(position);
    let carousel = &mut app.projects.carousel;
    if inside && !carousel.hover_paused() {
        debug!("Pointer entered carousel");
        if carousel.hover_enter() {
            return vec![app.timers.cancel(TimerKind::CarouselAutoplay)];
        }
    } else if !inside && carousel.hover_paused() {
        debug!("Pointer left carousel");
        if carousel.hover_exit() {
            return restart_autoplay(app);
        }
    }
    vec![]
}
