//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` and draw to a ratatui `Frame`. They never
//! return effects; the only writes are hit-test rects recorded in `Cell`s.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use crate::features::{about, contact, hero, navbar, projects, skills, toast};
use crate::state::{AppState, Section};

const NAVBAR_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let [nav, body, footer] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    navbar::render_navbar(app, frame, nav);

    let body = body.inner(Margin::new(1, 1));
    match app.section {
        Section::Home => hero::render_hero(app, frame, body),
        Section::About => about::render_about(app, frame, body),
        Section::Skills => skills::render_skills(app, frame, body),
        Section::Projects => projects::render_projects(app, frame, body),
        Section::Contact => contact::render_contact(app, frame, body),
    }

    navbar::render_footer(app, frame, footer);

    if let Some(t) = &app.toast {
        toast::render_toast(frame, t, area);
    }
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;
    use folio_core::content::Portfolio;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::TimerKind;
    use crate::events::UiEvent;
    use crate::update;

    fn app() -> AppState {
        AppState::new(Config::default(), Portfolio::builtin().unwrap()).unwrap()
    }

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn fire_step(app: &mut AppState) {
        let kind = TimerKind::TypewriterStep;
        let id = app.timers.active(kind).unwrap();
        update::update(app, UiEvent::TimerFired { kind, id });
    }

    #[test]
    fn test_hero_shows_typed_prefix() {
        let mut app = app();
        update::start(&mut app);
        for _ in 0..8 {
            fire_step(&mut app);
        }
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Frontend"), "{screen}");
        assert!(!screen.contains("Frontend Developer"), "{screen}");
        assert!(screen.contains("Asterios Koutoulidis"));
        assert!(screen.contains("[a] GitHub"), "{screen}");
        assert!(screen.contains("[b] LinkedIn"), "{screen}");
    }

    #[test]
    fn test_projects_records_hit_area_and_cards() {
        let mut app = app();
        update::update(&mut app, UiEvent::Frame { width: 150, height: 40 });
        app.section = Section::Projects;
        let screen = draw(&app, 150, 40);

        assert!(screen.contains("Featured Projects"));
        assert!(screen.contains("GO G Cleaning Services"));
        assert!(screen.contains("Portfolio"));
        assert!(screen.contains("FINACE."));
        assert!(!screen.contains("Besteats"));
        assert!(app.projects.area.get().width > 0);

        let dots = app.projects.dot_areas.borrow();
        assert_eq!(dots.len(), 7);
        assert!(dots.windows(2).all(|pair| pair[1].x == pair[0].x + 2));
        let dot_row = screen.lines().nth(usize::from(dots[0].y)).unwrap();
        assert_eq!(dot_row.matches('●').count(), 3, "{dot_row}");
    }

    #[test]
    fn test_contact_shows_placeholders() {
        let mut app = app();
        app.section = Section::Contact;
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Let's Connect"));
        assert!(screen.contains("Send Message"));
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut app = app();
        app.section = Section::About;
        app.toast = Some(toast::Toast {
            kind: toast::ToastKind::Success,
            message: "Message sent successfully!".to_string(),
        });
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Message sent"), "{screen}");
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        for section in Section::ALL {
            app.section = section;
            draw(&app, 10, 4);
        }
    }
}
