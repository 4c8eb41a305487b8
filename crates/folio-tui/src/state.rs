//! Application state composition.
//!
//! ```text
//! AppState
//! ├── section: Section          (navbar selection; owns mount/unmount)
//! ├── portfolio: Portfolio      (read-only content)
//! ├── hero: HeroState           (typing sequence + mounted typewriter)
//! ├── projects: ProjectsState   (carousel controller + hit area)
//! ├── contact: ContactForm      (form fields, submitting flag)
//! ├── toast: Option<Toast>      (transient notification)
//! └── timers: Timers            (live timer ids per kind)
//! ```
//!
//! Only the reducer mutates this. Render reads it, apart from the hit-test
//! rects it records in `Cell`s for mouse routing.

use anyhow::{Context, Result};
use folio_core::config::Config;
use folio_core::contact::ContactForm;
use folio_core::content::Portfolio;

use crate::common::Timers;
use crate::features::hero::HeroState;
use crate::features::projects::ProjectsState;
use crate::features::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Maps `'1'..='5'` to a section.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// TUI application state.
#[derive(Debug)]
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Section currently on screen.
    pub section: Section,
    pub config: Config,
    pub portfolio: Portfolio,
    pub hero: HeroState,
    pub projects: ProjectsState,
    pub contact: ContactForm,
    pub toast: Option<Toast>,
    pub timers: Timers,
    /// Last reported terminal size.
    pub viewport: (u16, u16),
}

impl AppState {
    /// Builds state from config and content. Nothing is mounted yet; call
    /// [`update::start`](crate::update::start) to arm the first section.
    ///
    /// # Errors
    /// Returns an error if the content has no roles to type.
    pub fn new(config: Config, portfolio: Portfolio) -> Result<Self> {
        let sequence = config
            .typewriter
            .sequence(&portfolio.roles)
            .context("Portfolio content needs at least one role")?;
        let hero = HeroState::new(sequence, config.typewriter.cursor_blink());
        let projects = ProjectsState::new(portfolio.projects.len(), &config.carousel);

        Ok(Self {
            should_quit: false,
            section: Section::Home,
            config,
            portfolio,
            hero,
            projects,
            contact: ContactForm::default(),
            toast: None,
            timers: Timers::default(),
            viewport: (0, 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Contact);
    }

    #[test]
    fn test_section_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::Home));
        assert_eq!(Section::from_digit('4'), Some(Section::Projects));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('6'), None);
        assert_eq!(Section::from_digit('x'), None);
    }

    #[test]
    fn test_new_requires_roles() {
        let portfolio = Portfolio::default();
        assert!(AppState::new(Config::default(), portfolio).is_err());
    }
}
