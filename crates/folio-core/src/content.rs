//! Portfolio content: profile, roles, skills, projects.
//!
//! Content is read-only once loaded. Project links are validated lazily:
//! a missing or malformed link never fails loading, it just renders as an
//! inert button.

use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_CONTENT: &str = include_str!("../assets/portfolio.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub greeting: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Accent color as `#RRGGBB`.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Skill {
    /// Parses the accent color into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.as_deref()?.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The deployed site ("View").
    Live,
    /// The source repository ("Code").
    Source,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Live => "View",
            LinkKind::Source => "Code",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InertReason {
    Missing,
    Malformed(String),
    UnsupportedScheme(String),
}

impl fmt::Display for InertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InertReason::Missing => write!(f, "missing"),
            InertReason::Malformed(raw) => write!(f, "malformed URL {raw:?}"),
            InertReason::UnsupportedScheme(scheme) => write!(f, "unsupported scheme {scheme:?}"),
        }
    }
}

/// Where a project button leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Open(Url),
    Inert(InertReason),
}

impl LinkTarget {
    /// Classifies a raw link. Only absolute `http`/`https` URLs open.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return LinkTarget::Inert(InertReason::Missing);
        };
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => LinkTarget::Open(url),
            Ok(url) => LinkTarget::Inert(InertReason::UnsupportedScheme(url.scheme().to_string())),
            Err(_) => LinkTarget::Inert(InertReason::Malformed(raw.to_string())),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LinkTarget::Open(_))
    }
}

impl Project {
    pub fn link_target(&self, kind: LinkKind) -> LinkTarget {
        let raw = match kind {
            LinkKind::Live => self.link.as_deref(),
            LinkKind::Source => self.github.as_deref(),
        };
        LinkTarget::parse(raw)
    }
}

/// A non-fatal problem found in loaded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentWarning {
    pub project: String,
    pub message: String,
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.project, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub roles: Vec<String>,
    pub socials: Vec<Social>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// The built-in content.
    ///
    /// # Errors
    /// Returns an error if the embedded content fails to parse.
    pub fn builtin() -> Result<Self> {
        toml::from_str(DEFAULT_CONTENT).context("Failed to parse built-in portfolio content")
    }

    /// Loads content from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse content from {}", path.display()))
    }

    /// Loads `path` when given, otherwise the built-in content.
    ///
    /// # Errors
    /// Returns an error if loading fails.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    /// Collects problems that degrade rendering without failing it.
    pub fn warnings(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();
        for project in &self.projects {
            for kind in [LinkKind::Live, LinkKind::Source] {
                if let LinkTarget::Inert(reason) = project.link_target(kind) {
                    warnings.push(ContentWarning {
                        project: project.title.clone(),
                        message: format!("{} link is {reason}", kind.label()),
                    });
                }
            }
            if project.video.is_none() {
                warnings.push(ContentWarning {
                    project: project.title.clone(),
                    message: "missing video".to_string(),
                });
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(link: Option<&str>, github: Option<&str>) -> Project {
        Project {
            title: "Demo".to_string(),
            description: String::new(),
            tags: Vec::new(),
            video: Some("demo.mp4".to_string()),
            link: link.map(ToString::to_string),
            github: github.map(ToString::to_string),
        }
    }

    #[test]
    fn test_builtin_content_parses() {
        let portfolio = Portfolio::builtin().unwrap();
        assert_eq!(portfolio.roles.len(), 4);
        assert_eq!(portfolio.roles[0], "Frontend Developer");
        assert_eq!(portfolio.projects.len(), 7);
        assert_eq!(portfolio.skills.len(), 6);
        assert!(portfolio.warnings().is_empty());
    }

    #[test]
    fn test_link_classification() {
        let p = project(Some("https://example.com"), Some("ftp://example.com/repo"));
        assert!(p.link_target(LinkKind::Live).is_open());
        assert_eq!(
            p.link_target(LinkKind::Source),
            LinkTarget::Inert(InertReason::UnsupportedScheme("ftp".to_string()))
        );

        let p = project(Some("not a url"), None);
        assert_eq!(
            p.link_target(LinkKind::Live),
            LinkTarget::Inert(InertReason::Malformed("not a url".to_string()))
        );
        assert_eq!(
            p.link_target(LinkKind::Source),
            LinkTarget::Inert(InertReason::Missing)
        );
    }

    #[test]
    fn test_javascript_scheme_is_inert() {
        let p = project(Some("javascript:alert(1)"), Some("  "));
        assert!(!p.link_target(LinkKind::Live).is_open());
        assert_eq!(
            p.link_target(LinkKind::Source),
            LinkTarget::Inert(InertReason::Missing)
        );
    }

    #[test]
    fn test_warnings_for_bad_links() {
        let portfolio = Portfolio {
            projects: vec![project(None, Some("https://github.com/x/y"))],
            ..Portfolio::default()
        };
        let warnings = portfolio.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].to_string(), "Demo: View link is missing");
    }

    #[test]
    fn test_minimal_project_entry() {
        let portfolio: Portfolio = toml::from_str(
            "roles = [\"Dev\"]\n[[projects]]\ntitle = \"A\"\n[[projects]]\ntitle = \"B\"\n",
        )
        .unwrap();
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.projects[1].title, "B");
        assert_eq!(portfolio.warnings().len(), 6);
    }

    #[test]
    fn test_skill_rgb() {
        let skill = Skill {
            name: "Rust".to_string(),
            color: Some("#F06529".to_string()),
            description: String::new(),
        };
        assert_eq!(skill.rgb(), Some((0xF0, 0x65, 0x29)));

        let skill = Skill {
            color: Some("red".to_string()),
            ..skill
        };
        assert_eq!(skill.rgb(), None);
    }
}
