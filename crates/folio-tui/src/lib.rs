//! Full-screen terminal portfolio viewer.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use folio_core::config::Config;
use folio_core::content::Portfolio;
use folio_core::email::{EmailClient, EmailSettings};
pub use runtime::TuiRuntime;
use tracing::{info, warn};

/// Runs the interactive viewer until the visitor quits.
///
/// Missing email credentials do not prevent startup; the contact form
/// reports the failure when it is used.
///
/// # Errors
/// Returns an error if there is no terminal, the content cannot be shown,
/// or terminal I/O fails.
pub async fn run(config: &Config, portfolio: Portfolio) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portfolio viewer requires a terminal.\n\
             Use `folio projects` for a plain listing."
        );
    }

    let email = match EmailSettings::resolve(&config.email) {
        Ok(settings) => Ok(EmailClient::new(settings)?),
        Err(err) => {
            warn!(%err, "Contact form will not be able to send");
            Err(err)
        }
    };

    info!(
        projects = portfolio.projects.len(),
        roles = portfolio.roles.len(),
        "Starting portfolio viewer"
    );
    let mut runtime = TuiRuntime::new(config.clone(), portfolio, email)?;
    runtime.run()
}
