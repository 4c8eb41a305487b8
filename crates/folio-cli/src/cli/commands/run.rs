//! Interactive viewer.

use anyhow::Result;
use folio_core::config::Config;
use folio_core::content::Portfolio;
use tracing::warn;

pub async fn run(config: &Config, portfolio: Portfolio) -> Result<()> {
    for warning in portfolio.warnings() {
        warn!(%warning, "Content warning");
    }
    folio_tui::run(config, portfolio).await
}
