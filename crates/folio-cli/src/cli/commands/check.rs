//! `folio check`: content validation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use folio_core::content::Portfolio;

pub fn run(path: Option<&Path>) -> Result<()> {
    let portfolio = Portfolio::load_or_builtin(path).context("load portfolio content")?;
    let source = path.map_or_else(|| "built-in content".to_string(), |p| p.display().to_string());

    if portfolio.roles.is_empty() {
        bail!("{source}: no roles defined; the hero needs at least one");
    }

    let mut warnings: Vec<String> = portfolio
        .roles
        .iter()
        .enumerate()
        .filter(|(_, role)| role.trim().is_empty())
        .map(|(i, _)| format!("role #{} is blank and will only show the cursor", i + 1))
        .collect();
    warnings.extend(portfolio.warnings().iter().map(ToString::to_string));
    for warning in &warnings {
        println!("warning: {warning}");
    }
    println!(
        "{source}: {} roles, {} skills, {} projects, {} warning(s)",
        portfolio.roles.len(),
        portfolio.skills.len(),
        portfolio.projects.len(),
        warnings.len()
    );
    Ok(())
}
