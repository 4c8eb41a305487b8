//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::{Config, paths};
use folio_core::content::Portfolio;
use folio_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Personal portfolio in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (TOML); overrides `content_path` in config
    #[arg(long, value_name = "PATH", global = true)]
    content: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// List projects and the state of their links
    Projects,
    /// Validate portfolio content
    Check,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, content } = cli;

    match command {
        // default to the interactive viewer
        None => {
            let config = load_config()?;
            let _guard = logging::init_file_logging(&paths::logs_dir())?;
            let portfolio = load_portfolio(content, &config)?;
            commands::run::run(&config, portfolio).await
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Projects) => {
            logging::init_stderr_logging()?;
            let config = load_config()?;
            let portfolio = load_portfolio(content, &config)?;
            commands::projects::list(&portfolio);
            Ok(())
        }
        Some(Commands::Check) => {
            logging::init_stderr_logging()?;
            let config = load_config()?;
            let path = content.or_else(|| config.content_path());
            commands::check::run(path.as_deref())
        }
    }
}

fn load_config() -> Result<Config> {
    Config::load().context("load config")
}

/// `--content` wins over `content_path` from config; neither means built-in.
fn load_portfolio(content: Option<PathBuf>, config: &Config) -> Result<Portfolio> {
    let path = content.or_else(|| config.content_path());
    Portfolio::load_or_builtin(path.as_deref()).context("load portfolio content")
}
