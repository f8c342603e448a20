//! Main entry point for the tessera command line tool.

use anyhow::{Context, Result};
use clap::Parser;
use tessera_cli::{App, Cli};
use tessera_common::init_logging;
use tessera_config::{ConfigLoader, Settings};
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;

    let mut logging = settings.logging.to_logging_config();
    if let Some(level) = &cli.log_level {
        logging.level.clone_from(level);
    }
    init_logging(&logging).context("failed to initialize logging")?;

    debug!(?settings, "Starting tessera");

    let app = App::new(settings);
    match app.run(&cli.command).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {e}");
            Err(e.into())
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ConfigLoader::load().context("failed to load configuration")?,
    };

    Ok(settings)
}
