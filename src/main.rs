use anyhow::{Context, Result};
use clap::Parser;
use todoterm::cli::Cli;
use todoterm::config::Config;
use todoterm::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load()?,
    };

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
