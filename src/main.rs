#![warn(clippy::pedantic)]
use webview_shell::{config::ShellConfig, logger, window};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::default();
    let log_path = logger::init(&config)?;
    tracing::debug!("Logging to {}", log_path.display());

    window::run(config)?;
    Ok(())
}
