//! Console and file logging for lifecycle events.
//!
//! Every event goes to two places: a coloured, timestamped line on stdout and
//! a timestamped JSON line appended to the log file. Writes happen on the
//! calling thread; there is no background worker and no rotation.

use std::path::{Path, PathBuf};

use tracing::{Level, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::Targets, fmt, fmt::MakeWriter, layer::SubscriberExt};

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};

/// Installs the global subscriber and returns the path of the log file.
pub fn init(config: &ShellConfig) -> Result<PathBuf> {
    let subscriber = subscriber(&config.log_dir, &config.log_file_name, std::io::stdout)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ShellError::Logger(e.to_string()))?;

    Ok(config.log_dir.join(&config.log_file_name))
}

/// Builds the two-destination subscriber without installing it.
pub fn subscriber<W>(
    log_dir: &Path,
    file_name: &str,
    console: W,
) -> Result<impl Subscriber + Send + Sync + 'static>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Rotation::NEVER with no suffix writes to exactly `<log_dir>/<file_name>`, opened for append.
    let file = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)?;

    let console_layer = fmt::layer()
        .with_writer(console)
        .with_ansi(true)
        .with_target(false);

    let file_layer = fmt::layer().json().with_writer(file).with_ansi(false);

    let filter = Targets::new()
        .with_target(env!("CARGO_CRATE_NAME"), Level::DEBUG)
        .with_default(Level::INFO);

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer))
}
