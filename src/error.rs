//! Error types for the shell

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("Template not found, tried: {}", display_paths(.tried))]
    TemplateNotFound { tried: Vec<PathBuf> },

    #[error("Template path cannot be turned into a file URL: {}", .0.display())]
    TemplateUrl(PathBuf),

    #[error("Native toolkit initialization failed: {0}")]
    Toolkit(String),

    #[error("Window creation failed: {0}")]
    Window(#[from] tao::error::OsError),

    #[error("Webview creation failed: {0}")]
    WebView(#[from] wry::Error),

    #[error("Cannot open log file: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),

    #[error("Logger setup failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
