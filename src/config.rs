//! Hard-coded shell settings and template lookup.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, ShellError};

pub const WINDOW_TITLE: &str = "webview-shell";
pub const WINDOW_WIDTH: f64 = 400.0;
pub const WINDOW_HEIGHT: f64 = 320.0;
pub const LOG_FILE_NAME: &str = "log";

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Template locations relative to the executable's directory, tried in order.
    pub template_candidates: Vec<PathBuf>,
    /// Directory holding the log file. Relative paths resolve against the working directory.
    pub log_dir: PathBuf,
    pub log_file_name: String,
}

impl ShellConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            template_candidates: vec![
                Path::new("templates").join("index.html"),
                Path::new("..").join("templates").join("index.html"),
            ],
            log_dir: PathBuf::from("."),
            log_file_name: LOG_FILE_NAME.to_owned(),
        }
    }

    /// Resolves the template next to the running executable.
    pub fn template_url(&self) -> Result<Url> {
        let exe = std::env::current_exe().map_err(ShellError::CurrentExe)?;
        let base = exe.parent().unwrap_or_else(|| Path::new("."));
        self.template_url_in(base)
    }

    /// Resolves the first existing template candidate under `base` into a `file:` URL.
    pub fn template_url_in(&self, base: &Path) -> Result<Url> {
        let tried: Vec<PathBuf> = self
            .template_candidates
            .iter()
            .map(|candidate| base.join(candidate))
            .collect();

        let Some(found) = tried.iter().find(|path| path.is_file()) else {
            return Err(ShellError::TemplateNotFound { tried });
        };

        // Url::from_file_path rejects relative paths and keeps `..` segments as-is.
        let absolute = found.canonicalize().unwrap_or_else(|_| found.clone());
        Url::from_file_path(&absolute).map_err(|()| ShellError::TemplateUrl(absolute))
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}
