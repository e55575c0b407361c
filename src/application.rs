use tracing::{debug, info};
use url::Url;

use crate::config::ShellConfig;
use crate::error::Result;

/// A native window the application can track.
pub trait ShellWindow {
    type Id: Copy + Eq + std::fmt::Debug;

    fn id(&self) -> Self::Id;
    fn show(&self);
}

/// The windowing runtime the application drives.
pub trait WindowHost {
    type Window: ShellWindow;

    /// Builds a hidden window that loads `url` and later reports it is ready to show.
    fn create_window(&mut self, url: &Url, config: &ShellConfig) -> Result<Self::Window>;

    /// Where the HTML template lives for this host.
    fn template_url(&self, config: &ShellConfig) -> Result<Url> {
        config.template_url()
    }

    fn quit(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// macOS apps stay resident with no windows until explicitly quit.
    #[must_use]
    pub fn quits_when_all_windows_closed(self) -> bool {
        self != Self::MacOs
    }
}

/// A lifecycle signal raised by the windowing runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<Id> {
    Ready,
    Activate,
    ReadyToShow(Id),
    Close(Id),
    AllWindowsClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    NoWindow,
    WindowOpen,
}

pub struct TrackedWindow<W> {
    pub handle: W,
    shown: bool,
}

impl<W> TrackedWindow<W> {
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

pub struct Application<W> {
    platform: Platform,
    config: ShellConfig,
    window: Option<TrackedWindow<W>>,
}

impl<W: ShellWindow> Application<W> {
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        Self::with_platform(config, Platform::current())
    }

    #[must_use]
    pub fn with_platform(config: ShellConfig, platform: Platform) -> Self {
        Self {
            platform,
            config,
            window: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        if self.window.is_some() {
            LifecycleState::WindowOpen
        } else {
            LifecycleState::NoWindow
        }
    }

    #[must_use]
    pub fn window(&self) -> Option<&TrackedWindow<W>> {
        self.window.as_ref()
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Routes a signal to its handler.
    pub fn handle<H>(&mut self, signal: Signal<W::Id>, host: &mut H) -> Result<()>
    where
        H: WindowHost<Window = W>,
    {
        match signal {
            Signal::Ready => self.on_ready(host)?,
            Signal::Activate => self.on_activate(host)?,
            Signal::ReadyToShow(id) => self.on_ready_to_show(id),
            Signal::Close(id) => self.on_close(id, host),
            Signal::AllWindowsClosed => self.on_all_windows_closed(host),
        }
        Ok(())
    }

    pub fn on_ready<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: WindowHost<Window = W>,
    {
        self.ensure_window(host)
    }

    pub fn on_activate<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: WindowHost<Window = W>,
    {
        self.ensure_window(host)
    }

    pub fn on_ready_to_show(&mut self, id: W::Id) {
        let Some(tracked) = self.window.as_mut() else {
            return;
        };
        if tracked.handle.id() != id || tracked.shown {
            return;
        }

        debug!("Ready -> showing window");
        tracked.shown = true;
        tracked.handle.show();
    }

    pub fn on_close<H>(&mut self, id: W::Id, host: &mut H)
    where
        H: WindowHost<Window = W>,
    {
        if !self.window.as_ref().is_some_and(|w| w.handle.id() == id) {
            return;
        }

        debug!("Exit -> close window");
        // Dropping the handle destroys the native window.
        self.window = None;
        self.on_all_windows_closed(host);
    }

    pub fn on_all_windows_closed<H>(&mut self, host: &mut H)
    where
        H: WindowHost<Window = W>,
    {
        if self.platform.quits_when_all_windows_closed() {
            info!("Quitting app...");
            host.quit();
        } else {
            debug!("All windows closed, staying resident");
        }
    }

    fn ensure_window<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: WindowHost<Window = W>,
    {
        if self.window.is_some() {
            return Ok(());
        }

        debug!("App finish loading, starting GUI...");
        let url = host.template_url(&self.config)?;
        let handle = host.create_window(&url, &self.config)?;
        self.window = Some(TrackedWindow {
            handle,
            shown: false,
        });
        Ok(())
    }
}
