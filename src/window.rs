use tao::{
    dpi::LogicalSize,
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder, WindowId},
};
use tracing::error;
use url::Url;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::application::{Application, ShellWindow, Signal, WindowHost};
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};

/// A custom event type for the tao event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The webview inside this window finished loading its page.
    ReadyToShow(WindowId),
}

/// A top-level window with a webview filling its client area.
pub struct NativeWindow {
    // Dropped before `window`: the webview lives inside it.
    _webview: WebView,
    window: Window,
}

impl ShellWindow for NativeWindow {
    type Id = WindowId;

    fn id(&self) -> WindowId {
        self.window.id()
    }

    fn show(&self) {
        self.window.set_visible(true);
    }
}

/// The event loop seen from inside one callback.
struct Host<'a> {
    target: &'a EventLoopWindowTarget<ShellEvent>,
    proxy: &'a EventLoopProxy<ShellEvent>,
    control_flow: &'a mut ControlFlow,
}

impl WindowHost for Host<'_> {
    type Window = NativeWindow;

    fn create_window(&mut self, url: &Url, config: &ShellConfig) -> Result<NativeWindow> {
        // Hidden until the page has loaded, so no blank frame is ever shown.
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_decorations(true)
            .with_resizable(true)
            .with_visible(false)
            .build(self.target)?;

        let id = window.id();
        let proxy = self.proxy.clone();
        let webview = webview_builder(&window)?
            .with_url(url.as_str())
            .with_on_page_load_handler(move |event, _| {
                if let PageLoadEvent::Finished = event {
                    // Only fails once the event loop has shut down.
                    proxy.send_event(ShellEvent::ReadyToShow(id)).ok();
                }
            })
            .build()?;

        Ok(NativeWindow {
            _webview: webview,
            window,
        })
    }

    fn quit(&mut self) {
        *self.control_flow = ControlFlow::Exit;
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
#[allow(clippy::unnecessary_wraps)]
fn webview_builder(window: &Window) -> Result<WebViewBuilder<'_>> {
    Ok(WebViewBuilder::new(window))
}

/// Webkit on Linux is a GTK widget; it goes into the window's container, which
/// works on both X11 and Wayland sessions.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn webview_builder(window: &Window) -> Result<WebViewBuilder<'_>> {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;

    let vbox = window
        .default_vbox()
        .ok_or_else(|| ShellError::Toolkit("window has no GTK container".to_owned()))?;
    Ok(WebViewBuilder::new_gtk(vbox))
}

/// Maps an event-loop event onto a lifecycle signal.
fn signal(event: &Event<'_, ShellEvent>) -> Option<Signal<WindowId>> {
    match event {
        Event::NewEvents(StartCause::Init) => Some(Signal::Ready),
        Event::Resumed => Some(Signal::Activate),
        // Dock icon clicked.
        #[cfg(target_os = "macos")]
        Event::Reopen { .. } => Some(Signal::Activate),
        Event::UserEvent(ShellEvent::ReadyToShow(window_id)) => {
            Some(Signal::ReadyToShow(*window_id))
        }
        Event::WindowEvent {
            window_id, event, ..
        } => window_signal(*window_id, event),
        _ => None,
    }
}

fn window_signal(window_id: WindowId, event: &WindowEvent<'_>) -> Option<Signal<WindowId>> {
    matches!(event, WindowEvent::CloseRequested).then_some(Signal::Close(window_id))
}

pub fn run(config: ShellConfig) -> Result<()> {
    let mut event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();
    let mut application = Application::<NativeWindow>::new(config);
    let mut failure: Option<ShellError> = None;

    event_loop.run_return(|event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        let Some(signal) = signal(&event) else {
            return;
        };
        let mut host = Host {
            target,
            proxy: &proxy,
            control_flow: &mut *control_flow,
        };

        if let Err(e) = application.handle(signal, &mut host) {
            error!("{e}");
            failure = Some(e);
            *control_flow = ControlFlow::Exit;
        }
    });

    failure.map_or(Ok(()), Err)
}
