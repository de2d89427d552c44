//! A windowing shell for rmenu, on top of [`winit`].
//!
//! [`run`] opens a borderless, always-on-top window, draws the [`Menu`] into
//! it with [`rmenu_tiny_skia`] and feeds it pointer events until a leaf is
//! selected or the menu is dismissed.
//!
//! A [`conversion`] module is available for users that decide to implement
//! a custom event loop.
//!
//! [`winit`]: https://github.com/rust-windowing/winit
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use winit;

pub mod conversion;

mod error;
mod settings;

pub use error::Error;
pub use settings::Settings;

use rmenu_core::{Action, Event, Menu, Size, Status};
use rmenu_tiny_skia::{Renderer, Surface};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use std::sync::Arc;

/// Runs the [`Menu`] in a new window until the session is over.
///
/// A menu whose window goes away without a selection ends as
/// [`Status::Dismissed`].
pub fn run(menu: Menu, settings: Settings) -> Result<Status, Error> {
    let event_loop = EventLoop::new().map_err(Error::EventLoopCreationFailed)?;

    let mut renderer = Renderer::new(settings.font.clone());

    if let Some(texture) = &settings.texture {
        renderer = renderer.with_texture(texture);
    }

    let mut runner = Runner {
        menu,
        renderer,
        settings,
        window: None,
        scale: 1,
        pointer: conversion::Pointer::default(),
        is_focused: false,
        error: None,
    };

    event_loop
        .run_app(&mut runner)
        .map_err(Error::EventLoopFailed)?;

    if let Some(error) = runner.error {
        return Err(error);
    }

    runner.menu.dismiss();

    Ok(runner.menu.status().clone())
}

fn window_attributes(settings: &Settings, size: Size) -> WindowAttributes {
    let attributes = Window::default_attributes()
        .with_title(settings.title.clone())
        .with_inner_size(LogicalSize::new(size.width.max(1), size.height.max(1)))
        .with_decorations(false)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnTop);

    // Either backend may be picked at runtime
    #[cfg(all(target_os = "linux", feature = "wayland"))]
    let attributes = winit::platform::wayland::WindowAttributesExtWayland::with_name(
        attributes,
        settings.app_id.clone(),
        "",
    );

    #[cfg(all(target_os = "linux", feature = "x11"))]
    let attributes = winit::platform::x11::WindowAttributesExtX11::with_name(
        attributes,
        settings.app_id.clone(),
        "",
    );

    attributes
}

struct Runner {
    menu: Menu,
    renderer: Renderer,
    settings: Settings,
    window: Option<(Arc<Window>, Surface<Arc<Window>>)>,
    scale: u32,
    pointer: conversion::Pointer,
    is_focused: bool,
    error: Option<Error>,
}

impl Runner {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        let size = self.menu.layout(&mut self.renderer);

        let attributes = window_attributes(&self.settings, size);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(Error::WindowCreationFailed)?,
        );

        let surface = Surface::new(window.clone()).map_err(Error::GraphicsCreationFailed)?;

        self.scale = self.settings.scale_for(window.scale_factor());

        log::debug!(
            "Opened {}x{} menu window at scale {}",
            size.width,
            size.height,
            self.scale
        );

        self.window = Some((window, surface));

        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), Error> {
        let Some((window, surface)) = &mut self.window else {
            return Ok(());
        };

        let pixmap = self
            .renderer
            .draw(&mut self.menu, self.scale)
            .map_err(Error::Presentation)?;

        let _ = window.request_inner_size(PhysicalSize::new(pixmap.width(), pixmap.height()));

        window.pre_present_notify();
        surface.present(&pixmap).map_err(Error::Presentation)
    }

    fn update(&mut self, event_loop: &ActiveEventLoop, event: Event) {
        match self.menu.update(event) {
            Action::Idle => {}
            Action::Redraw => {
                if let Some((window, _)) = &self.window {
                    window.request_redraw();
                }
            }
            Action::Exit => event_loop.exit(),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{error}");

        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for Runner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.open(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if event_loop.exiting() {
            return;
        }

        match event {
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.redraw() {
                    self.fail(event_loop, error);
                }
            }
            WindowEvent::Focused(true) => {
                self.is_focused = true;
            }
            WindowEvent::Focused(false) if self.is_focused => {
                log::debug!("Focus lost, dismissing menu");

                self.menu.dismiss();
                event_loop.exit();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let scale = self.settings.scale_for(scale_factor);

                if scale != self.scale {
                    self.scale = scale;

                    if let Some((window, _)) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            event => {
                if let Some(event) = self.pointer.convert(&event, self.scale) {
                    self.update(event_loop, event);
                }
            }
        }
    }
}
