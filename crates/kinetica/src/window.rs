//! Window management via winit.
//!
//! Implements [`winit::application::ApplicationHandler`] to drive the event
//! loop: window creation, resize, and one render per redraw.

use std::sync::Arc;

use anyhow::Context as _;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::ecs::Registry;
use crate::exit::AppExit;
use crate::render::{ClearColor, GpuContext, collect_draw_list, render_frame};

/// The application state that winit drives.
pub(crate) struct WinitApp {
    registry: Registry,
    clear_color: ClearColor,
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    exit: AppExit,
}

impl WinitApp {
    pub fn new(registry: Registry, clear_color: ClearColor, title: String, size: (u32, u32)) -> Self {
        Self {
            registry,
            clear_color,
            title,
            size,
            window: None,
            gpu: None,
            exit: AppExit::Success,
        }
    }

    /// How the event loop ended.
    pub fn exit_code(&self) -> AppExit {
        self.exit
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, exit: AppExit, err: anyhow::Error) {
        log::error!("{err:#}");
        self.exit = exit;
        event_loop.exit();
    }

    fn is_minimized(&self) -> bool {
        self.window
            .as_ref()
            .is_some_and(|w| is_hidden(w.is_minimized(), w.inner_size()))
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let draw_list = collect_draw_list(&self.registry);
        match render_frame(gpu, self.clear_color, &draw_list) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory!");
                self.exit = AppExit::RenderFailure;
                event_loop.exit();
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
            }
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.size;
        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(width as f64, height as f64))
            .with_resizable(true);
        let window = match event_loop.create_window(attrs).context("failed to create window") {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, AppExit::InitializationFailed, err),
        };

        match GpuContext::new(window.clone()) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(err) => return self.fail(event_loop, AppExit::GpuBackendError, err),
        }

        log::info!("Opened window \"{}\"", self.title);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size.width, size.height);
                }
                self.request_redraw();
            }

            WindowEvent::Occluded(false) => self.request_redraw(),

            // While minimized the loop goes idle until a resize or un-occlude.
            WindowEvent::RedrawRequested => {
                if self.is_minimized() {
                    return;
                }
                self.redraw(event_loop);
                self.request_redraw();
            }

            _ => {}
        }
    }
}

/// Whether a window with this state has nothing visible to draw into.
fn is_hidden(minimized: Option<bool>, size: PhysicalSize<u32>) -> bool {
    minimized == Some(true) || size.width == 0 || size.height == 0
}
