//! Application builder and command-line driver.
//!
//! [`App`] owns the [`Registry`] for the open scene. Populate it through
//! [`App::registry_mut`], then call [`App::run`] to open the window.
//!
//! # Example
//!
//! ```ignore
//! use kinetica::prelude::*;
//!
//! let mut app = App::new("Kinetica");
//! let cube = app.registry_mut().create_entity();
//! app.registry_mut().insert_component(cube, Mesh::cube());
//! let exit = app.run();
//! ```

use std::path::Path;

use anyhow::Context as _;

use crate::cli::AppArgs;
use crate::ecs::Registry;
use crate::exit::AppExit;
use crate::render::ClearColor;
use crate::window::WinitApp;

/// The main application builder.
pub struct App {
    title: String,
    size: (u32, u32),
    clear_color: ClearColor,
    registry: Registry,
}

impl App {
    /// Create an app with the given window title and an empty scene.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            size: (1280, 720),
            clear_color: ClearColor::default(),
            registry: Registry::new(),
        }
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the viewport background color.
    pub fn clear_color(mut self, color: ClearColor) -> Self {
        self.clear_color = color;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Start the event loop and block until the window closes.
    pub fn run(self) -> AppExit {
        let event_loop = match winit::event_loop::EventLoop::new()
            .context("failed to create event loop")
        {
            Ok(event_loop) => event_loop,
            Err(err) => {
                log::error!("{err:#}");
                return AppExit::InitializationFailed;
            }
        };

        let mut app = WinitApp::new(self.registry, self.clear_color, self.title, self.size);

        if let Err(err) = event_loop.run_app(&mut app) {
            log::error!("Event loop error: {err}");
            return AppExit::RenderFailure;
        }
        app.exit_code()
    }
}

/// Run the application for parsed command-line arguments.
pub fn run_with_args(args: &AppArgs) -> AppExit {
    if let Some(dir) = &args.plugin_dir {
        if !dir.is_dir() {
            log::error!("Plugin directory '{}' does not exist", dir.display());
            return AppExit::PluginLoadError;
        }
        log::debug!("Plugin directory: {}", dir.display());
    }

    if let Err(exit) = check_files(&args.files) {
        return exit;
    }

    if args.headless {
        log::info!("Running in headless mode (not implemented yet)");
        return AppExit::Success;
    }

    App::new("Kinetica").run()
}

fn check_files(files: &[impl AsRef<Path>]) -> Result<(), AppExit> {
    for file in files {
        let file = file.as_ref();
        if !file.is_file() {
            log::error!("Cannot open '{}': no such file", file.display());
            return Err(AppExit::FileAccessError);
        }
        log::info!("Queued '{}' (document loading is not implemented yet)", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(extra: &[&str]) -> AppArgs {
        AppArgs::parse_or_exit(std::iter::once("kinetica").chain(extra.iter().copied()))
            .unwrap()
    }

    #[test]
    fn headless_exits_successfully() {
        assert_eq!(run_with_args(&args(&["--headless"])), AppExit::Success);
    }

    #[test]
    fn missing_plugin_dir_fails() {
        let exit = run_with_args(&args(&["--headless", "--plugin-dir=/definitely/not/here"]));
        assert_eq!(exit, AppExit::PluginLoadError);
    }

    #[test]
    fn existing_plugin_dir_is_accepted() {
        let dir = std::env::temp_dir();
        let flag = format!("--plugin-dir={}", dir.display());
        assert_eq!(run_with_args(&args(&["--headless", flag.as_str()])), AppExit::Success);
    }

    #[test]
    fn missing_file_fails() {
        let exit = run_with_args(&args(&["--headless", "/definitely/not/here.kin"]));
        assert_eq!(exit, AppExit::FileAccessError);
    }

    #[test]
    fn existing_file_is_queued() {
        let file = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert_eq!(check_files(&[file]), Ok(()));
    }

    #[test]
    fn builder_exposes_registry() {
        let mut app = App::new("test").size(640, 480);
        let e = app.registry_mut().create_entity();
        assert!(app.registry().is_alive(e));
    }
}
