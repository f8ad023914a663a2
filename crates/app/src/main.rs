//! Campus Viewer - Main Entry Point
//!
//! An interactive fly-through of the boat club campus. Keyboard input drives
//! the camera and opens or closes the gate and the front door; every frame
//! the scene is traversed and handed to the rendering backend.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use campus_core::Timer;
use campus_platform::Window;
use campus_renderer::{RecordingBackend, SceneState, Viewer};

use crate::config::AppConfig;

/// Frames between statistics log lines.
const STATS_INTERVAL: u64 = 300;

#[derive(Parser, Debug)]
#[command(name = "campus-viewer", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width, overriding the config file
    #[arg(long)]
    width: Option<u32>,

    /// Window height, overriding the config file
    #[arg(long)]
    height: Option<u32>,
}

struct App {
    config: AppConfig,
    window: Option<Window>,
    viewer: Option<Viewer>,
    state: SceneState,
    backend: RecordingBackend,
    timer: Timer,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let state = SceneState::new(&config.camera);
        Self {
            config,
            window: None,
            viewer: None,
            state,
            backend: RecordingBackend::new(),
            timer: Timer::new(),
        }
    }

    fn render(&mut self) {
        let dt = self.timer.delta_secs();
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        if self.window.as_ref().is_some_and(Window::is_minimized) {
            return;
        }

        let stats = viewer.tick(&mut self.state, dt, &mut self.backend);
        if !stats.is_balanced() {
            error!(stack = ?stats.stack, "Transform stack unbalanced after frame");
        }
        if stats.frame_index % STATS_INTERVAL == 0 {
            info!(
                frame = stats.frame_index,
                groups = stats.groups_drawn,
                failed = stats.groups_failed,
                draws = stats.draw_calls,
                pushes = stats.stack.pushes,
                pops = stats.stack.pops,
                fps = self.timer.average_fps(),
                "Frame statistics"
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match Window::new(event_loop, &self.config.window) {
            Ok(window) => {
                let viewer = Viewer::new(&self.config.viewer_config(), window.aspect_ratio());
                info!("Initialization complete, entering main loop");
                self.viewer = Some(viewer);
                self.window = Some(window);
                self.timer.reset();
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                }
                if let Some(ref mut viewer) = self.viewer {
                    viewer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                debug!("Focus lost, releasing held keys");
                self.state.input.release_all();
            }
            WindowEvent::RedrawRequested => self.render(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.config.keys.handle_key(
                    &mut self.state.input,
                    event.physical_key,
                    event.state,
                    event.repeat,
                );
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!(
            frames = self.timer.frame_count(),
            fps = self.timer.average_fps(),
            "Viewer stopped"
        );
    }
}

fn main() -> Result<()> {
    // Initialize logging
    campus_core::init_logging();
    info!("Starting Campus Viewer");

    let cli = Cli::parse();
    let mut config =
        AppConfig::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    config.validate().context("Invalid configuration")?;

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create app and run
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from(["campus-viewer", "--config", "campus.toml", "--width", "800"]);
        assert_eq!(cli.config, Some(PathBuf::from("campus.toml")));
        assert_eq!(cli.width, Some(800));
        assert_eq!(cli.height, None);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
