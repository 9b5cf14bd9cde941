//! Brick Hop entry point
//!
//! Opens the window, then runs one tick and one render per frame until the world
//! terminates.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use brick_hop::platform::{FrameLimiter, KeyboardState};
use brick_hop::renderer::{RenderState, world_vertices};
use brick_hop::sim::{EndReason, GameEvent, WorldState, tick};
use brick_hop::{Settings, SettingsError};

/// Game instance holding all state
struct Game {
    settings: Settings,
    state: WorldState,
    keyboard: KeyboardState,
    limiter: FrameLimiter,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Set when startup failed, so main can exit non-zero
    failed: bool,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let state = WorldState::new(&settings);
        let limiter = FrameLimiter::new(settings.tick_rate);
        Self {
            settings,
            state,
            keyboard: KeyboardState::new(),
            limiter,
            window: None,
            render_state: None,
            failed: false,
        }
    }

    /// One loop iteration: tick, report, render
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.is_running() {
            event_loop.exit();
            return;
        }

        let input = self.keyboard.snapshot();
        tick(&mut self.state, &input);

        if self.settings.log_events {
            for event in &self.state.events {
                log_event(event, self.state.time_ticks);
            }
        }

        if !self.state.is_running() {
            match self.state.end_reason {
                Some(EndReason::Caught { agent_id }) => log::info!(
                    "Game over: caught by agent {} after {} ticks",
                    agent_id,
                    self.state.time_ticks
                ),
                Some(EndReason::Quit) | None => {
                    log::info!("Quit after {} ticks", self.state.time_ticks)
                }
            }
            event_loop.exit();
            return;
        }

        self.render(event_loop);
    }

    /// Render the current frame
    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let vertices = world_vertices(&self.state);
        match render_state.render(&vertices) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                self.failed = true;
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn log_event(event: &GameEvent, time_ticks: u64) {
    match event {
        GameEvent::Jumped => log::debug!("[{}] jump", time_ticks),
        GameEvent::Landed { obstacle_id } => {
            log::trace!("[{}] landed on obstacle {}", time_ticks, obstacle_id)
        }
        GameEvent::Stomped { agent_id } => {
            log::info!("[{}] stomped agent {}", time_ticks, agent_id)
        }
        GameEvent::Caught { agent_id } => {
            log::info!("[{}] caught by agent {}", time_ticks, agent_id)
        }
        GameEvent::Quit => log::debug!("[{}] quit requested", time_ticks),
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.settings.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.settings.world_width,
                self.settings.world_height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                self.failed = true;
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(RenderState::new(window.clone())) {
            Ok(render_state) => self.render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                self.failed = true;
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.keyboard.process_event(&event);

        match event {
            // The keyboard state now carries the quit request; run the tick
            // that consumes it right away
            WindowEvent::CloseRequested => self.step(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.step(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // The only wait point in the loop
        self.limiter.wait();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_settings(path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => Settings::load(path),
        None => {
            log::info!("Using default settings");
            Ok(Settings::default())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os().skip(1);
    let first = args.next();

    if first.as_deref() == Some(OsStr::new("--print-settings")) {
        return match Settings::default().to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let settings = match load_settings(first.map(PathBuf::from)) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Brick Hop starting ({}x{} @ {} ticks/s)",
        settings.world_width,
        settings.world_height,
        settings.tick_rate
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(settings);
    if let Err(e) = event_loop.run_app(&mut game) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    if game.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
