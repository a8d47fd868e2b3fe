//! Bouncy Balls entry point
//!
//! A ball bouncing inside a rectangular boundary: one physics step and one
//! rendered frame per loop iteration, capped at 60 Hz.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use bounce_math::Vec2;
use bounce_physics::World;
use bounce_render::{world_vertices, RenderState};

use bouncyballs::config::AppConfig;
use bouncyballs::scene;
use bouncyballs::systems::{FrameClock, SimulationSystem};

/// Main application state
///
/// Owns the physics world, the render surface, the clock and the running
/// flag; passed by exclusive ownership to the event loop.
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    world: World,
    simulation: SimulationSystem,
    clock: FrameClock,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let seed = config.scene.seed.unwrap_or_else(wall_clock_seed);
        log::info!("World seed: {}", seed);

        let (world, _ball) = scene::build_world(&config.physics, &config.scene, seed);
        log::info!("World ready with {} shapes", world.shape_count());

        let simulation =
            SimulationSystem::new(config.physics.timestep, config.physics.steps_per_frame);
        let clock = FrameClock::new(config.rendering.target_fps);

        Self {
            config,
            window: None,
            render_state: None,
            world,
            simulation,
            clock,
        }
    }
}

/// Millisecond wall-clock seed for runs without a configured seed
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width as f64,
                    self.config.window.height as f64,
                ))
                .with_resizable(false);

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let world_extent = Vec2::new(self.config.window.width, self.config.window.height);
            let render_state = pollster::block_on(RenderState::new(window.clone(), world_extent));

            window.request_redraw();
            self.window = Some(window);
            self.render_state = Some(render_state);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Checked at the top of the next frame; the frame already
                // in flight still renders
                self.simulation.handle_close();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        self.simulation.handle_close();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.simulation.is_running() {
                    event_loop.exit();
                    return;
                }

                // 1. Advance the world by the fixed timestep(s)
                self.simulation.advance(&mut self.world);

                // 2. Clear, draw every shape, present
                let vertices = world_vertices(&self.world, self.config.rendering.circle_segments);
                if let Some(render_state) = &mut self.render_state {
                    match render_state.render(&vertices, self.config.rendering.background_color) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let (w, h) = render_state.size;
                            render_state.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => log::warn!("Surface error: {:?}", e),
                    }
                }

                // 3. Block until the frame budget has elapsed, show FPS
                let fps = self.clock.tick();
                if let Some(window) = &self.window {
                    window.set_title(&format!("{} - fps: {:.1}", self.config.window.title, fps));
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Bouncy Balls");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
