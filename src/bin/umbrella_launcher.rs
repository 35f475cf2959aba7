//! Umbrella Launcher - native window
//!
//! Run with: `cargo run --bin umbrella_launcher [config.json]`
//!
//! Controls:
//! - Left mouse: grab the umbrella, drag to aim, release to launch
//! - R: Reset the round
//! - ESC: Exit
//!
//! Set `RUST_LOG=debug` for per-launch and per-hit logging.

#[cfg(not(target_arch = "wasm32"))]
mod app {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use glam::Vec2;
    use winit::application::ApplicationHandler;
    use winit::dpi::LogicalSize;
    use winit::event::{ElementState, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowAttributes, WindowId};

    use umbrella_launcher_engine::game::render::GpuRenderer;
    use umbrella_launcher_engine::game::{FrameRenderer, LauncherConfig, Session, SessionEvent};
    use umbrella_launcher_engine::input::{
        MouseButton, PointerTracker, surface_to_playfield,
    };
    use umbrella_launcher_engine::render::GpuContext;
    use umbrella_launcher_engine::timing::FixedRateClock;

    const WINDOW_TITLE: &str = "Umbrella Launcher";

    pub struct LauncherApp {
        window: Option<Arc<Window>>,
        renderer: Option<GpuRenderer>,
        session: Session,
        pointer: PointerTracker,
        clock: FixedRateClock,
        epoch: Instant,
    }

    impl LauncherApp {
        pub fn new(config: LauncherConfig) -> Self {
            let clock = FixedRateClock::from_hz(config.playfield.tick_hz);
            Self {
                window: None,
                renderer: None,
                session: Session::new(config),
                pointer: PointerTracker::new(),
                clock,
                epoch: Instant::now(),
            }
        }

        fn now(&self) -> f64 {
            self.epoch.elapsed().as_secs_f64()
        }

        fn initialize(&mut self, event_loop: &ActiveEventLoop) {
            let playfield = &self.session.config().playfield;
            let attrs = WindowAttributes::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(playfield.width, playfield.height));

            let window = match event_loop.create_window(attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            match GpuContext::new(Arc::clone(&window)) {
                Ok(gpu) => self.renderer = Some(GpuRenderer::new(gpu)),
                Err(e) => {
                    log::error!("Failed to initialize GPU: {e}");
                    event_loop.exit();
                    return;
                }
            }

            self.window = Some(window);
            self.clock.start(self.now());
            self.refresh_title();
        }

        /// Window size in physical pixels, as a vector.
        fn surface_size(&self) -> Vec2 {
            self.renderer
                .as_ref()
                .map(|r| {
                    let (w, h) = r.dimensions();
                    Vec2::new(w as f32, h as f32)
                })
                .unwrap_or(Vec2::ONE)
        }

        fn tick(&mut self) {
            self.session.tick();
            self.after_session_change();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        fn after_session_change(&mut self) {
            let events = self.session.drain_events();
            if events.is_empty() {
                return;
            }
            for event in &events {
                if *event == SessionEvent::Won {
                    println!("All boxes destroyed! Score: {}", self.session.score());
                }
            }
            self.refresh_title();
        }

        fn refresh_title(&self) {
            let Some(window) = &self.window else {
                return;
            };
            let status = self.session.status();
            let mut title = format!(
                "{WINDOW_TITLE} | Score: {} | Umbrellas: {}",
                self.session.score(),
                self.session.remaining()
            );
            if let Some(text) = status.text() {
                title.push_str(" | ");
                title.push_str(text);
            }
            window.set_title(&title);
        }

        fn render(&mut self) {
            let Some(renderer) = self.renderer.as_mut() else {
                return;
            };
            if let Err(e) = renderer.render(&self.session.frame()) {
                log::error!("Render error: {e:?}");
            }
        }
    }

    impl ApplicationHandler for LauncherApp {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_none() {
                self.initialize(event_loop);
            }
        }

        fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
            match event {
                WindowEvent::CloseRequested => event_loop.exit(),

                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state != ElementState::Pressed || event.repeat {
                        return;
                    }
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        PhysicalKey::Code(KeyCode::KeyR) => {
                            self.session.reset();
                            self.pointer.reset();
                            self.after_session_change();
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                        }
                        _ => {}
                    }
                }

                WindowEvent::CursorMoved { position, .. } => {
                    let point = surface_to_playfield(
                        Vec2::new(position.x as f32, position.y as f32),
                        self.surface_size(),
                        self.session.config().playfield.size(),
                    );
                    let pointer = self.pointer.cursor_moved(point);
                    self.session.handle_pointer(pointer);
                }

                WindowEvent::CursorLeft { .. } => self.pointer.cursor_left(),

                WindowEvent::MouseInput { button, state, .. } => {
                    let button = match button {
                        winit::event::MouseButton::Left => MouseButton::Left,
                        winit::event::MouseButton::Middle => MouseButton::Middle,
                        winit::event::MouseButton::Right => MouseButton::Right,
                        winit::event::MouseButton::Back => MouseButton::Other(3),
                        winit::event::MouseButton::Forward => MouseButton::Other(4),
                        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
                    };
                    if let Some(pointer) = self.pointer.button(button, state == ElementState::Pressed)
                    {
                        self.session.handle_pointer(pointer);
                        self.after_session_change();
                    }
                }

                WindowEvent::Resized(new_size) => {
                    if let Some(renderer) = self.renderer.as_mut() {
                        renderer.resize(new_size.width, new_size.height);
                    }
                }

                WindowEvent::RedrawRequested => self.render(),

                _ => {}
            }
        }

        fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
            if self.clock.poll(self.now()) {
                self.tick();
            }
            match self.clock.next_deadline() {
                Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(
                    self.epoch + Duration::from_secs_f64(deadline),
                )),
                None => event_loop.set_control_flow(ControlFlow::Wait),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use umbrella_launcher_engine::game::LauncherConfig;
    use winit::event_loop::{ControlFlow, EventLoop};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            LauncherConfig::load(&path)?
        }
        None => LauncherConfig::default(),
    };

    println!("===========================================");
    println!("   Umbrella Launcher");
    println!("===========================================");
    println!();
    println!("Controls:");
    println!("  Left mouse: Grab, drag to aim, release to launch");
    println!("  R: Reset round");
    println!("  ESC: Exit");
    println!();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = app::LauncherApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
