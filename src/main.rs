//! Window Sphere entry point
//!
//! Handles platform-specific initialization and runs the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use window_sphere::motion::{MotionState, TickInput, TickOutcome, spin, tick};
    use window_sphere::renderer::{Camera, SphereRenderState, wire_sphere};
    use window_sphere::{DemoError, FrameClock, SceneConfig, ScenePreset, Settings};

    const CANVAS_ID: &str = "canvas";

    /// Demo instance holding all state
    struct Demo {
        settings: Settings,
        scene: SceneConfig,
        camera: Camera,
        motion: MotionState,
        clock: FrameClock,
        render_state: Option<SphereRenderState>,
        canvas: HtmlCanvasElement,
        last_fps_log: f64,
    }

    impl Demo {
        fn new(settings: Settings, canvas: HtmlCanvasElement, window_pos: Vec2) -> Self {
            let scene = SceneConfig::from_settings(&settings);
            let (w, h) = viewport_size();
            Self {
                camera: Camera::for_scene(&scene, w, h),
                settings,
                scene,
                motion: MotionState::new(window_pos),
                clock: FrameClock::new(),
                render_state: None,
                canvas,
                last_fps_log: 0.0,
            }
        }

        /// Run one motion tick and spin the sphere
        fn update(&mut self, elapsed: f32) {
            if let Some(window) = window_position() {
                let input = TickInput { window, elapsed };
                let outcome = tick(&mut self.motion, &input, &self.scene.motion);
                if outcome == TickOutcome::Moved {
                    log::debug!(
                        "Sphere at ({:.1}, {:.1})",
                        self.motion.pose.position.x,
                        self.motion.pose.position.y
                    );
                }
            }
            spin(&mut self.motion.pose, self.scene.rotation_step);
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.camera, &self.motion.pose, &self.scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn log_fps(&mut self, time: f64) {
            if time - self.last_fps_log >= 5000.0 {
                self.last_fps_log = time;
                log::debug!("FPS: {}", self.clock.fps());
            }
        }

        /// Suppress motion and match canvas, surface and camera to the window.
        /// Returns the debounce token.
        fn begin_resize(&mut self) -> u32 {
            let token = self.motion.resize.begin();

            let (w, h) = viewport_size();
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let width = (w as f64 * dpr) as u32;
            let height = (h as f64 * dpr) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
            self.camera.resize(w, h);

            log::debug!("Resize {}x{} (token {})", width, height, token);
            token
        }

        fn finish_resize(&mut self, token: u32) {
            let Some(screen) = window_position() else {
                return;
            };
            let MotionState {
                resize, tracker, ..
            } = &mut self.motion;
            if resize.finish(token, tracker, screen) {
                log::debug!("Resize settled, motion resumed");
            }
        }

        fn apply_preset(&mut self, preset: ScenePreset) {
            if self.settings.preset == preset {
                return;
            }
            self.settings.preset = preset;
            self.settings.save();

            self.scene = SceneConfig::from_settings(&self.settings);
            let (w, h) = viewport_size();
            self.camera = Camera::for_scene(&self.scene, w, h);
            if let Some(ref mut render_state) = self.render_state {
                let mesh = wire_sphere(self.scene.sphere_radius, self.scene.sectors, self.scene.stacks);
                render_state.set_mesh(&mesh);
            }
            self.recenter();
            log::info!("Switched to {} scene", preset.as_str());
        }

        fn recenter(&mut self) {
            let screen = window_position().unwrap_or(self.motion.tracker.current);
            self.motion.recenter(screen);
        }
    }

    /// Window position on screen, if the browser exposes it
    fn window_position() -> Option<Vec2> {
        let window = web_sys::window()?;
        let x = window.screen_x().ok()?;
        let y = window.screen_y().ok()?;
        Some(Vec2::new(x as f32, y as f32))
    }

    /// Inner window size in CSS pixels
    fn viewport_size() -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (1.0, 1.0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        (w as f32, h as f32)
    }

    pub async fn run() -> Result<(), DemoError> {
        log::info!("Window Sphere starting...");

        let window = web_sys::window().ok_or(DemoError::NoWindow)?;
        let document = window.document().ok_or(DemoError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| DemoError::CanvasMissing(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| DemoError::NotACanvas(CANVAS_ID.to_string()))?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let (css_w, css_h) = viewport_size();
        let width = (css_w as f64 * dpr) as u32;
        let height = (css_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let start_pos = window_position().unwrap_or(Vec2::ZERO);
        let demo = Rc::new(RefCell::new(Demo::new(settings, canvas.clone(), start_pos)));

        log::info!(
            "Scene: {}, window at ({}, {})",
            demo.borrow().scene.preset.as_str(),
            start_pos.x,
            start_pos.y
        );

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let mesh = {
            let d = demo.borrow();
            wire_sphere(d.scene.sphere_radius, d.scene.sectors, d.scene.stacks)
        };
        let render_state = SphereRenderState::new(surface, &adapter, width, height, &mesh).await?;
        demo.borrow_mut().render_state = Some(render_state);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_resize_handler(demo.clone());
        setup_keyboard(demo.clone());

        // Start render loop
        request_animation_frame(demo);

        log::info!("Window Sphere running!");
        Ok(())
    }

    fn setup_resize_handler(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (token, debounce_ms) = {
                let mut d = demo.borrow_mut();
                (d.begin_resize(), d.settings.resize_debounce_ms)
            };

            // Superseded timers are ignored by the resize gate
            let demo = demo.clone();
            let timeout = Closure::once_into_js(move || {
                demo.borrow_mut().finish_resize(token);
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    timeout.unchecked_ref(),
                    debounce_ms as i32,
                );
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut d = demo.borrow_mut();
            match event.key().as_str() {
                "1" => d.apply_preset(ScenePreset::Basic),
                "2" => d.apply_preset(ScenePreset::Tracking),
                "0" => {
                    d.recenter();
                    log::info!("Sphere recentered");
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(demo, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>, time: f64) {
        {
            let mut d = demo.borrow_mut();
            let elapsed = d.clock.advance(time);
            d.update(elapsed);
            d.render();
            d.log_fps(time);
        }

        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_demo::run().await {
        log::error!("Window Sphere failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Window Sphere (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    simulate_drag();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drag a virtual window across the screen and report the sphere's path
#[cfg(not(target_arch = "wasm32"))]
fn simulate_drag() {
    use glam::Vec2;
    use window_sphere::motion::{MotionState, TickInput, TickOutcome, spin, tick};
    use window_sphere::{FrameClock, SceneConfig, ScenePreset, Settings};

    let settings = Settings {
        preset: ScenePreset::Tracking,
        ..Settings::load()
    };
    let scene = SceneConfig::from_settings(&settings);
    let start = Vec2::new(200.0, 150.0);
    let mut state = MotionState::new(start);
    let mut clock = FrameClock::new();

    println!("\nSimulating a window drag (damping {:.2})...", scene.motion.damping);

    // 30 frames dragging right and down, then 10 frames held still
    for frame in 0..40u32 {
        let elapsed = clock.advance(frame as f64 * 1000.0 / 60.0);
        let window = start + Vec2::new(4.0, 2.0) * frame.min(30) as f32;
        let outcome = tick(&mut state, &TickInput { window, elapsed }, &scene.motion);
        spin(&mut state.pose, scene.rotation_step);

        if outcome == TickOutcome::Moved || frame % 10 == 0 {
            log::info!(
                "frame {:>2}: window=({:.0}, {:.0}) {:?} sphere=({:.2}, {:.2})",
                frame,
                window.x,
                window.y,
                outcome,
                state.pose.position.x,
                state.pose.position.y
            );
        }
    }

    println!(
        "Final sphere position: ({:.2}, {:.2})",
        state.pose.position.x, state.pose.position.y
    );
}
