//! Click Burst entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use click_burst::InitError;
    use click_burst::driver::Animation;
    use click_burst::platform::Viewport;
    use click_burst::renderer::{RenderState, VertexCanvas};

    const CANVAS_ID: &str = "canvas";

    /// App instance holding all state
    struct App {
        animation: Animation,
        canvas: VertexCanvas,
        render_state: RenderState,
    }

    impl App {
        /// Advance, paint and present one frame. Returns whether to continue.
        fn frame(&mut self) -> bool {
            if !self.animation.frame(&mut self.canvas) {
                return false;
            }
            match self.render_state.render(&self.canvas) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            true
        }
    }

    /// Logical viewport size from the window, falling back to the canvas box
    fn viewport_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.client_width() as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.client_height() as f64);
        (width as f32, height as f32)
    }

    pub async fn run() -> Result<(), InitError> {
        log::info!("Click Burst starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::MissingElement(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID.to_string()))?;

        // Size the backing store in device pixels; drawing stays in CSS pixels
        let (width, height) = viewport_size(&window, &canvas);
        let viewport = Viewport::new(width, height, window.device_pixel_ratio() as f32);
        let (physical_w, physical_h) = viewport.physical_size();
        canvas.set_width(physical_w);
        canvas.set_height(physical_h);

        log::info!(
            "Canvas {}x{} logical, {}x{} physical (dpr {})",
            viewport.width,
            viewport.height,
            physical_w,
            physical_h,
            viewport.scale
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, viewport).await?;

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            animation: Animation::new(seed),
            canvas: VertexCanvas::default(),
            render_state,
        }));

        log::info!("Animation initialized with seed: {}", seed);

        setup_click_handler(&canvas, app.clone());
        setup_teardown(&window, app.clone());

        request_animation_frame(app);

        log::info!("Click Burst running!");
        Ok(())
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            app.borrow_mut()
                .animation
                .click(event.page_x() as f32, event.page_y() as f32);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Stop the loop when the page goes away
    fn setup_teardown(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().animation.stop();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop ended");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        let keep_going = app.borrow_mut().frame();
        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    if let Err(e) = wasm_app::run().await {
        log::error!("Click Burst failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Click Burst (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed);

    let summary = headless::run(seed);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless host: one scripted click, frames until the scene drains, then stop
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use click_burst::driver::Animation;
    use click_burst::platform::Viewport;
    use click_burst::renderer::RecordingCanvas;
    use click_burst::sim::SceneSnapshot;

    /// Safety net for the drain loop
    const MAX_FRAMES: u32 = 10_000;

    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub spawned: usize,
        pub frames: u32,
        pub peak_draw_calls: usize,
        pub drained: bool,
        pub final_state: SceneSnapshot,
    }

    pub fn run(seed: u64) -> RunSummary {
        let viewport = Viewport::new(800.0, 600.0, 1.0);
        let mut animation = Animation::new(seed);
        let mut canvas = RecordingCanvas::default();

        let spawned = animation.click(viewport.width / 2.0, viewport.height / 2.0);
        log::info!("Seed {}: clicked center, {} particles", seed, spawned);

        let mut frames = 0;
        let mut peak_draw_calls = 0;
        while !animation.is_idle() && frames < MAX_FRAMES {
            if !animation.frame(&mut canvas) {
                break;
            }
            frames += 1;
            peak_draw_calls = peak_draw_calls.max(canvas.fills() + canvas.strokes());
        }

        let drained = animation.is_idle();
        if !drained {
            log::warn!("Scene still live after {} frames", frames);
        }
        animation.stop();

        RunSummary {
            spawned,
            frames,
            peak_draw_calls,
            drained,
            final_state: animation.snapshot(),
        }
    }
}
