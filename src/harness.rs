//! Sketch harness and render loop.
//!
//! This module provides the main event loop and the [`Sketch`] contract. A
//! sketch is a scene that knows how to resize, render one frame, and release
//! its resources; the harness owns everything around it: window and context
//! creation, fixed playback configuration, frame pacing, playhead
//! computation, and teardown.
//!
//! # Lifecycle
//!
//! 1. `run()` builds the event loop and window and initializes the [`Context`]
//! 2. the constructor builds the sketch against the ready context
//! 3. `resize` is dispatched for the initial size and every viewport change
//! 4. `render` is invoked per animation frame with playhead and time
//! 5. `unload` runs once when the window closes

use std::sync::Arc;

use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::Window,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::context::Context;

/// Fixed playback configuration for one sketch run.
///
/// These are constants of a sketch, not runtime flags: the defaults are the
/// settings both shipped sketches use.
pub struct SketchConfig {
    /// Output dimensions in logical pixels.
    pub dimensions: [u32; 2],
    pub fps: f64,
    /// Loop duration in seconds; the playhead wraps at this boundary.
    pub duration: f64,
    /// When false the sketch renders a single frame at playhead 0.
    pub animate: bool,
    /// Maps to a 4x multisampled color target.
    pub antialias: bool,
    pub clear_colour: wgpu::Color,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            dimensions: [512, 512],
            fps: 24.0,
            duration: 4.0,
            animate: true,
            antialias: true,
            // 95 % gray, linearised for the sRGB surface.
            clear_colour: wgpu::Color {
                r: 0.890,
                g: 0.890,
                b: 0.890,
                a: 1.0,
            },
        }
    }
}

/// Per-frame timing passed into [`Sketch::render`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Normalized position in [0, 1) within the current loop.
    pub playhead: f32,
    /// Elapsed seconds within the current loop.
    pub time: f32,
    /// Monotonic frame counter since the sketch started.
    pub frame: u64,
}

/// The lifecycle contract between the harness and a renderable scene.
///
/// Callbacks are invoked synchronously on the event-loop thread and never
/// concurrently with one another.
pub trait Sketch {
    fn resize(&mut self, ctx: &Context, pixel_ratio: f64, width: u32, height: u32);

    fn render(&mut self, ctx: &Context, frame: &Frame) -> Result<(), wgpu::SurfaceError>;

    fn unload(&mut self);
}

/// Factory building a sketch once the context is ready.
pub type SketchConstructor = Box<dyn FnOnce(&Context) -> anyhow::Result<Box<dyn Sketch>>>;

/// Application state bundle: GPU context, the sketch, and surface status.
struct AppState {
    ctx: Context,
    sketch: Box<dyn Sketch>,
    is_surface_configured: bool,
}

impl AppState {
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.resize(width, height);
            self.is_surface_configured = true;
            let pixel_ratio = self.ctx.window.scale_factor();
            self.sketch.resize(&self.ctx, pixel_ratio, width, height);
        }
    }
}

pub(crate) enum HarnessEvent {
    // The wasm init future hands the finished state back to the loop.
    #[allow(dead_code)]
    Initialized(AppState),
}

pub struct App {
    config: SketchConfig,
    // Option so it can be take()n once the context exists.
    constructor: Option<SketchConstructor>,
    #[allow(dead_code)]
    proxy: EventLoopProxy<HarnessEvent>,
    state: Option<AppState>,
    start: Option<Instant>,
    last_frame: Option<Instant>,
    frame_index: u64,
    rendered_once: bool,
}

impl App {
    fn new(
        event_loop: &EventLoop<HarnessEvent>,
        config: SketchConfig,
        constructor: SketchConstructor,
    ) -> Self {
        Self {
            config,
            constructor: Some(constructor),
            proxy: event_loop.create_proxy(),
            state: None,
            start: None,
            last_frame: None,
            frame_index: 0,
            rendered_once: false,
        }
    }

    fn redraw(&mut self) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        // Keep the animation loop alive.
        state.ctx.window.request_redraw();

        // Rendering requires the surface to be configured.
        if !state.is_surface_configured {
            return;
        }
        if !self.config.animate && self.rendered_once {
            return;
        }

        let now = Instant::now();
        let start = *self.start.get_or_insert(now);

        // Pace frames to the configured rate.
        let interval = Duration::from_secs_f64(1.0 / self.config.fps);
        if let Some(last) = self.last_frame {
            if now.duration_since(last) < interval {
                return;
            }
        }
        self.last_frame = Some(now);

        let time_in_loop = if self.config.animate {
            now.duration_since(start).as_secs_f64() % self.config.duration
        } else {
            0.0
        };
        let frame = Frame {
            playhead: (time_in_loop / self.config.duration) as f32,
            time: time_in_loop as f32,
            frame: self.frame_index,
        };
        self.frame_index += 1;
        self.rendered_once = true;

        match state.sketch.render(&state.ctx, &frame) {
            Ok(_) => {}
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
            }
        }
    }
}

impl ApplicationHandler<HarnessEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let constructor = match self.constructor.take() {
            Some(constructor) => constructor,
            // Already initialized; nothing to do on later resumes.
            None => return,
        };

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes()
            .with_title("cubeflow")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.dimensions[0],
                self.config.dimensions[1],
            ));

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("Failed to create the sketch window"),
        );

        let sample_count = if self.config.antialias { 4 } else { 1 };
        let clear_colour = self.config.clear_colour;

        let init_future = async move {
            let ctx = Context::new(window, sample_count, clear_colour).await?;
            let sketch = constructor(&ctx)?;
            Ok::<AppState, anyhow::Error>(AppState {
                ctx,
                sketch,
                is_surface_configured: false,
            })
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            let state = match pollster::block_on(init_future) {
                Ok(state) => state,
                Err(e) => panic!(
                    "App initialization failed. Cannot create the main context: {}",
                    e
                ),
            };
            let size = state.ctx.window.inner_size();
            self.state = Some(state);
            let state = self.state.as_mut().unwrap();
            state.resize(size.width, size.height);
            state.ctx.window.request_redraw();
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let state = init_future
                    .await
                    .expect("App initialization failed. Cannot create the main context");
                assert!(proxy.send_event(HarnessEvent::Initialized(state)).is_ok());
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: HarnessEvent) {
        match event {
            HarnessEvent::Initialized(state) => {
                // This is the message from our wasm `spawn_local`
                self.state = Some(state);

                // Trigger a resize and redraw now that we are initialized
                let state = self.state.as_mut().unwrap();
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
                state.ctx.window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(state) = &mut self.state {
                    state.sketch.unload();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Run a sketch with the given playback configuration.
///
/// Blocks until the window closes (native) or hands control to the browser's
/// animation loop (wasm).
pub fn run(config: SketchConfig, constructor: SketchConstructor) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    let event_loop: EventLoop<HarnessEvent> = EventLoop::with_user_event().build()?;
    let mut app = App::new(&event_loop, config, constructor);
    event_loop.run_app(&mut app)?;

    Ok(())
}
