//! cubeflow
//!
//! A lightweight, cross-platform generative-art sketch crate focused on
//! native and WASM compatibility. A scene of procedurally placed cubes is
//! built once from a seeded random source and rendered over a fixed-duration
//! animation loop; the shading strategy (static lit materials or an animated
//! noise-displacement shader) is swappable without touching anything else.
//!
//! High-level modules
//! - `camera`: orthographic camera and uniforms for view/projection
//! - `context`: central GPU context that owns device/queue/render targets
//! - `data_structures`: scene data models (mesh, instances, render targets)
//! - `easing`: animation easing curves
//! - `harness`: the render-loop driver (window, playhead, frame pacing)
//! - `layout`: bounded-random object placement
//! - `light`: ambient + directional lighting resources
//! - `palette`: palette catalog and seeded color selection
//! - `pipelines`: render pipeline definitions per shading strategy
//! - `scene`: scene assembly and the sketch lifecycle
//! - `shading`: the swappable shading strategies
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod easing;
pub mod harness;
pub mod layout;
pub mod light;
pub mod palette;
pub mod pipelines;
pub mod scene;
pub mod shading;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::WindowEvent;
