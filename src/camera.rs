//! Orthographic camera, uniforms, and GPU resources for view/projection.
//!
//! The frustum math lives in [`OrthographicCamera`] and stays GPU-free;
//! [`CameraResources`] wraps it with the uniform buffer and bind group the
//! pipelines consume.

use cgmath::{EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3};
use wgpu::util::DeviceExt;

/// Zoom factor: half-height of the frustum in world units.
pub const ZOOM: f32 = 2.0;

/// Near and far planes. Negative near keeps geometry behind the eye plane
/// visible, as orthographic projections allow.
pub const NEAR: f32 = -100.0;
pub const FAR: f32 = 100.0;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// An orthographic camera aimed at the origin from a fixed diagonal offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl OrthographicCamera {
    pub fn new() -> Self {
        let mut camera = Self {
            left: -ZOOM,
            right: ZOOM,
            top: ZOOM,
            bottom: -ZOOM,
            near: NEAR,
            far: FAR,
            eye: Point3::new(ZOOM, ZOOM, ZOOM),
            target: Point3::origin(),
            up: Vector3::unit_y(),
        };
        camera.resize(1.0);
        camera
    }

    /// Recompute the frustum for a viewport aspect ratio and re-aim the
    /// camera at the origin.
    ///
    /// Safe to call repeatedly; identical inputs produce identical camera
    /// parameters.
    pub fn resize(&mut self, aspect: f32) {
        self.left = -ZOOM * aspect;
        self.right = ZOOM * aspect;
        self.top = ZOOM;
        self.bottom = -ZOOM;
        self.near = NEAR;
        self.far = FAR;
        self.eye = Point3::new(ZOOM, ZOOM, ZOOM);
        self.target = Point3::origin();
    }

    pub fn view_proj(&self) -> Matrix4<f32> {
        let proj = cgmath::ortho(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        OPENGL_TO_WGPU_MATRIX * proj * view
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// The view-projection matrix as it lives on the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &OrthographicCamera) {
        self.view_proj = camera.view_proj().into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("camera_bind_group_layout"),
    })
}

/// Camera plus its GPU-side uniform buffer and bind group.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: OrthographicCamera,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device) -> Self {
        let camera = OrthographicCamera::new();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Recompute the frustum for the viewport and upload the new matrix.
    pub fn resize(&mut self, queue: &wgpu::Queue, aspect: f32) {
        self.camera.resize(aspect);
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
