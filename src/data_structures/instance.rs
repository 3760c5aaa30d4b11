//! Per-object instance data for GPU rendering.
//!
//! Every scene object is one instance of the shared cube: its placement,
//! flat color, and shader time value are packed into a single instance
//! buffer and read per-instance by the vertex stage.

use cgmath::{Matrix, SquareMatrix};

use crate::{data_structures::mesh, layout::Placement, palette::Color};

/**
 * The raw instance is the actual data stored on the GPU.
 *
 * The normal matrix is the inverse-transpose of the model's linear part, so
 * non-uniform and negative (mirroring) scales both keep normals pointing
 * outward.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
    color: [f32; 3],
    time: f32,
}

impl InstanceRaw {
    pub fn new(placement: &Placement, color: Color, time: f32) -> Self {
        let scale = placement.scale;
        let model = cgmath::Matrix4::from_translation(placement.position)
            * cgmath::Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
        let linear = cgmath::Matrix3::from_diagonal(scale);
        let normal = linear
            .invert()
            .map(|inv| inv.transpose())
            .unwrap_or_else(cgmath::Matrix3::identity);
        Self {
            model: model.into(),
            normal: normal.into(),
            color: color.to_array(),
            time,
        }
    }
}

/**
 * As instance data lives directly in GPU memory we need to tell what the
 * bytes refer to.
 *
 * Stride layout here: model matrix as four 4d vectors, normal matrix as
 * three 3d vectors, then color and time.
 */
impl mesh::Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // The shader only advances to the next entry when it starts
            // processing a new instance.
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // A mat4 takes up 4 vertex slots as it is technically 4
                // vec4s; each needs its own location.
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 25]>() as wgpu::BufferAddress,
                    shader_location: 12,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 28]>() as wgpu::BufferAddress,
                    shader_location: 13,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}
