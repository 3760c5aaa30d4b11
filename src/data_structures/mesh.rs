//! Mesh data and the shared cube geometry.
//!
//! The whole scene renders one unit cube; every object references the same
//! vertex and index buffers and differs only in its instance data.

use wgpu::util::DeviceExt;

/// Anything that can describe its vertex-buffer layout to a pipeline.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// One mesh vertex: object-local position, normal, and surface parameter.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// GPU-resident mesh: vertex buffer, index buffer, and index count.
#[derive(Debug)]
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl Mesh {
    /// Upload the shared unit cube (1x1x1, centered at the origin).
    ///
    /// Each face carries its own four vertices so normals stay flat, and the
    /// u coordinate runs 0..1 left-to-right across every face.
    pub fn cube(device: &wgpu::Device) -> Self {
        let vertices = cube_vertices();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_indices: CUBE_INDICES.len() as u32,
        }
    }
}

// Two triangles per face, counter-clockwise as seen from outside.
pub const CUBE_INDICES: &[u16] = &[
    0, 1, 2, 0, 2, 3, // +z
    4, 5, 6, 4, 6, 7, // -z
    8, 9, 10, 8, 10, 11, // +x
    12, 13, 14, 12, 14, 15, // -x
    16, 17, 18, 16, 18, 19, // +y
    20, 21, 22, 20, 22, 23, // -y
];

pub fn cube_vertices() -> [MeshVertex; 24] {
    let face = |positions: [[f32; 3]; 4], normal: [f32; 3]| {
        [
            MeshVertex {
                position: positions[0],
                normal,
                uv: [0.0, 0.0],
            },
            MeshVertex {
                position: positions[1],
                normal,
                uv: [1.0, 0.0],
            },
            MeshVertex {
                position: positions[2],
                normal,
                uv: [1.0, 1.0],
            },
            MeshVertex {
                position: positions[3],
                normal,
                uv: [0.0, 1.0],
            },
        ]
    };

    let h = 0.5;
    let faces = [
        face(
            [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
            [0.0, 0.0, 1.0],
        ),
        face(
            [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
            [0.0, 0.0, -1.0],
        ),
        face(
            [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],
            [1.0, 0.0, 0.0],
        ),
        face(
            [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
            [-1.0, 0.0, 0.0],
        ),
        face(
            [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],
            [0.0, 1.0, 0.0],
        ),
        face(
            [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
            [0.0, -1.0, 0.0],
        ),
    ];

    let mut vertices = [MeshVertex {
        position: [0.0; 3],
        normal: [0.0; 3],
        uv: [0.0; 2],
    }; 24];
    for (i, f) in faces.iter().enumerate() {
        vertices[i * 4..i * 4 + 4].copy_from_slice(f);
    }
    vertices
}
