//! Scene assembly and lifecycle.
//!
//! [`CubeScene`] composes the shared cube mesh, a seeded palette and layout,
//! lighting, and an orthographic camera into one renderable scene, and
//! implements the harness's [`Sketch`] contract: `resize`, `render`,
//! `unload`.

use std::iter;

use cgmath::{Matrix4, Rad, SquareMatrix};
use rand::{rngs::StdRng, SeedableRng};
use wgpu::util::DeviceExt;

use crate::{
    camera::CameraResources,
    context::Context,
    data_structures::{instance::InstanceRaw, mesh::Mesh},
    easing,
    harness::{Frame, Sketch},
    layout::{self, Placement},
    light::{LightResources, LightUniform},
    palette::{Color, Palette},
    shading::ShadingStrategy,
};

/// Number of objects in every sketch scene, fixed at construction.
pub const OBJECT_COUNT: usize = 40;

/// Scene-construction parameters.
///
/// Without a seed every run differs; pass one for reproducible output.
pub struct SceneOptions {
    pub seed: Option<u64>,
    pub object_count: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            seed: None,
            object_count: OBJECT_COUNT,
        }
    }
}

/// Per-object shader uniform state, updated once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UniformState {
    pub time: f32,
}

/// One scene object: an immutable placement and color plus the mutable
/// uniform state. All objects share the cube mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObject {
    pub placement: Placement,
    pub color: Color,
    pub uniform: UniformState,
}

impl SceneObject {
    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw::new(&self.placement, self.color, self.uniform.time)
    }
}

/// Rotation of the scene root about the z axis for a playhead in [0, 1).
///
/// Periodic with period 1: a full sine swing through the exponential in-out
/// curve, so the loop closes seamlessly.
pub fn loop_rotation(playhead: f32) -> f32 {
    let t = (playhead * std::f32::consts::TAU).sin();
    easing::expo_in_out(t)
}

/// The scene-root transform as it lives on the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniform {
    model: [[f32; 4]; 4],
}

impl SceneUniform {
    fn new() -> Self {
        Self {
            model: Matrix4::identity().into(),
        }
    }

    fn set_rotation_z(&mut self, angle: f32) {
        self.model = Matrix4::from_angle_z(Rad(angle)).into();
    }
}

pub fn mk_scene_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("scene_bind_group_layout"),
    })
}

// Everything that has to be released on unload lives in this bundle.
struct SceneResources {
    mesh: Mesh,
    instance_buffer: wgpu::Buffer,
    camera: CameraResources,
    light: LightResources,
    scene_uniform: SceneUniform,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
}

pub struct CubeScene {
    objects: Vec<SceneObject>,
    palette: Palette,
    strategy: Box<dyn ShadingStrategy>,
    resources: Option<SceneResources>,
}

impl CubeScene {
    pub fn new(
        ctx: &Context,
        options: SceneOptions,
        strategy: Box<dyn ShadingStrategy>,
    ) -> anyhow::Result<Self> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let palette = Palette::pick(&mut rng)?;
        let objects: Vec<SceneObject> = layout::scatter(&mut rng, options.object_count)
            .into_iter()
            .map(|placement| SceneObject {
                placement,
                color: palette.pick_color(&mut rng),
                uniform: UniformState::default(),
            })
            .collect();

        let device = &ctx.device;
        let mesh = Mesh::cube(device);

        let instance_data: Vec<InstanceRaw> = objects.iter().map(SceneObject::to_raw).collect();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let camera = CameraResources::new(device);
        let light = LightResources::new(device, LightUniform::sketch_default());

        let scene_uniform = SceneUniform::new();
        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Buffer"),
            contents: bytemuck::cast_slice(&[scene_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let scene_bind_group_layout = mk_scene_bind_group_layout(device);
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &scene_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
            label: Some("scene_bind_group"),
        });

        let pipeline = strategy.build_pipeline(
            device,
            &ctx.config,
            ctx.sample_count,
            &camera.bind_group_layout,
            &light.bind_group_layout,
            &scene_bind_group_layout,
        );
        log::info!(
            "built {} scene with {} objects",
            strategy.label(),
            objects.len()
        );

        Ok(Self {
            objects,
            palette,
            strategy,
            resources: Some(SceneResources {
                mesh,
                instance_buffer,
                camera,
                light,
                scene_uniform,
                scene_buffer,
                scene_bind_group,
                pipeline,
            }),
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}

impl Sketch for CubeScene {
    fn resize(&mut self, ctx: &Context, _pixel_ratio: f64, width: u32, height: u32) {
        let Some(resources) = self.resources.as_mut() else {
            log::warn!("resize on an unloaded scene");
            return;
        };
        let aspect = width as f32 / height.max(1) as f32;
        resources.camera.resize(&ctx.queue, aspect);
    }

    fn render(&mut self, ctx: &Context, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let Some(resources) = self.resources.as_mut() else {
            log::warn!("render on an unloaded scene");
            return Ok(());
        };

        resources
            .scene_uniform
            .set_rotation_z(loop_rotation(frame.playhead));
        ctx.queue.write_buffer(
            &resources.scene_buffer,
            0,
            bytemuck::cast_slice(&[resources.scene_uniform]),
        );
        self.strategy.update_uniforms(
            &ctx.queue,
            &mut self.objects,
            &resources.instance_buffer,
            frame.time,
        );

        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let (color_view, resolve_target) = match &ctx.msaa_texture {
                Some(msaa) => (&msaa.view, Some(&view)),
                None => (&view, None),
            };
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&resources.pipeline);
            render_pass.set_bind_group(0, &resources.camera.bind_group, &[]);
            render_pass.set_bind_group(1, &resources.light.bind_group, &[]);
            render_pass.set_bind_group(2, &resources.scene_bind_group, &[]);
            render_pass.set_vertex_buffer(0, resources.mesh.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, resources.instance_buffer.slice(..));
            render_pass
                .set_index_buffer(resources.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..resources.mesh.num_indices, 0, 0..self.objects.len() as u32);
        }

        ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    /// Release all GPU resources held by the scene.
    ///
    /// Idempotent: the first call drops the resource bundle, later calls are
    /// no-ops.
    fn unload(&mut self) {
        if self.resources.take().is_some() {
            log::info!("scene resources released");
        }
    }
}
