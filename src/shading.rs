//! Swappable shading strategies.
//!
//! A strategy owns two decisions: which render pipeline the scene draws
//! with, and what (if anything) has to be written to the GPU before each
//! frame. Everything else — layout, palette, camera, lights, the draw path —
//! is shared, so swapping the strategy swaps the whole look of a sketch.

use crate::{data_structures::instance::InstanceRaw, scene::SceneObject};

pub trait ShadingStrategy {
    fn label(&self) -> &'static str;

    fn build_pipeline(
        &self,
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        scene_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline;

    /// Per-frame uniform update, invoked by the scene before every draw.
    ///
    /// The default does nothing; strategies with animated uniforms write the
    /// elapsed time into every object's uniform state and re-upload the
    /// instance buffer.
    fn update_uniforms(
        &self,
        _queue: &wgpu::Queue,
        _objects: &mut [SceneObject],
        _instance_buffer: &wgpu::Buffer,
        _time: f32,
    ) {
    }
}

/// Variant A: static lit flat-color materials. No per-frame mutation.
pub struct FlatLit;

impl ShadingStrategy for FlatLit {
    fn label(&self) -> &'static str {
        "flat-lit"
    }

    fn build_pipeline(
        &self,
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        scene_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        crate::pipelines::flat::mk_flat_pipeline(
            device,
            config,
            sample_count,
            camera_bind_group_layout,
            light_bind_group_layout,
            scene_bind_group_layout,
        )
    }
}

/// Variant B: time-varying noise-displacement shader.
pub struct Displaced;

impl ShadingStrategy for Displaced {
    fn label(&self) -> &'static str {
        "displaced"
    }

    fn build_pipeline(
        &self,
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        scene_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        crate::pipelines::displace::mk_displace_pipeline(
            device,
            config,
            sample_count,
            camera_bind_group_layout,
            light_bind_group_layout,
            scene_bind_group_layout,
        )
    }

    fn update_uniforms(
        &self,
        queue: &wgpu::Queue,
        objects: &mut [SceneObject],
        instance_buffer: &wgpu::Buffer,
        time: f32,
    ) {
        write_time(objects, time);
        let instance_data: Vec<InstanceRaw> = objects.iter().map(SceneObject::to_raw).collect();
        queue.write_buffer(instance_buffer, 0, bytemuck::cast_slice(&instance_data));
    }
}

/// Write the elapsed time into every object's uniform state.
///
/// The object list is the explicit mapping from object identity to uniform
/// state; this is the only per-frame mutation in the system.
pub fn write_time(objects: &mut [SceneObject], time: f32) {
    for object in objects {
        object.uniform.time = time;
    }
}
