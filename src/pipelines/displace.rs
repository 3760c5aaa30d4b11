use crate::{
    data_structures::{
        instance::InstanceRaw,
        mesh::{MeshVertex, Vertex},
        texture::Texture,
    },
    pipelines::flat::mk_render_pipeline,
};

/// Pipeline for the animated shader strategy: vertices displaced by
/// `position * sin(time)` plus a 4d simplex-noise offset, fragments colored
/// by the instance color times the u coordinate.
///
/// The layout includes the light bind group even though the shader never
/// reads it, so both strategies share the same bind-group slots and the
/// scene's draw path stays strategy-agnostic.
pub fn mk_displace_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    light_bind_group_layout: &wgpu::BindGroupLayout,
    scene_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Displace Pipeline Layout"),
        bind_group_layouts: &[
            camera_bind_group_layout,
            light_bind_group_layout,
            scene_bind_group_layout,
        ],
        push_constant_ranges: &[],
    });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Displace Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("displace.wgsl").into()),
    };

    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        Some(Texture::DEPTH_FORMAT),
        sample_count,
        &[MeshVertex::desc(), InstanceRaw::desc()],
        shader,
    )
}
