//! Procedural object layout.
//!
//! Placements are sampled once at scene-build time and are immutable
//! afterwards. Positions and scales are drawn component-wise from a bounded
//! uniform range; the scale vector is then attenuated uniformly.

use rand::Rng;

/// Uniform factor applied to every sampled scale vector.
pub const SCALE_ATTENUATION: f32 = 0.5;

/// Half-extent of the sampling cube for positions and raw scales.
pub const SPREAD: f32 = 1.0;

/// Position and non-uniform scale of one scene object.
///
/// Scale components may be negative: the sampling range deliberately allows
/// mirrored geometry, and downstream instance data carries the handedness so
/// mirrored boxes still light correctly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: cgmath::Vector3<f32>,
    pub scale: cgmath::Vector3<f32>,
}

/// Sample `count` placements from the bounded uniform distribution.
pub fn scatter<R: Rng>(rng: &mut R, count: usize) -> Vec<Placement> {
    (0..count)
        .map(|_| {
            let position = cgmath::Vector3::new(
                rng.gen_range(-SPREAD..=SPREAD),
                rng.gen_range(-SPREAD..=SPREAD),
                rng.gen_range(-SPREAD..=SPREAD),
            );
            let scale = cgmath::Vector3::new(
                rng.gen_range(-SPREAD..=SPREAD),
                rng.gen_range(-SPREAD..=SPREAD),
                rng.gen_range(-SPREAD..=SPREAD),
            ) * SCALE_ATTENUATION;
            Placement { position, scale }
        })
        .collect()
}
