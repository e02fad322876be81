//! # Vertex Sampler
//!
//! Positions of the samples on one layer's closed curve.
//!
//! Sample angles come from the fixed count (`s * 360 / samples`), never from
//! an accumulated float step, so every layer yields exactly
//! `samples_per_layer` vertices.

use crate::params::VaseParams;
use crate::profile::{sin_deg, LayerProfile};
use config::constants::FULL_TURN_DEGREES;
use glam::DVec3;

/// Samples the curve of a single layer.
///
/// Holds the layer's [`LayerProfile`] so the per-layer sines are evaluated
/// once, not once per sample.
///
/// # Example
///
/// ```rust
/// use spiral_vase::{sampler::LayerSampler, VaseParams};
///
/// let params = VaseParams { samples_per_layer: 4, ..VaseParams::default() };
/// let sampler = LayerSampler::new(&params, 0);
/// let first = sampler.sample(0);
/// assert_eq!(first.x, 0.0);
/// assert_eq!(first.y, 14.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayerSampler {
    profile: LayerProfile,
    samples: usize,
    z: f64,
    major_radius: f64,
    minor_radius: f64,
    minor_frequency: f64,
}

impl LayerSampler {
    /// Prepares sampling of layer `layer`.
    pub fn new(params: &VaseParams, layer: usize) -> Self {
        Self {
            profile: LayerProfile::for_layer(params, layer),
            samples: params.sample_count(),
            z: layer as f64 * params.layer_height,
            major_radius: params.major_radius,
            minor_radius: params.minor_radius,
            minor_frequency: f64::from(params.minor_frequency),
        }
    }

    /// Returns the layer's profile.
    pub fn profile(&self) -> &LayerProfile {
        &self.profile
    }

    /// Height of the layer.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Unrotated angle of sample `sample`, in degrees.
    #[inline]
    pub fn base_angle(&self, sample: usize) -> f64 {
        sample as f64 * FULL_TURN_DEGREES / self.samples as f64
    }

    /// Radius of the curve at sample `sample`: the rippled, scaled major
    /// radius.
    pub fn radius(&self, sample: usize) -> f64 {
        let base_angle = self.base_angle(sample);
        let minor =
            self.minor_radius * sin_deg(base_angle * self.minor_frequency) * self.profile.envelope;
        minor + self.major_radius * self.profile.scale_factor
    }

    /// Position of sample `sample`.
    ///
    /// Angle 0 lies on +Y and angles grow towards +X, so increasing sample
    /// indices run clockwise seen from above.
    pub fn sample(&self, sample: usize) -> DVec3 {
        let r = self.radius(sample);
        let angle = (self.base_angle(sample) + self.profile.rotation_offset).to_radians();
        DVec3::new(angle.sin() * r, angle.cos() * r, self.z)
    }

    /// Iterates over every sample of the layer in index order.
    pub fn samples(&self) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.samples).map(move |s| self.sample(s))
    }
}

/// Position of sample `sample` on layer `layer`.
///
/// Convenience for one-off queries; the assembler reuses a [`LayerSampler`]
/// per layer instead.
pub fn sample_vertex(params: &VaseParams, layer: usize, sample: usize) -> DVec3 {
    LayerSampler::new(params, layer).sample(sample)
}
