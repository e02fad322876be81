//! # Layer Profile
//!
//! Per-layer modulation: radial scale, angular offset, and ripple envelope.
//! Each is a sine of a clamped linear sweep over the layer index, so layers
//! are computed independently of one another.

use crate::params::VaseParams;

/// Linearly interpolates from `start` to `end` over `points` steps.
///
/// Clamped at both ends: `end` once `point >= points`, `start` for
/// `point <= 0`. The upper clamp is checked first, so a sweep over zero
/// (or negative) points yields `end` everywhere.
///
/// # Example
///
/// ```rust
/// use spiral_vase::profile::interpolate;
///
/// assert_eq!(interpolate(0.0, 100.0, 10.0, -3.0), 0.0);
/// assert_eq!(interpolate(0.0, 100.0, 10.0, 5.0), 50.0);
/// assert_eq!(interpolate(0.0, 100.0, 10.0, 42.0), 100.0);
/// ```
#[inline]
pub fn interpolate(start: f64, end: f64, points: f64, point: f64) -> f64 {
    if point >= points {
        return end;
    }
    if point <= 0.0 {
        return start;
    }
    (end - start) / points * point + start
}

/// `sin` of an angle given in degrees.
#[inline]
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// The three derived values of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerProfile {
    /// Multiplier on the major radius
    pub scale_factor: f64,
    /// Angular offset added to every sample, in degrees
    pub rotation_offset: f64,
    /// Multiplier on the ripple amplitude
    pub envelope: f64,
}

impl LayerProfile {
    /// Computes the profile of layer `layer` for `params`.
    ///
    /// The scale and rotation sweeps run over the total layer count; the
    /// envelope runs over its own cutoff, so a short fade at the base can
    /// leave the rest of the vase at a constant ripple.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spiral_vase::{profile::LayerProfile, VaseParams};
    ///
    /// let params = VaseParams::default();
    /// let base = LayerProfile::for_layer(&params, 0);
    /// assert_eq!(base.scale_factor, 1.0);
    /// assert_eq!(base.rotation_offset, 0.0);
    /// assert_eq!(base.envelope, 0.0);
    /// ```
    pub fn for_layer(params: &VaseParams, layer: usize) -> Self {
        let layers = f64::from(params.layers);
        let l = layer as f64;

        let scale = params.scale_wave;
        let scale_factor =
            sin_deg(interpolate(scale.start_angle, scale.end_angle, layers, l)) * scale.amplitude + 1.0;

        let rotation = params.rotation_wave;
        let rotation_offset =
            rotation.amplitude * sin_deg(interpolate(rotation.start_angle, rotation.end_angle, layers, l));

        let env = params.minor_envelope;
        let envelope = sin_deg(interpolate(env.start_angle, env.end_angle, env.cutoff_layers, l));

        Self {
            scale_factor,
            rotation_offset,
            envelope,
        }
    }
}
