//! # Vase Parameters
//!
//! The immutable parameter record for one generation run.
//!
//! Integer counts are signed so that out-of-range host input (a negative
//! layer count typed into a panel, a JSON `-3`) reaches [`VaseParams::validate`]
//! and is rejected there instead of wrapping.

use crate::error::VaseError;
use config::constants::{
    DEFAULT_LAYERS, DEFAULT_LAYER_HEIGHT, DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_ENVELOPE,
    DEFAULT_MINOR_FREQUENCY, DEFAULT_MINOR_RADIUS, DEFAULT_ROTATION_WAVE, DEFAULT_SAMPLES_PER_LAYER,
    DEFAULT_SCALE_WAVE, MAX_FACES, MAX_VERTICES,
};
use serde::{Deserialize, Serialize};

/// A vertical sine sweep: the sine argument runs linearly from
/// `start_angle` to `end_angle` (degrees) over the layers, scaled by
/// `amplitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SineSweep {
    /// Sine argument at the first layer, in degrees
    pub start_angle: f64,
    /// Sine argument at the last layer, in degrees
    pub end_angle: f64,
    /// Multiplier applied to the sine value
    pub amplitude: f64,
}

impl SineSweep {
    /// Creates a sweep.
    pub const fn new(start_angle: f64, end_angle: f64, amplitude: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            amplitude,
        }
    }
}

impl From<[f64; 3]> for SineSweep {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<SineSweep> for [f64; 3] {
    fn from(s: SineSweep) -> Self {
        [s.start_angle, s.end_angle, s.amplitude]
    }
}

/// The ripple envelope: a sine sweep from `start_angle` to `end_angle`
/// (degrees) over `cutoff_layers` layers, held at `end_angle` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvelopeSweep {
    /// Sine argument at layer 0, in degrees
    pub start_angle: f64,
    /// Sine argument from `cutoff_layers` onwards, in degrees
    pub end_angle: f64,
    /// Number of layers over which the sweep runs
    pub cutoff_layers: f64,
}

impl EnvelopeSweep {
    /// Creates an envelope sweep.
    pub const fn new(start_angle: f64, end_angle: f64, cutoff_layers: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            cutoff_layers,
        }
    }
}

impl From<[f64; 3]> for EnvelopeSweep {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<EnvelopeSweep> for [f64; 3] {
    fn from(e: EnvelopeSweep) -> Self {
        [e.start_angle, e.end_angle, e.cutoff_layers]
    }
}

/// Parameters of a spiral vase.
///
/// Missing fields fall back to the reference defaults when deserialized;
/// unknown fields are rejected.
///
/// # Example
///
/// ```rust
/// use spiral_vase::VaseParams;
///
/// let params = VaseParams {
///     layers: 10,
///     samples_per_layer: 32,
///     ..VaseParams::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.vertex_count(), 320);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VaseParams {
    /// Number of layers
    pub layers: i32,
    /// Vertical spacing between layers
    pub layer_height: f64,
    /// Number of samples around each layer
    pub samples_per_layer: i32,
    /// Nominal layer radius before modulation
    pub major_radius: f64,
    /// Per-layer radial scale sweep
    pub scale_wave: SineSweep,
    /// Per-layer angular offset sweep (amplitude in degrees)
    pub rotation_wave: SineSweep,
    /// Ripple amplitude
    pub minor_radius: f64,
    /// Complete ripple cycles per layer
    pub minor_frequency: i32,
    /// Per-layer ripple fade
    pub minor_envelope: EnvelopeSweep,
}

impl Default for VaseParams {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            layer_height: DEFAULT_LAYER_HEIGHT,
            samples_per_layer: DEFAULT_SAMPLES_PER_LAYER,
            major_radius: DEFAULT_MAJOR_RADIUS,
            scale_wave: DEFAULT_SCALE_WAVE.into(),
            rotation_wave: DEFAULT_ROTATION_WAVE.into(),
            minor_radius: DEFAULT_MINOR_RADIUS,
            minor_frequency: DEFAULT_MINOR_FREQUENCY,
            minor_envelope: DEFAULT_MINOR_ENVELOPE.into(),
        }
    }
}

impl VaseParams {
    /// Checks the structural preconditions of a generation run.
    ///
    /// Numeric degeneracies (zero radii, zero height) are valid geometry and
    /// pass. Nothing is clamped: any violation fails the whole call.
    ///
    /// The structural checks run regardless of the layer count, so
    /// `layers == 0` with `samples_per_layer <= 0` is still rejected.
    ///
    /// # Errors
    ///
    /// - [`VaseError::InvalidParameter`] for `layers < 0`,
    ///   `samples_per_layer <= 0` or `minor_frequency <= 0`
    /// - [`VaseError::TooManyVertices`] / [`VaseError::TooManyFaces`] when the
    ///   mesh would exceed the configured limits
    pub fn validate(&self) -> Result<(), VaseError> {
        if self.layers < 0 {
            return Err(VaseError::invalid_parameter(
                "layers",
                self.layers,
                "must be non-negative",
            ));
        }
        if self.samples_per_layer <= 0 {
            return Err(VaseError::invalid_parameter(
                "samples_per_layer",
                self.samples_per_layer,
                "must be positive",
            ));
        }
        if self.minor_frequency <= 0 {
            return Err(VaseError::invalid_parameter(
                "minor_frequency",
                self.minor_frequency,
                "must be positive",
            ));
        }

        let vertices = self.vertex_count();
        if vertices > MAX_VERTICES {
            return Err(VaseError::TooManyVertices {
                count: vertices,
                max: MAX_VERTICES,
            });
        }
        let faces = self.face_count();
        if faces > MAX_FACES {
            return Err(VaseError::TooManyFaces {
                count: faces,
                max: MAX_FACES,
            });
        }

        Ok(())
    }

    /// Number of layers as an index type. Negative counts map to zero.
    pub fn layer_count(&self) -> usize {
        usize::try_from(self.layers).unwrap_or(0)
    }

    /// Number of samples per layer as an index type. Non-positive counts
    /// map to zero.
    pub fn sample_count(&self) -> usize {
        usize::try_from(self.samples_per_layer).unwrap_or(0)
    }

    /// Vertices a valid run produces: `layers * samples_per_layer`.
    pub fn vertex_count(&self) -> usize {
        self.layer_count().saturating_mul(self.sample_count())
    }

    /// Faces a valid run produces: one quad per sample per layer gap, plus
    /// two caps when there is at least one layer.
    pub fn face_count(&self) -> usize {
        match self.layer_count() {
            0 => 0,
            layers => (layers - 1)
                .saturating_mul(self.sample_count())
                .saturating_add(2),
        }
    }
}
