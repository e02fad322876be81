//! # Configuration Constants
//!
//! Centralized constants for the spiral vase generator.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Defaults**: Parameter values of the reference vase
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance for comparing computed coordinates and radii.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Degrees in one full turn. Sample angles are expressed in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// Default number of layers (horizontal cross-sections).
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_LAYERS, DEFAULT_LAYER_HEIGHT};
///
/// let height = (DEFAULT_LAYERS - 1) as f64 * DEFAULT_LAYER_HEIGHT;
/// assert!((height - 39.8).abs() < 1e-9);
/// ```
pub const DEFAULT_LAYERS: i32 = 200;

/// Default vertical spacing between consecutive layers.
pub const DEFAULT_LAYER_HEIGHT: f64 = 0.2;

/// Default number of samples taken around each layer.
pub const DEFAULT_SAMPLES_PER_LAYER: i32 = 200;

/// Default radius of each layer before any modulation is applied.
pub const DEFAULT_MAJOR_RADIUS: f64 = 14.0;

/// Default scale wave as `[start_angle, end_angle, amplitude]`.
///
/// With `[0, 0, 1]` (or any zero amplitude) no scaling is performed.
pub const DEFAULT_SCALE_WAVE: [f64; 3] = [0.0, 100.0, 0.3];

/// Default rotation wave as `[start_angle, end_angle, magnitude]` (degrees).
pub const DEFAULT_ROTATION_WAVE: [f64; 3] = [0.0, 180.0, 30.0];

/// Default amplitude of the ripple on each layer's edge.
///
/// Zero keeps every layer a plain circle.
pub const DEFAULT_MINOR_RADIUS: f64 = 1.0;

/// Default number of complete ripple cycles around each layer.
pub const DEFAULT_MINOR_FREQUENCY: i32 = 12;

/// Default ripple envelope as `[start_angle, end_angle, cutoff_layers]`.
///
/// The cutoff is measured in layers, independent of the total layer count.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_LAYERS, DEFAULT_MINOR_ENVELOPE};
///
/// // The default fade spans every layer but the last.
/// assert_eq!(DEFAULT_MINOR_ENVELOPE[2], (DEFAULT_LAYERS - 1) as f64);
/// ```
pub const DEFAULT_MINOR_ENVELOPE: [f64; 3] = [0.0, 1480.0, 199.0];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single vase mesh.
///
/// Safety limit to prevent memory exhaustion. Also keeps every vertex index
/// representable as `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// assert!(MAX_VERTICES <= u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of faces in a single vase mesh.
pub const MAX_FACES: usize = 10_000_000;
