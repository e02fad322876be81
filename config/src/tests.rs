//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_full_turn() {
    assert!((FULL_TURN_DEGREES.to_radians() - std::f64::consts::TAU).abs() < EPSILON);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_counts_are_positive() {
    assert!(DEFAULT_LAYERS > 0);
    assert!(DEFAULT_SAMPLES_PER_LAYER > 0);
    assert!(DEFAULT_MINOR_FREQUENCY > 0);
}

#[test]
fn test_defaults_match_reference_vase() {
    assert_eq!(DEFAULT_LAYERS, 200);
    assert_eq!(DEFAULT_LAYER_HEIGHT, 0.2);
    assert_eq!(DEFAULT_SAMPLES_PER_LAYER, 200);
    assert_eq!(DEFAULT_MAJOR_RADIUS, 14.0);
    assert_eq!(DEFAULT_SCALE_WAVE, [0.0, 100.0, 0.3]);
    assert_eq!(DEFAULT_ROTATION_WAVE, [0.0, 180.0, 30.0]);
    assert_eq!(DEFAULT_MINOR_RADIUS, 1.0);
    assert_eq!(DEFAULT_MINOR_FREQUENCY, 12);
    assert_eq!(DEFAULT_MINOR_ENVELOPE, [0.0, 1480.0, 199.0]);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_default_vase_within_limits() {
    let vertices = DEFAULT_LAYERS as usize * DEFAULT_SAMPLES_PER_LAYER as usize;
    assert!(vertices < MAX_VERTICES);
    assert!(vertices < MAX_FACES);
}

#[test]
fn test_max_vertices_fits_u32_indices() {
    assert!(MAX_VERTICES <= u32::MAX as usize);
}
