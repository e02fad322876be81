//! # Config Crate
//!
//! Centralized configuration constants for the spiral vase generator.
//! Parameter defaults, tolerances, and safety limits live here so the
//! geometry crate and its hosts agree on a single set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_LAYERS, DEFAULT_SAMPLES_PER_LAYER};
//!
//! let vertex_count = DEFAULT_LAYERS as usize * DEFAULT_SAMPLES_PER_LAYER as usize;
//! assert_eq!(vertex_count, 40_000);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Reference Compatible**: Defaults reproduce the reference vase

pub mod constants;

#[cfg(test)]
mod tests;
