//! # Spiral Vase
//!
//! Procedural "spiral vase" meshes: a stack of closed horizontal layers whose
//! radius and rotation follow vertical sine sweeps, each layer's edge rippled
//! by a higher-frequency sine, joined into a watertight quad mesh with a
//! bottom and a top cap.
//!
//! ## Architecture
//!
//! ```text
//! VaseParams → TopologyAssembler ─┬→ LayerProfile (scale, rotation, envelope)
//!                                 ├→ LayerSampler (one position per sample)
//!                                 └→ MeshBuilder  (vertices, edges, faces)
//!                                          ↓
//!                               PolygonMesh → MeshBuffers / OBJ / PLY
//! ```
//!
//! Generation is a single synchronous sweep, `O(layers * samples_per_layer)`,
//! deterministic for identical parameters. Every call builds a fresh mesh.
//!
//! ## Usage
//!
//! ```rust
//! use spiral_vase::{generate, VaseParams};
//!
//! let params = VaseParams { layers: 20, samples_per_layer: 64, ..VaseParams::default() };
//! let mesh = generate(&params)?;
//! assert_eq!(mesh.vertex_count(), 20 * 64);
//! assert_eq!(mesh.face_count(), 19 * 64 + 2);
//! # Ok::<(), spiral_vase::VaseError>(())
//! ```

pub mod assembler;
pub mod builder;
pub mod error;
pub mod export;
pub mod mesh;
pub mod params;
pub mod profile;
pub mod sampler;

pub use assembler::{assemble, AssemblyState, TopologyAssembler};
pub use builder::{MeshBuilder, PolygonMeshBuilder};
pub use error::VaseError;
pub use export::MeshBuffers;
pub use mesh::PolygonMesh;
pub use params::{EnvelopeSweep, SineSweep, VaseParams};

/// Generates the vase described by `params`.
///
/// This is the main entry point. Regenerating replaces nothing in place; the
/// caller swaps in the returned mesh.
///
/// # Errors
///
/// [`VaseError::InvalidParameter`] when `layers < 0`,
/// `samples_per_layer <= 0` or `minor_frequency <= 0`, and the size-limit
/// errors from [`VaseParams::validate`]. `layers == 0` is not an error; it
/// yields an empty mesh.
pub fn generate(params: &VaseParams) -> Result<PolygonMesh, VaseError> {
    assemble(params, PolygonMeshBuilder::new())
}
