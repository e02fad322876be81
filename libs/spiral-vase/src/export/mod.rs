//! # Export
//!
//! Output formats for a finished [`crate::PolygonMesh`]:
//! - [`MeshBuffers`]: flat f32/u32 triangle buffers for GPU hosts
//! - [`obj`]: Wavefront OBJ with n-gon faces
//! - [`ply`]: ASCII PLY with n-gon faces

pub mod obj;
pub mod ply;

pub use obj::{to_obj_string, write_obj};
pub use ply::{to_ply_string, write_ply};

/// Mesh buffers suitable for GPU rendering.
///
/// Contains vertex positions and triangle indices in formats
/// compatible with WebGL/WebGPU.
///
/// # Examples
/// ```
/// use spiral_vase::{generate, VaseParams};
///
/// let params = VaseParams { layers: 2, samples_per_layer: 8, ..VaseParams::default() };
/// let buffers = generate(&params).unwrap().to_triangle_buffers();
///
/// // 16 ring vertices plus one centre per cap
/// assert_eq!(buffers.vertex_count(), 18);
/// // 8 side quads as 16 triangles, 8 fan triangles per cap
/// assert_eq!(buffers.triangle_count(), 32);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
