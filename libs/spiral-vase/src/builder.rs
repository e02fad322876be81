//! # Mesh Builder
//!
//! The capability set the assembler needs from whoever stores the mesh:
//! add vertices, edges and faces, then finalize. The assembler issues calls
//! in generation order and never touches a finalized mesh again.
//!
//! [`PolygonMeshBuilder`] is the arena-backed implementation used by
//! [`crate::generate`].

use crate::mesh::PolygonMesh;
use glam::DVec3;

/// Storage backend consumed by the topology assembler.
pub trait MeshBuilder {
    /// Handle returned for an added vertex.
    type VertexRef: Copy;
    /// The finished mesh.
    type Output;

    /// Pre-allocation hint, called once before the first vertex.
    fn reserve(&mut self, _vertices: usize, _edges: usize, _faces: usize) {}

    /// Adds a vertex and returns its handle.
    fn add_vertex(&mut self, position: DVec3) -> Self::VertexRef;

    /// Adds an undirected edge. Callers emit each edge once.
    fn add_edge(&mut self, a: Self::VertexRef, b: Self::VertexRef);

    /// Adds a face; vertex order defines the winding.
    fn add_face(&mut self, vertices: &[Self::VertexRef]);

    /// Consumes the builder and returns the finished mesh.
    fn finalize(self) -> Self::Output;
}

/// Arena builder: vertices in a contiguous array, edges and faces as index
/// tuples into it.
///
/// Edges are stored smaller index first. Self-loops are dropped.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use spiral_vase::builder::{MeshBuilder, PolygonMeshBuilder};
///
/// let mut builder = PolygonMeshBuilder::new();
/// let a = builder.add_vertex(DVec3::ZERO);
/// let b = builder.add_vertex(DVec3::X);
/// let c = builder.add_vertex(DVec3::Y);
/// builder.add_edge(b, a);
/// builder.add_edge(c, c);
/// builder.add_face(&[a, b, c]);
///
/// let mesh = builder.finalize();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.edges(), &[[0, 1]]);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PolygonMeshBuilder {
    mesh: PolygonMesh,
}

impl PolygonMeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeshBuilder for PolygonMeshBuilder {
    type VertexRef = u32;
    type Output = PolygonMesh;

    fn reserve(&mut self, vertices: usize, edges: usize, faces: usize) {
        self.mesh.reserve(vertices, edges, faces);
    }

    fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.mesh.push_vertex(position)
    }

    fn add_edge(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        self.mesh.push_edge([a.min(b), a.max(b)]);
    }

    fn add_face(&mut self, vertices: &[u32]) {
        self.mesh.push_face(vertices);
    }

    fn finalize(self) -> PolygonMesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_refs_are_sequential() {
        let mut builder = PolygonMeshBuilder::new();
        assert_eq!(builder.add_vertex(DVec3::ZERO), 0);
        assert_eq!(builder.add_vertex(DVec3::X), 1);
        assert_eq!(builder.add_vertex(DVec3::Y), 2);
    }

    #[test]
    fn test_edges_are_normalized() {
        let mut builder = PolygonMeshBuilder::new();
        let a = builder.add_vertex(DVec3::ZERO);
        let b = builder.add_vertex(DVec3::X);
        let c = builder.add_vertex(DVec3::Y);
        builder.add_edge(b, a);
        builder.add_edge(a, a);
        builder.add_edge(b, c);
        let mesh = builder.finalize();
        assert_eq!(mesh.edges(), &[[0, 1], [1, 2]]);
    }

    #[test]
    fn test_faces_keep_order() {
        let mut builder = PolygonMeshBuilder::new();
        for _ in 0..5 {
            builder.add_vertex(DVec3::ZERO);
        }
        builder.add_face(&[3, 1, 0, 4]);
        builder.add_face(&[0, 1, 2]);
        let mesh = builder.finalize();
        assert_eq!(mesh.face(0), &[3, 1, 0, 4]);
        assert_eq!(mesh.face(1), &[0, 1, 2]);
    }
}
