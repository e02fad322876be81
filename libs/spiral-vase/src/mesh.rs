//! # Polygon Mesh
//!
//! Arena-style mesh: vertex positions in one contiguous array, undirected
//! edges as index pairs, and n-gon faces flattened into a single index array
//! with per-face offsets.

use crate::export::MeshBuffers;
use glam::DVec3;
use std::collections::HashMap;

/// A polygon mesh with vertices, edges, and ordered faces.
///
/// All geometry uses f64. Export to f32 only happens when building
/// [`MeshBuffers`] for a GPU host.
///
/// Built through [`crate::builder::PolygonMeshBuilder`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Undirected edges, smaller index first
    edges: Vec<[u32; 2]>,
    /// Concatenated face vertex indices
    face_indices: Vec<u32>,
    /// Start of each face in `face_indices`, plus a trailing end marker
    face_offsets: Vec<u32>,
}

impl Default for PolygonMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            face_indices: Vec::new(),
            face_offsets: vec![0],
        }
    }

    pub(crate) fn reserve(&mut self, vertices: usize, edges: usize, faces: usize) {
        self.vertices.reserve(vertices);
        self.edges.reserve(edges);
        self.face_offsets.reserve(faces);
        self.face_indices.reserve(faces.saturating_mul(4));
    }

    pub(crate) fn push_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    pub(crate) fn push_edge(&mut self, edge: [u32; 2]) {
        self.edges.push(edge);
    }

    pub(crate) fn push_face(&mut self, vertices: &[u32]) {
        self.face_indices.extend_from_slice(vertices);
        self.face_offsets.push(self.face_indices.len() as u32);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_offsets.len().saturating_sub(1)
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the undirected edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns the vertex indices of face `index`.
    pub fn face(&self, index: usize) -> &[u32] {
        let start = self.face_offsets[index] as usize;
        let end = self.face_offsets[index + 1] as usize;
        &self.face_indices[start..end]
    }

    /// Iterates over faces in emission order.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.face_offsets
            .windows(2)
            .map(move |w| &self.face_indices[w[0] as usize..w[1] as usize])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Signed volume enclosed by the faces.
    ///
    /// Positive when faces wind counter-clockwise seen from outside. Only
    /// meaningful for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;
        for face in self.faces() {
            if face.len() < 3 {
                continue;
            }
            let v0 = self.vertex(face[0]);
            for pair in face[1..].windows(2) {
                let v1 = self.vertex(pair[0]);
                let v2 = self.vertex(pair[1]);
                volume += v0.dot(v1.cross(v2));
            }
        }
        volume / 6.0
    }

    /// Checks that the faces form a closed, consistently oriented surface:
    /// every directed face edge occurs exactly once and its reverse occurs
    /// too.
    pub fn is_closed_and_oriented(&self) -> bool {
        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for face in self.faces() {
            let n = face.len();
            for i in 0..n {
                let edge = (face[i], face[(i + 1) % n]);
                if edge.0 == edge.1 {
                    return false;
                }
                *directed.entry(edge).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    /// Exports vertices as f32 array.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Triangulates the mesh into GPU buffers.
    ///
    /// Triangles and quads are split directly. Larger faces (the caps) are
    /// fanned around an added vertex at the face centroid, since a rippled
    /// cap is not convex but is star-shaped around its centre. Faces with
    /// fewer than three vertices are skipped.
    pub fn to_triangle_buffers(&self) -> MeshBuffers {
        let mut buffers = MeshBuffers::new();
        buffers.vertices = self.vertices_f32();
        let mut next_vertex = self.vertices.len() as u32;

        for face in self.faces() {
            match face.len() {
                0..=2 => {}
                3 => buffers.indices.extend_from_slice(face),
                4 => {
                    buffers.indices.extend_from_slice(&[face[0], face[1], face[2]]);
                    buffers.indices.extend_from_slice(&[face[0], face[2], face[3]]);
                }
                n => {
                    let centroid = face
                        .iter()
                        .fold(DVec3::ZERO, |acc, &i| acc + self.vertex(i))
                        / n as f64;
                    buffers.vertices.extend_from_slice(&[
                        centroid.x as f32,
                        centroid.y as f32,
                        centroid.z as f32,
                    ]);
                    let center = next_vertex;
                    next_vertex += 1;
                    for i in 0..n {
                        buffers
                            .indices
                            .extend_from_slice(&[center, face[i], face[(i + 1) % n]]);
                    }
                }
            }
        }

        buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Unit cube with outward-facing quads.
    fn cube() -> PolygonMesh {
        let mut mesh = PolygonMesh::new();
        for z in [0.0, 1.0] {
            for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
                mesh.push_vertex(DVec3::new(x, y, z));
            }
        }
        mesh.push_face(&[0, 3, 2, 1]);
        mesh.push_face(&[4, 5, 6, 7]);
        mesh.push_face(&[0, 1, 5, 4]);
        mesh.push_face(&[1, 2, 6, 5]);
        mesh.push_face(&[2, 3, 7, 6]);
        mesh.push_face(&[3, 0, 4, 7]);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = PolygonMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.faces().count(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        let mut mesh = PolygonMesh::default();
        assert_eq!(mesh, PolygonMesh::new());
        mesh.push_face(&[0, 1, 2]);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0), &[0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = PolygonMesh::new();
        mesh.push_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.push_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_cube_volume_and_orientation() {
        let mesh = cube();
        assert_abs_diff_eq!(mesh.signed_volume(), 1.0, epsilon = 1e-12);
        assert!(mesh.is_closed_and_oriented());
    }

    #[test]
    fn test_flipped_face_breaks_orientation() {
        let mut mesh = cube();
        mesh.face_indices[0..4].copy_from_slice(&[0, 1, 2, 3]);
        assert!(!mesh.is_closed_and_oriented());
    }

    #[test]
    fn test_open_mesh_is_not_closed() {
        let mut mesh = PolygonMesh::new();
        mesh.push_vertex(DVec3::ZERO);
        mesh.push_vertex(DVec3::X);
        mesh.push_vertex(DVec3::Y);
        mesh.push_face(&[0, 1, 2]);
        assert!(!mesh.is_closed_and_oriented());
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = PolygonMesh::new();
        mesh.push_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_triangle_buffers_split_quads() {
        let buffers = cube().to_triangle_buffers();
        assert_eq!(buffers.vertex_count(), 8);
        assert_eq!(buffers.triangle_count(), 12);
        assert_eq!(&buffers.indices[0..6], &[0, 3, 2, 0, 2, 1]);
    }

    #[test]
    fn test_triangle_buffers_fan_large_faces() {
        let mut mesh = PolygonMesh::new();
        for i in 0..6 {
            let angle = i as f64 * std::f64::consts::TAU / 6.0;
            mesh.push_vertex(DVec3::new(angle.cos(), angle.sin(), 2.0));
        }
        mesh.push_face(&[0, 1, 2, 3, 4, 5]);
        let buffers = mesh.to_triangle_buffers();
        assert_eq!(buffers.vertex_count(), 7);
        assert_eq!(buffers.triangle_count(), 6);
        assert_eq!(&buffers.indices[0..3], &[6, 0, 1]);
        assert_abs_diff_eq!(buffers.vertices[18], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(buffers.vertices[20], 2.0, epsilon = 1e-6);
    }
}
