//! # Mesh Handle
//!
//! WASM-friendly wrapper for vase mesh data that can be transferred to
//! JavaScript.

use spiral_vase::PolygonMesh;
use wasm_bindgen::prelude::*;

/// A handle to triangulated mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const session = new VaseSession();
/// const mesh = session.regenerate();
///
/// // Create BufferGeometry
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...], cap centres included
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertices of the polygon mesh (without cap centres)
    vertex_count: u32,
    /// Polygon faces (quads and caps)
    face_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vase vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of polygon faces.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Returns the number of triangles in the index buffer.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a polygon mesh.
    pub fn from_mesh(mesh: &PolygonMesh) -> Self {
        let buffers = mesh.to_triangle_buffers();
        Self {
            vertices: buffers.vertices,
            indices: buffers.indices,
            vertex_count: mesh.vertex_count() as u32,
            face_count: mesh.face_count() as u32,
        }
    }

    /// Vertex buffer, for native callers.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Index buffer, for native callers.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }
}
