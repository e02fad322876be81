//! Wavefront OBJ export.
//!
//! Writes `v x y z` lines followed by one `f` line per face with 1-based
//! indices. N-gon caps are written as-is; OBJ readers triangulate them.

use crate::error::VaseError;
use crate::mesh::PolygonMesh;
use std::io::Write;

/// Writes `mesh` as OBJ to `writer`.
///
/// # Errors
///
/// Returns [`VaseError::Io`] if the writer fails.
pub fn write_obj<W: Write>(mesh: &PolygonMesh, mut writer: W) -> Result<(), VaseError> {
    writeln!(writer, "# spiral vase")?;
    writeln!(writer, "o SpiralVase")?;
    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for face in mesh.faces() {
        write!(writer, "f")?;
        for &index in face {
            write!(writer, " {}", index + 1)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;

    tracing::debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote OBJ mesh"
    );
    Ok(())
}

/// Renders `mesh` as an OBJ document.
///
/// # Example
///
/// ```rust
/// use spiral_vase::{export::to_obj_string, generate, VaseParams};
///
/// let params = VaseParams { layers: 1, samples_per_layer: 3, ..VaseParams::default() };
/// let obj = to_obj_string(&generate(&params).unwrap());
/// assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 3);
/// assert!(obj.contains("\nf 1 2 3\n"));
/// ```
pub fn to_obj_string(mesh: &PolygonMesh) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_obj(mesh, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
