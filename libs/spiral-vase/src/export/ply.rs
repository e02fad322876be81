//! ASCII PLY export with polygon faces.

use crate::error::VaseError;
use crate::mesh::PolygonMesh;
use std::io::Write;

/// Writes `mesh` as ASCII PLY to `writer`.
///
/// # Errors
///
/// Returns [`VaseError::Io`] if the writer fails.
pub fn write_ply<W: Write>(mesh: &PolygonMesh, mut writer: W) -> Result<(), VaseError> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment spiral vase")?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "element face {}", mesh.face_count())?;
    writeln!(writer, "property list uint uint vertex_indices")?;
    writeln!(writer, "end_header")?;

    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }
    for face in mesh.faces() {
        write!(writer, "{}", face.len())?;
        for &index in face {
            write!(writer, " {}", index)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders `mesh` as an ASCII PLY document.
pub fn to_ply_string(mesh: &PolygonMesh) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_ply(mesh, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
