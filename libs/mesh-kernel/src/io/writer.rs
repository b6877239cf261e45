//! OBJ writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::mesh::Mesh;

/// Serializes a mesh to a byte stream.
pub trait MeshWriter {
    fn write(&self, mesh: &Mesh, destination: &mut dyn Write) -> Result<(), ExportError>;
}

/// Writes positions and triangles as Wavefront OBJ text.
///
/// Coordinates use the shortest decimal form that parses back to the same
/// `f64`, so finite meshes survive a round trip exactly.
#[derive(Debug, Clone)]
pub struct ObjWriter {
    /// First line of the file, written as an OBJ comment.
    pub header: String,
}

impl Default for ObjWriter {
    fn default() -> Self {
        Self {
            header: concat!("mesh-kernel ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl MeshWriter for ObjWriter {
    fn write(&self, mesh: &Mesh, destination: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(destination, "# {}", self.header)?;
        writeln!(
            destination,
            "# {} vertices, {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        )?;
        for v in mesh.vertices() {
            writeln!(destination, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for [a, b, c] in mesh.faces() {
            writeln!(destination, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }
        Ok(())
    }
}

/// Writes `mesh` to `path` as OBJ, replacing any existing file.
pub fn save_obj(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    ObjWriter::default().write(mesh, &mut out)?;
    out.flush()?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Saved OBJ file"
    );
    Ok(())
}
