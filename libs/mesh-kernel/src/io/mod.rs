//! # OBJ Import and Export
//!
//! Line-oriented Wavefront OBJ support for triangle meshes.
//!
//! ## Import
//!
//! Reads `v`, `vt`, `vn` and `f` records; polygons are fan-triangulated.
//! A malformed line is skipped and recorded as an [`ObjWarning`], then
//! parsing carries on. Only failing to open or read the stream is fatal.
//!
//! ## Export
//!
//! [`ObjWriter`] emits positions and 1-based triangles, enough for a
//! write-then-import round trip to reproduce the mesh.
//!
//! ## Example
//!
//! ```rust
//! use mesh_kernel::io::parse_obj;
//!
//! let import = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nv 1 2\nf 1 2 3 4\n");
//! assert_eq!(import.mesh.vertex_count(), 4);
//! assert_eq!(import.mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
//! assert_eq!(import.diagnostics[0].line, 5);
//! ```

mod reader;
mod writer;


use std::fmt;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use reader::{import_obj, parse_obj, read_obj, triangulate_polygon, FaceCorner};
pub use writer::{save_obj, MeshWriter, ObjWriter};

use crate::mesh::Mesh;

/// Result of importing an OBJ stream.
///
/// `texture_coords` and `normals` are kept in file order. They are not
/// bound to faces; only the position index of each corner reaches the mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjImport {
    pub mesh: Mesh,
    pub texture_coords: Vec<DVec2>,
    pub normals: Vec<DVec3>,
    /// Lines that were skipped and faces that were dropped, in file order.
    pub diagnostics: Vec<ObjWarning>,
}

impl ObjImport {
    /// True if every line was accepted.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A skipped or partially dropped line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjWarning {
    /// 1-based line number in the source.
    pub line: usize,
    /// The line as read, without its terminator.
    pub text: String,
    pub kind: ObjWarningKind,
}

impl fmt::Display for ObjWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.kind, self.text)
    }
}

/// Why a line was skipped or a face dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ObjWarningKind {
    #[error("'{keyword}' expects {expected} values, found {found}")]
    FieldCount {
        keyword: String,
        expected: String,
        found: usize,
    },

    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },

    #[error("invalid face corner '{token}'")]
    InvalidCorner { token: String },

    #[error("unknown keyword '{keyword}'")]
    UnknownKeyword { keyword: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// `index` is 1-based, as written in the file.
    #[error("face references vertex {index} but only {vertex_count} vertices were read")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// `corners` are 1-based, as written in the file.
    #[error("triangle {corners:?} repeats a corner")]
    DegenerateFace { corners: [u32; 3] },
}
