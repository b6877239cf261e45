//! # Mesh Kernel
//!
//! Triangle meshes from OBJ files or procedural generators, with affine
//! transforms over their vertex buffers.
//!
//! ## Architecture
//!
//! ```text
//! OBJ text ─┐
//!           ├→ Mesh (vertices + triangles) → transform → new vertex buffer
//! generate ─┘                              → io::save_obj
//! ```
//!
//! Meshes are immutable once built. Transforms return a new vertex buffer
//! and leave faces alone, so the caller can keep the original for reset.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_kernel::{generate, transform, AffineOp};
//! use glam::DVec3;
//!
//! let bowl = generate::paraboloid(10).unwrap();
//! let lifted = transform::translate(bowl.vertices(), 0.0, 0.0, 5.0);
//! assert_eq!(lifted.len(), bowl.vertex_count());
//!
//! let doubled = AffineOp::Scale(DVec3::splat(2.0)).apply_to_mesh(&bowl);
//! assert_eq!(doubled.faces(), bowl.faces());
//! ```

pub mod error;
pub mod generate;
pub mod io;
pub mod mesh;
pub mod transform;

pub use error::{ExportError, ImportError, MeshError};
pub use generate::{
    function_surface, generate_function_surface, generate_rotation_surface, rotation_surface,
    Axis, FunctionSurfaceParams, RotationParams,
};
pub use io::{import_obj, parse_obj, read_obj, save_obj, MeshWriter, ObjImport, ObjWarning, ObjWriter};
pub use mesh::Mesh;
pub use transform::{rotate, scale, scale_origin, translate, AffineOp};
