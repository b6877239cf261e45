//! # Mesh Data Structure
//!
//! Core mesh representation: an ordered vertex buffer plus index triangles.
//!
//! Vertex indices are positional. A face `[a, b, c]` refers to the vertices
//! at those offsets in insertion order; there are no vertex identifiers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::transform;

/// A triangle mesh with vertices and indices.
///
/// Invariants after construction through [`Mesh::from_parts`],
/// the generators or the importer:
/// - every face index is `< vertex_count()`
/// - every face has three distinct corners
///
/// An empty mesh is valid and every operator treats it as a no-op input.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face([0, 1, 2]);
/// assert!(mesh.validate().is_ok());
/// ```
///
/// Deserialization goes through [`Mesh::from_parts`], so a snapshot with
/// broken faces is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshParts")]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices into `vertices`
    faces: Vec<[u32; 3]>,
}

/// Unvalidated wire form of a [`Mesh`].
#[derive(Deserialize)]
struct MeshParts {
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl TryFrom<MeshParts> for Mesh {
    type Error = MeshError;

    fn try_from(parts: MeshParts) -> Result<Self, Self::Error> {
        Mesh::from_parts(parts.vertices, parts.faces)
    }
}

/// Why a single face fails the mesh invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceDefect {
    /// A corner index is not below the vertex count.
    OutOfRange(u32),
    /// Two corners share an index.
    Degenerate,
}

/// Checks one face against a vertex count.
///
/// Range is checked before degeneracy, so a face that is both reports
/// the out-of-range index.
pub fn face_defect(face: [u32; 3], vertex_count: usize) -> Option<FaceDefect> {
    if let Some(&index) = face.iter().find(|&&i| i as usize >= vertex_count) {
        return Some(FaceDefect::OutOfRange(index));
    }
    if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
        return Some(FaceDefect::Degenerate);
    }
    None
}

fn check_faces(faces: &[[u32; 3]], vertex_count: usize) -> Result<(), MeshError> {
    for (face, &corners) in faces.iter().enumerate() {
        match face_defect(corners, vertex_count) {
            None => {}
            Some(FaceDefect::OutOfRange(index)) => {
                return Err(MeshError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
            Some(FaceDefect::Degenerate) => {
                return Err(MeshError::DegenerateFace { face, corners });
            }
        }
    }
    Ok(())
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Builds a mesh from raw buffers, rejecting any face that breaks
    /// the invariants.
    pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        let mesh = Self { vertices, faces };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Builds a mesh whose faces are already known to be valid.
    pub(crate) fn from_trusted_parts(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Self {
        debug_assert!(check_faces(&faces, vertices.len()).is_ok());
        Self { vertices, faces }
    }

    /// Splits the mesh into its vertex and face buffers.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (self.vertices, self.faces)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices. Not checked; see [`Mesh::validate`].
    pub fn add_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    /// Returns a mesh with the same topology and new vertex positions.
    ///
    /// This is how transformed buffers are put back together with their
    /// faces; the replacement must have exactly the same length.
    pub fn with_vertices(&self, vertices: Vec<DVec3>) -> Result<Self, MeshError> {
        if vertices.len() != self.vertices.len() {
            return Err(MeshError::validation(format!(
                "replacement buffer has {} vertices, mesh has {}",
                vertices.len(),
                self.vertices.len()
            )));
        }
        Ok(Self {
            vertices,
            faces: self.faces.clone(),
        })
    }

    /// Arithmetic mean of all vertex positions (zero for an empty mesh).
    pub fn centroid(&self) -> DVec3 {
        transform::centroid(&self.vertices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or (ZERO, ZERO) for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates every face against the mesh invariants.
    ///
    /// Returns the first offending face as an error.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_faces(&self.faces, self.vertices.len())
    }

    /// Drops every face that references a missing vertex or repeats a
    /// corner. Returns how many faces were removed.
    pub fn retain_valid_faces(&mut self) -> usize {
        let before = self.faces.len();
        let vertex_count = self.vertices.len();
        self.faces
            .retain(|&face| face_defect(face, vertex_count).is_none());
        before - self.faces.len()
    }
}
