//! # Affine Transforms
//!
//! Stateless vertex-buffer operators. Each takes a buffer (possibly empty)
//! and returns a new buffer of the same length; faces are never touched.
//!
//! Conventions:
//! - [`rotate`] turns about the **world origin**.
//! - [`scale`] scales about the **centroid** of the buffer.
//! - [`scale_origin`] scales about the world origin.
//!
//! None of the operators can fail. Non-finite parameters produce
//! non-finite coordinates.
//!
//! Buffers of at least [`PARALLEL_VERTEX_THRESHOLD`] vertices are mapped on
//! the rayon thread pool; output order always matches input order.

use config::constants::PARALLEL_VERTEX_THRESHOLD;
use glam::{DMat3, DVec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Maps every vertex through `f`, in parallel for large buffers.
fn map_vertices<F>(vertices: &[DVec3], f: F) -> Vec<DVec3>
where
    F: Fn(DVec3) -> DVec3 + Sync + Send,
{
    if vertices.len() >= PARALLEL_VERTEX_THRESHOLD {
        vertices.par_iter().map(|v| f(*v)).collect()
    } else {
        vertices.iter().map(|v| f(*v)).collect()
    }
}

/// Arithmetic mean of the vertex positions. Zero for an empty buffer.
pub fn centroid(vertices: &[DVec3]) -> DVec3 {
    if vertices.is_empty() {
        return DVec3::ZERO;
    }
    vertices.iter().copied().sum::<DVec3>() / vertices.len() as f64
}

/// Moves every vertex by `(dx, dy, dz)`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_kernel::transform::translate;
///
/// let moved = translate(&[DVec3::ZERO], 1.0, 2.0, 3.0);
/// assert_eq!(moved, vec![DVec3::new(1.0, 2.0, 3.0)]);
/// ```
pub fn translate(vertices: &[DVec3], dx: f64, dy: f64, dz: f64) -> Vec<DVec3> {
    let offset = DVec3::new(dx, dy, dz);
    map_vertices(vertices, |v| v + offset)
}

/// Builds the combined rotation `Rz · Ry · Rx` from angles in degrees.
///
/// Applied to a column vector, X is rotated first, then Y, then Z.
pub fn rotation_matrix(rx: f64, ry: f64, rz: f64) -> DMat3 {
    DMat3::from_rotation_z(rz.to_radians())
        * DMat3::from_rotation_y(ry.to_radians())
        * DMat3::from_rotation_x(rx.to_radians())
}

/// Rotates every vertex about the world origin by `rx`, `ry`, `rz`
/// degrees around the X, Y and Z axes (X applied first).
///
/// The mesh centroid is not used; an off-origin mesh orbits the origin.
pub fn rotate(vertices: &[DVec3], rx: f64, ry: f64, rz: f64) -> Vec<DVec3> {
    let rotation = rotation_matrix(rx, ry, rz);
    map_vertices(vertices, |v| rotation * v)
}

/// Scales every vertex per axis about the buffer's centroid.
///
/// The centroid is left where it is, unlike [`rotate`] which works about
/// the origin.
pub fn scale(vertices: &[DVec3], sx: f64, sy: f64, sz: f64) -> Vec<DVec3> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let center = centroid(vertices);
    let factors = DVec3::new(sx, sy, sz);
    map_vertices(vertices, |v| (v - center) * factors + center)
}

/// Scales every vertex per axis about the world origin.
pub fn scale_origin(vertices: &[DVec3], sx: f64, sy: f64, sz: f64) -> Vec<DVec3> {
    let factors = DVec3::new(sx, sy, sz);
    map_vertices(vertices, |v| v * factors)
}

/// One affine operation as a value, so a command layer can collect
/// parameters and dispatch later.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_kernel::AffineOp;
///
/// let op = AffineOp::Translate(DVec3::new(0.0, 0.0, 1.0));
/// assert_eq!(op.apply(&[DVec3::ZERO]), vec![DVec3::Z]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AffineOp {
    /// Offset per axis.
    Translate(DVec3),
    /// Angles in degrees about X, Y, Z; about the origin.
    Rotate(DVec3),
    /// Factors per axis; about the centroid.
    Scale(DVec3),
    /// Factors per axis; about the origin.
    ScaleOrigin(DVec3),
}

impl AffineOp {
    /// Applies the operation to a vertex buffer.
    pub fn apply(&self, vertices: &[DVec3]) -> Vec<DVec3> {
        match *self {
            Self::Translate(d) => translate(vertices, d.x, d.y, d.z),
            Self::Rotate(r) => rotate(vertices, r.x, r.y, r.z),
            Self::Scale(s) => scale(vertices, s.x, s.y, s.z),
            Self::ScaleOrigin(s) => scale_origin(vertices, s.x, s.y, s.z),
        }
    }

    /// Applies the operation to a mesh's vertices, keeping its faces.
    pub fn apply_to_mesh(&self, mesh: &Mesh) -> Mesh {
        Mesh::from_trusted_parts(self.apply(mesh.vertices()), mesh.faces().to_vec())
    }

    /// True if applying the operation leaves every vertex unchanged.
    pub fn is_identity(&self) -> bool {
        match *self {
            Self::Translate(v) | Self::Rotate(v) => v == DVec3::ZERO,
            Self::Scale(v) | Self::ScaleOrigin(v) => v == DVec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Vec<DVec3> {
        vec![
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(3.0, 2.0, 0.0),
            DVec3::new(2.0, 4.0, 6.0),
        ]
    }

    fn assert_buffers_eq(a: &[DVec3], b: &[DVec3]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-9);
            assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        assert!(translate(&[], 1.0, 2.0, 3.0).is_empty());
        assert!(rotate(&[], 10.0, 20.0, 30.0).is_empty());
        assert!(scale(&[], 2.0, 2.0, 2.0).is_empty());
        assert!(scale_origin(&[], 2.0, 2.0, 2.0).is_empty());
        assert_eq!(centroid(&[]), DVec3::ZERO);
    }

    #[test]
    fn test_translate_round_trip() {
        let v = sample();
        let back = translate(&translate(&v, 1.5, -2.0, 7.25), -1.5, 2.0, -7.25);
        assert_buffers_eq(&back, &v);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let out = rotate(&[DVec3::X], 0.0, 0.0, 90.0);
        assert_buffers_eq(&out, &[DVec3::Y]);
    }

    #[test]
    fn test_rotate_x_applied_before_z() {
        // X first: Y -> Z. Then Z leaves Z alone.
        let out = rotate(&[DVec3::Y], 90.0, 0.0, 90.0);
        assert_buffers_eq(&out, &[DVec3::Z]);
        // Z only would have moved Y to -X
        let z_only = rotate(&[DVec3::Y], 0.0, 0.0, 90.0);
        assert_buffers_eq(&z_only, &[-DVec3::X]);
    }

    #[test]
    fn test_rotate_y_direction() {
        // Ry maps +Z toward +X
        let out = rotate(&[DVec3::Z], 0.0, 90.0, 0.0);
        assert_buffers_eq(&out, &[DVec3::X]);
    }

    #[test]
    fn test_rotate_identity_and_full_turn() {
        let v = sample();
        assert_buffers_eq(&rotate(&v, 0.0, 0.0, 0.0), &v);
        assert_buffers_eq(&rotate(&v, 0.0, 0.0, 360.0), &v);
        assert_buffers_eq(&rotate(&v, 360.0, 360.0, 360.0), &v);
    }

    #[test]
    fn test_rotate_is_about_origin_not_centroid() {
        // Documented convention: an off-origin point orbits the origin.
        let out = rotate(&[DVec3::new(5.0, 0.0, 0.0)], 0.0, 0.0, 180.0);
        assert_buffers_eq(&out, &[DVec3::new(-5.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_scale_is_about_centroid() {
        // Documented convention: the centroid stays fixed.
        let v = sample();
        let out = scale(&v, 3.0, 0.5, -2.0);
        let before = centroid(&v);
        let after = centroid(&out);
        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-9);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-9);
        assert_abs_diff_eq!(before.z, after.z, epsilon = 1e-9);
    }

    #[test]
    fn test_scale_single_vertex_stays_put() {
        let out = scale(&[DVec3::new(4.0, 5.0, 6.0)], 10.0, 10.0, 10.0);
        assert_buffers_eq(&out, &[DVec3::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_scale_origin_multiplies() {
        let out = scale_origin(&[DVec3::new(1.0, 2.0, 3.0)], 2.0, 3.0, 4.0);
        assert_eq!(out, vec![DVec3::new(2.0, 6.0, 12.0)]);
    }

    #[test]
    fn test_identity_parameters() {
        let v = sample();
        assert_eq!(translate(&v, 0.0, 0.0, 0.0), v);
        assert_buffers_eq(&scale(&v, 1.0, 1.0, 1.0), &v);
        assert_eq!(scale_origin(&v, 1.0, 1.0, 1.0), v);
    }

    #[test]
    fn test_non_finite_parameters_propagate() {
        let out = translate(&[DVec3::ZERO], f64::NAN, 0.0, 0.0);
        assert!(out[0].x.is_nan());
        let out = scale_origin(&[DVec3::ONE], f64::INFINITY, 1.0, 1.0);
        assert!(out[0].x.is_infinite());
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let count = PARALLEL_VERTEX_THRESHOLD + 7;
        let big: Vec<DVec3> = (0..count)
            .map(|i| DVec3::new(i as f64, (i % 13) as f64, -(i as f64) * 0.5))
            .collect();
        let out = rotate(&big, 10.0, 20.0, 30.0);
        assert_eq!(out.len(), count);
        let r = rotation_matrix(10.0, 20.0, 30.0);
        for (i, v) in out.iter().enumerate().step_by(997) {
            assert_eq!(*v, r * big[i]);
        }
    }

    #[test]
    fn test_affine_op_apply_to_mesh() {
        let mesh = Mesh::from_parts(sample(), vec![[0, 1, 2]]).unwrap();
        let op = AffineOp::ScaleOrigin(DVec3::splat(2.0));
        let scaled = op.apply_to_mesh(&mesh);
        assert_eq!(scaled.faces(), mesh.faces());
        assert_eq!(scaled.vertex(1), Some(DVec3::new(6.0, 4.0, 0.0)));
        assert!(!op.is_identity());
        assert!(AffineOp::Rotate(DVec3::ZERO).is_identity());
    }
}
