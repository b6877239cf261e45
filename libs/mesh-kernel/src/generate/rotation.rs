//! # Rotation Surfaces
//!
//! Revolves an open 2D profile about a world axis.
//!
//! ## Algorithm
//!
//! 1. For each of `N` angles `θ_i = i·2π/N`, emit one rotated copy of every
//!    profile point (ring `i`, `L` vertices).
//! 2. Join ring `i` to ring `(i + 1) mod N` with one quad per profile
//!    segment. The last ring wraps to the first, so there is no seam.
//!
//! No caps are added; a closed solid needs a profile that starts and ends
//! on the axis.

use std::f64::consts::TAU;

use config::constants::{DEFAULT_SEGMENTS, MIN_PROFILE_POINTS, MIN_SEGMENTS};
use config::limits::KernelLimits;
use glam::DVec2;
use tracing::{debug, warn};

use super::{check_vertex_budget, push_quad, Axis};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Parameters for a rotation surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationParams {
    /// Axis of revolution.
    pub axis: Axis,
    /// Number of rings around the axis (at least 3).
    pub segments: u32,
    /// Ceiling applied to `segments`.
    pub limits: KernelLimits,
}

impl RotationParams {
    /// Parameters for `segments` rings about `axis` with default limits.
    pub fn around(axis: Axis, segments: u32) -> Self {
        Self {
            axis,
            segments,
            ..Self::default()
        }
    }
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            segments: DEFAULT_SEGMENTS,
            limits: KernelLimits::default(),
        }
    }
}

/// Revolves a profile into a mesh of `N·L` vertices and `2·N·(L-1)`
/// triangles.
///
/// # Errors
///
/// [`MeshError::Validation`] if the profile has fewer than two points or
/// `segments < 3`. Nothing is built in that case. A segment count above
/// the ceiling is clamped rather than rejected.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use mesh_kernel::generate::{rotation_surface, Axis, RotationParams};
///
/// let profile = [DVec2::new(1.0, 0.0), DVec2::new(1.0, 2.0)];
/// let params = RotationParams { axis: Axis::Y, segments: 8, ..Default::default() };
/// let tube = rotation_surface(&profile, &params).unwrap();
/// assert_eq!(tube.vertex_count(), 16);
/// assert_eq!(tube.face_count(), 16);
/// ```
pub fn rotation_surface(profile: &[DVec2], params: &RotationParams) -> Result<Mesh, MeshError> {
    if profile.len() < MIN_PROFILE_POINTS {
        return Err(MeshError::validation(format!(
            "profile needs at least {MIN_PROFILE_POINTS} points, got {}",
            profile.len()
        )));
    }
    if params.segments < MIN_SEGMENTS {
        return Err(MeshError::validation(format!(
            "segments must be >= {MIN_SEGMENTS}, got {}",
            params.segments
        )));
    }

    let segments = params.limits.clamp_segments(params.segments);
    if segments != params.segments {
        warn!(
            requested = params.segments,
            ceiling = segments,
            "clamping rotation surface segments"
        );
    }

    let rings = segments as usize;
    let ring_len = profile.len();
    let vertex_count = rings * ring_len;
    check_vertex_budget(vertex_count)?;

    let step = TAU / segments as f64;
    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..rings {
        let (sin, cos) = (i as f64 * step).sin_cos();
        vertices.extend(profile.iter().map(|&p| params.axis.revolve(p, cos, sin)));
    }

    let mut faces = Vec::with_capacity(2 * rings * (ring_len - 1));
    let l = ring_len as u32;
    for i in 0..segments {
        let next_i = (i + 1) % segments;
        for j in 0..l - 1 {
            let idx1 = i * l + j;
            let idx2 = i * l + j + 1;
            let idx3 = next_i * l + j + 1;
            let idx4 = next_i * l + j;
            push_quad(&mut faces, idx1, idx2, idx3, idx4);
        }
    }

    debug!(
        axis = %params.axis,
        segments,
        vertices = vertices.len(),
        faces = faces.len(),
        "built rotation surface"
    );

    Ok(Mesh::from_trusted_parts(vertices, faces))
}
