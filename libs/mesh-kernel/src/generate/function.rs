//! # Function Surfaces
//!
//! Samples a height field `z = f(x, y)` on a regular `S × S` grid and
//! stitches neighbouring samples into triangles.
//!
//! Vertex `(i, j)` (`i` along x, `j` along y) lives at index `i·S + j`.
//! Samples that fail to evaluate (division by zero, domain errors,
//! overflow) fall back to `z = 0` so the grid stays complete.

use config::constants::{
    DEFAULT_SUBDIVISIONS, DEFAULT_SURFACE_RANGE, MIN_SUBDIVISIONS, PARALLEL_VERTEX_THRESHOLD,
};
use config::limits::KernelLimits;
use glam::DVec3;
use rayon::prelude::*;
use surface_expr::Expression;
use tracing::{debug, warn};

use super::{check_vertex_budget, linspace, push_quad};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Parameters for a function surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionSurfaceParams {
    /// Inclusive sampling range along x.
    pub x_range: (f64, f64),
    /// Inclusive sampling range along y.
    pub y_range: (f64, f64),
    /// Samples per axis (at least 2).
    pub subdivisions: u32,
    /// Ceiling applied to `subdivisions`.
    pub limits: KernelLimits,
}

impl Default for FunctionSurfaceParams {
    fn default() -> Self {
        Self {
            x_range: DEFAULT_SURFACE_RANGE,
            y_range: DEFAULT_SURFACE_RANGE,
            subdivisions: DEFAULT_SUBDIVISIONS,
            limits: KernelLimits::default(),
        }
    }
}

/// Parses `expression` and samples it over the grid described by `params`.
///
/// An expression that does not parse yields a flat `z = 0` surface over
/// the same grid rather than an error.
///
/// # Errors
///
/// [`MeshError::Validation`] if `subdivisions < 2` or either range is not
/// finite.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::generate::{function_surface, FunctionSurfaceParams};
///
/// let params = FunctionSurfaceParams { subdivisions: 3, ..Default::default() };
/// let mesh = function_surface("x + y", &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.face_count(), 8);
/// ```
pub fn function_surface(expression: &str, params: &FunctionSurfaceParams) -> Result<Mesh, MeshError> {
    match Expression::parse(expression) {
        Ok(parsed) => build(Some(&parsed), params),
        Err(err) => {
            warn!(%expression, error = %err, "unparsable surface expression, using z = 0");
            build(None, params)
        }
    }
}

/// Samples an already parsed expression over the grid described by
/// `params`.
pub fn function_surface_with(
    expression: &Expression,
    params: &FunctionSurfaceParams,
) -> Result<Mesh, MeshError> {
    build(Some(expression), params)
}

fn build(expression: Option<&Expression>, params: &FunctionSurfaceParams) -> Result<Mesh, MeshError> {
    if params.subdivisions < MIN_SUBDIVISIONS {
        return Err(MeshError::validation(format!(
            "subdivisions must be >= {MIN_SUBDIVISIONS}, got {}",
            params.subdivisions
        )));
    }
    check_range("x_range", params.x_range)?;
    check_range("y_range", params.y_range)?;

    let subdivisions = params.limits.clamp_subdivisions(params.subdivisions);
    if subdivisions != params.subdivisions {
        warn!(
            requested = params.subdivisions,
            ceiling = subdivisions,
            "clamping function surface subdivisions"
        );
    }

    let s = subdivisions as usize;
    let vertex_count = s * s;
    check_vertex_budget(vertex_count)?;

    let xs = linspace(params.x_range.0, params.x_range.1, s);
    let ys = linspace(params.y_range.0, params.y_range.1, s);

    let sample = |index: usize| -> (DVec3, bool) {
        let (x, y) = (xs[index / s], ys[index % s]);
        match expression.map(|e| e.eval(x, y)) {
            Some(Ok(z)) => (DVec3::new(x, y, z), false),
            Some(Err(_)) => (DVec3::new(x, y, 0.0), true),
            None => (DVec3::new(x, y, 0.0), false),
        }
    };

    let samples: Vec<(DVec3, bool)> = if vertex_count >= PARALLEL_VERTEX_THRESHOLD {
        (0..vertex_count).into_par_iter().map(sample).collect()
    } else {
        (0..vertex_count).map(sample).collect()
    };

    let fallbacks = samples.iter().filter(|(_, failed)| *failed).count();
    if fallbacks > 0 {
        warn!(
            expression = expression.map(Expression::source).unwrap_or_default(),
            fallbacks,
            "surface samples failed to evaluate, using z = 0"
        );
    }
    let vertices: Vec<DVec3> = samples.into_iter().map(|(v, _)| v).collect();

    let mut faces = Vec::with_capacity(2 * (s - 1) * (s - 1));
    let n = subdivisions;
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let idx1 = i * n + j;
            let idx2 = i * n + j + 1;
            let idx3 = (i + 1) * n + j + 1;
            let idx4 = (i + 1) * n + j;
            push_quad(&mut faces, idx1, idx2, idx3, idx4);
        }
    }

    debug!(
        subdivisions,
        vertices = vertices.len(),
        faces = faces.len(),
        "built function surface"
    );

    Ok(Mesh::from_trusted_parts(vertices, faces))
}

fn check_range(name: &str, (min, max): (f64, f64)) -> Result<(), MeshError> {
    if min.is_finite() && max.is_finite() {
        Ok(())
    } else {
        Err(MeshError::validation(format!(
            "{name} must be finite, got ({min}, {max})"
        )))
    }
}
