//! Ready-made shapes built on the two generators.

use std::f64::consts::PI;

use config::constants::MIN_SEGMENTS;
use config::limits::KernelLimits;
use glam::DVec2;

use super::function::{function_surface, FunctionSurfaceParams};
use super::rotation::{rotation_surface, RotationParams};
use super::Axis;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Capped cylinder of the given radius and height, centred on the
/// origin, revolved about Y.
///
/// The profile runs from the axis out to the radius and back, so both ends
/// are closed by fans of triangles meeting on the axis.
pub fn cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    let half = height / 2.0;
    let profile = [
        DVec2::new(0.0, -half),
        DVec2::new(radius, -half),
        DVec2::new(radius, half),
        DVec2::new(0.0, half),
    ];
    rotation_surface(&profile, &RotationParams::around(Axis::Y, segments))
}

/// Sphere of the given radius, revolved about Y from a half-circle profile
/// of `segments / 2 + 1` points running pole to pole.
pub fn sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if segments < MIN_SEGMENTS {
        return Err(MeshError::validation(format!(
            "segments must be >= {MIN_SEGMENTS}, got {segments}"
        )));
    }
    // Sized from the clamped count so the profile stays bounded too.
    let segments = KernelLimits::default().clamp_segments(segments);
    let half = segments / 2;
    let profile: Vec<DVec2> = (0..=half)
        .map(|i| {
            let (sin, cos) = (PI * i as f64 / half as f64).sin_cos();
            DVec2::new(radius * sin, radius * cos)
        })
        .collect();
    rotation_surface(&profile, &RotationParams::around(Axis::Y, segments))
}

/// `x² + y²` over `[-1, 1]²`.
pub fn paraboloid(subdivisions: u32) -> Result<Mesh, MeshError> {
    function_surface("x**2 + y**2", &grid((-1.0, 1.0), subdivisions))
}

/// `sin(r) / r` over `[-3, 3]²`, offset to stay finite at the origin.
pub fn sinc(subdivisions: u32) -> Result<Mesh, MeshError> {
    function_surface(
        "np.sin(np.sqrt(x**2 + y**2)) / (np.sqrt(x**2 + y**2) + 1e-8)",
        &grid((-3.0, 3.0), subdivisions),
    )
}

/// `sin(x² + y²)` over `[-2, 2]²`.
pub fn ripple(subdivisions: u32) -> Result<Mesh, MeshError> {
    function_surface("np.sin(x**2 + y**2)", &grid((-2.0, 2.0), subdivisions))
}

fn grid(range: (f64, f64), subdivisions: u32) -> FunctionSurfaceParams {
    FunctionSurfaceParams {
        x_range: range,
        y_range: range,
        subdivisions,
        ..FunctionSurfaceParams::default()
    }
}
