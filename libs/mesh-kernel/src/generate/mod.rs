//! # Procedural Generators
//!
//! Builds meshes from parameters instead of files:
//! - **Rotation surfaces**: a 2D profile revolved about a world axis
//! - **Function surfaces**: a height field `z = f(x, y)` over a grid
//!
//! Both emit quads as two triangles with the same fixed winding,
//! `(a, b, c)` and `(a, c, d)`.

mod function;
mod presets;
mod rotation;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

pub use function::{function_surface, function_surface_with, FunctionSurfaceParams};
pub use presets::{cylinder, paraboloid, ripple, sinc, sphere};
pub use rotation::{rotation_surface, RotationParams};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// World axis a profile is revolved about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Revolve about X: `(x, y·cosθ, y·sinθ)`
    X,
    /// Revolve about Y: `(x·cosθ, y, x·sinθ)`
    #[default]
    Y,
    /// Revolve about Z: `(x·cosθ, x·sinθ, y)`
    Z,
}

impl Axis {
    /// Maps a profile point into 3D for the angle with the given cosine
    /// and sine.
    #[inline]
    pub fn revolve(self, point: DVec2, cos: f64, sin: f64) -> DVec3 {
        let DVec2 { x, y } = point;
        match self {
            Self::X => DVec3::new(x, y * cos, y * sin),
            Self::Y => DVec3::new(x * cos, y, x * sin),
            Self::Z => DVec3::new(x * cos, x * sin, y),
        }
    }
}

impl FromStr for Axis {
    type Err = MeshError;

    /// Accepts `x`, `y`, `z` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            "z" | "Z" => Ok(Self::Z),
            other => Err(MeshError::validation(format!(
                "axis must be 'x', 'y' or 'z', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Revolves `profile` about the axis named by `axis` (`"x"`, `"y"`, `"z"`).
///
/// Same as [`rotation_surface`] with default limits, for callers holding
/// the axis as text.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use mesh_kernel::generate::generate_rotation_surface;
///
/// let profile = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// let mesh = generate_rotation_surface(&profile, "y", 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 24);
///
/// assert!(generate_rotation_surface(&profile, "w", 4).is_err());
/// ```
pub fn generate_rotation_surface(
    profile: &[DVec2],
    axis: &str,
    segments: u32,
) -> Result<Mesh, MeshError> {
    let params = RotationParams {
        axis: axis.parse()?,
        segments,
        ..RotationParams::default()
    };
    rotation_surface(profile, &params)
}

/// Samples `expression` over the given ranges on a
/// `subdivisions × subdivisions` grid, with default limits.
pub fn generate_function_surface(
    expression: &str,
    x_range: (f64, f64),
    y_range: (f64, f64),
    subdivisions: u32,
) -> Result<Mesh, MeshError> {
    let params = FunctionSurfaceParams {
        x_range,
        y_range,
        subdivisions,
        ..FunctionSurfaceParams::default()
    };
    function_surface(expression, &params)
}

/// `count` evenly spaced values from `min` to `max`, both inclusive.
///
/// The last value is pinned to `max` exactly.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = count - 1;
            let step = (max - min) / last as f64;
            (0..count)
                .map(|i| if i == last { max } else { min + step * i as f64 })
                .collect()
        }
    }
}

/// Emits the quad `a-b-c-d` as triangles `(a, b, c)` and `(a, c, d)`.
#[inline]
pub(crate) fn push_quad(faces: &mut Vec<[u32; 3]>, a: u32, b: u32, c: u32, d: u32) {
    faces.push([a, b, c]);
    faces.push([a, c, d]);
}

/// Fails if `count` vertices cannot be addressed by `u32` face indices.
pub(crate) fn check_vertex_budget(count: usize) -> Result<(), MeshError> {
    let max = u32::MAX as usize;
    if count > max {
        return Err(MeshError::TooManyVertices { count, max });
    }
    Ok(())
}
