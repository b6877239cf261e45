//! # Generator Tests
//!
//! Rotation and function surfaces, their presets and parameter guards.

use super::*;
use approx::assert_relative_eq;
use config::limits::KernelLimits;
use surface_expr::Expression;

fn unit_square_profile() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ]
}

// =============================================================================
// AXIS
// =============================================================================

#[test]
fn test_axis_parses_either_case() {
    assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
    assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
    assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
    assert_eq!(Axis::default(), Axis::Y);
    assert_eq!(Axis::Z.to_string(), "z");
}

#[test]
fn test_axis_rejects_unknown_tag() {
    let err = "w".parse::<Axis>().unwrap_err();
    assert!(matches!(err, MeshError::Validation { .. }));
}

#[test]
fn test_axis_revolve_quarter_turn() {
    let p = DVec2::new(2.0, 3.0);
    assert_eq!(Axis::X.revolve(p, 0.0, 1.0), DVec3::new(2.0, 0.0, 3.0));
    assert_eq!(Axis::Y.revolve(p, 0.0, 1.0), DVec3::new(0.0, 3.0, 2.0));
    assert_eq!(Axis::Z.revolve(p, 0.0, 1.0), DVec3::new(0.0, 2.0, 3.0));
}

// =============================================================================
// ROTATION SURFACE
// =============================================================================

#[test]
fn test_rotation_surface_counts() {
    let mesh = generate_rotation_surface(&unit_square_profile(), "y", 4).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.face_count(), 24);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_rotation_surface_face_layout() {
    let mesh = generate_rotation_surface(&unit_square_profile(), "y", 4).unwrap();
    let faces = mesh.faces();

    // First quad joins ring 0 to ring 1.
    assert_eq!(faces[0], [0, 1, 5]);
    assert_eq!(faces[1], [0, 5, 4]);

    // Last ring wraps back to ring 0.
    let n = faces.len();
    assert_eq!(faces[n - 2], [14, 15, 3]);
    assert_eq!(faces[n - 1], [14, 3, 2]);
}

#[test]
fn test_rotation_surface_ring_positions() {
    let mesh = generate_rotation_surface(&unit_square_profile(), "y", 4).unwrap();

    // Ring 0 is the profile itself in the XY plane.
    assert_eq!(mesh.vertices()[1], DVec3::new(1.0, 0.0, 0.0));

    // Ring 1 is a quarter turn: x maps onto +z.
    let v = mesh.vertices()[5];
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(v.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_surface_rejects_bad_params() {
    let profile = unit_square_profile();

    let too_few_segments = RotationParams::around(Axis::Y, 2);
    assert!(matches!(
        rotation_surface(&profile, &too_few_segments),
        Err(MeshError::Validation { .. })
    ));

    let single_point = [DVec2::new(1.0, 0.0)];
    assert!(matches!(
        rotation_surface(&single_point, &RotationParams::default()),
        Err(MeshError::Validation { .. })
    ));

    assert!(generate_rotation_surface(&profile, "w", 4).is_err());
}

#[test]
fn test_rotation_surface_clamps_segments() {
    let params = RotationParams {
        segments: 100,
        limits: KernelLimits::new(8, 64).unwrap(),
        ..RotationParams::default()
    };
    let mesh = rotation_surface(&unit_square_profile(), &params).unwrap();
    assert_eq!(mesh.vertex_count(), 8 * 4);
}

#[test]
fn test_rotation_surface_unchecked_ceiling_stays_valid() {
    let params = RotationParams {
        segments: 8,
        limits: KernelLimits {
            max_segments: 1,
            max_subdivisions: 64,
        },
        ..RotationParams::default()
    };
    let mesh = rotation_surface(&unit_square_profile(), &params).unwrap();
    assert_eq!(mesh.vertex_count(), 3 * 4);
    assert_eq!(mesh.face_count(), 2 * 3 * 3);
    assert!(mesh.validate().is_ok());
}

// =============================================================================
// FUNCTION SURFACE
// =============================================================================

#[test]
fn test_function_surface_grid_layout() {
    let mesh = generate_function_surface("x**2 + y**2", (-1.0, 1.0), (-1.0, 1.0), 3).unwrap();
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.face_count(), 8);

    // Vertex (i, j) sits at i·S + j with x from i and y from j.
    assert_eq!(mesh.vertices()[5], DVec3::new(0.0, 1.0, 1.0));
    assert_eq!(mesh.vertices()[0], DVec3::new(-1.0, -1.0, 2.0));

    assert_eq!(mesh.faces()[0], [0, 1, 4]);
    assert_eq!(mesh.faces()[1], [0, 4, 3]);
}

#[test]
fn test_function_surface_failed_samples_are_flat() {
    let mesh = generate_function_surface("1 / x", (-1.0, 1.0), (-1.0, 1.0), 3).unwrap();
    let z: Vec<f64> = mesh.vertices().iter().map(|v| v.z).collect();
    assert_eq!(z, vec![-1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_function_surface_unparsable_expression_is_flat() {
    for source in ["x +* y", "import os", "__import__('os')", ""] {
        let mesh = generate_function_surface(source, (-1.0, 1.0), (-1.0, 1.0), 4).unwrap();
        assert_eq!(mesh.vertex_count(), 16, "{source}");
        assert!(mesh.vertices().iter().all(|v| v.z == 0.0), "{source}");
    }
}

#[test]
fn test_function_surface_rejects_bad_params() {
    assert!(matches!(
        generate_function_surface("x", (-1.0, 1.0), (-1.0, 1.0), 1),
        Err(MeshError::Validation { .. })
    ));
    assert!(matches!(
        generate_function_surface("x", (f64::NAN, 1.0), (-1.0, 1.0), 4),
        Err(MeshError::Validation { .. })
    ));
}

#[test]
fn test_function_surface_clamps_subdivisions() {
    let params = FunctionSurfaceParams {
        subdivisions: 10,
        limits: KernelLimits::new(16, 4).unwrap(),
        ..FunctionSurfaceParams::default()
    };
    let mesh = function_surface("x * y", &params).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.face_count(), 18);
}

#[test]
fn test_function_surface_unchecked_ceiling_stays_valid() {
    let params = FunctionSurfaceParams {
        subdivisions: 4,
        limits: KernelLimits {
            max_segments: 16,
            max_subdivisions: 0,
        },
        ..FunctionSurfaceParams::default()
    };
    let mesh = function_surface("x", &params).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 2);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_function_surface_with_parsed_expression() {
    let expr = Expression::parse("2 * x").unwrap();
    let params = FunctionSurfaceParams {
        x_range: (0.0, 1.0),
        y_range: (0.0, 1.0),
        subdivisions: 2,
        ..FunctionSurfaceParams::default()
    };
    let mesh = function_surface_with(&expr, &params).unwrap();
    assert_eq!(mesh.vertices()[2], DVec3::new(1.0, 0.0, 2.0));
}

#[test]
fn test_function_surface_parallel_grid_keeps_order() {
    let params = FunctionSurfaceParams {
        subdivisions: 200,
        ..FunctionSurfaceParams::default()
    };
    let mesh = function_surface("x - y", &params).unwrap();
    let xs = linspace(-3.0, 3.0, 200);

    assert_eq!(mesh.vertex_count(), 40_000);
    let v = mesh.vertices()[200 + 2];
    assert_eq!(v.x, xs[1]);
    assert_eq!(v.y, xs[2]);
    assert_eq!(v.z, xs[1] - xs[2]);
}

#[test]
fn test_linspace_pins_upper_bound() {
    assert_eq!(*linspace(-3.0, 3.0, 20).last().unwrap(), 3.0);
    assert_eq!(*linspace(0.1, 0.7, 7).last().unwrap(), 0.7);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

// =============================================================================
// PRESETS
// =============================================================================

#[test]
fn test_cylinder_preset() {
    let mesh = cylinder(1.0, 2.0, 16).unwrap();
    assert_eq!(mesh.vertex_count(), 64);
    assert_eq!(mesh.face_count(), 96);

    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.y, -1.0);
    assert_relative_eq!(max.y, 1.0);
}

#[test]
fn test_sphere_preset_lies_on_radius() {
    let mesh = sphere(2.0, 16).unwrap();
    assert_eq!(mesh.vertex_count(), 16 * 9);
    assert_eq!(mesh.face_count(), 2 * 16 * 8);
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 2.0, epsilon = 1e-12);
    }
    assert!(sphere(1.0, 2).is_err());
}

#[test]
fn test_function_presets() {
    let bowl = paraboloid(20).unwrap();
    assert_eq!(bowl.vertex_count(), 400);
    assert_eq!(bowl.face_count(), 722);
    assert_eq!(bowl.vertices()[0].z, 2.0);

    let wave = sinc(20).unwrap();
    assert!(wave.vertices().iter().all(|v| v.z.is_finite() && v.z <= 1.0));

    let rings = ripple(10).unwrap();
    assert_eq!(rings.vertex_count(), 100);
    let (min, max) = rings.bounding_box();
    assert_eq!((min.x, max.x), (-2.0, 2.0));
}
