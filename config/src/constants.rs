//! # Configuration Constants
//!
//! Centralized constants for the mesh geometry kernel. Generator defaults
//! and safety ceilings are defined here.
//!
//! ## Categories
//!
//! - **Generators**: Default segment/subdivision counts and sample ranges
//! - **Limits**: Maximum values for safety bounds
//! - **Parallelism**: When vertex loops switch to worker threads

// =============================================================================
// ROTATION SURFACE CONSTANTS
// =============================================================================

/// Default number of angular segments for rotation surfaces.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_SEGMENTS), 16);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 16;

/// Minimum number of angular segments.
///
/// Fewer than three rings cannot enclose the rotation axis.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of angular segments.
///
/// Requests above this are clamped, bounding vertex memory to
/// `MAX_SEGMENTS * profile_len`.
pub const MAX_SEGMENTS: u32 = 4096;

/// Minimum number of profile points for a rotation surface.
pub const MIN_PROFILE_POINTS: usize = 2;

// =============================================================================
// FUNCTION SURFACE CONSTANTS
// =============================================================================

/// Default grid subdivisions per axis for function surfaces.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SUBDIVISIONS;
///
/// // 20 x 20 samples
/// assert_eq!(DEFAULT_SUBDIVISIONS * DEFAULT_SUBDIVISIONS, 400);
/// ```
pub const DEFAULT_SUBDIVISIONS: u32 = 20;

/// Minimum grid subdivisions per axis.
///
/// Two samples per axis are needed to form a single quad.
pub const MIN_SUBDIVISIONS: u32 = 2;

/// Maximum grid subdivisions per axis.
///
/// The grid holds `MAX_SUBDIVISIONS^2` vertices at most.
pub const MAX_SUBDIVISIONS: u32 = 2048;

/// Default sampling range on both axes of a function surface.
pub const DEFAULT_SURFACE_RANGE: (f64, f64) = (-3.0, 3.0);

/// Maximum nesting depth accepted by the expression parser.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_EXPRESSION_DEPTH;
///
/// let depth = 10;
/// assert!(depth < MAX_EXPRESSION_DEPTH);
/// ```
pub const MAX_EXPRESSION_DEPTH: usize = 256;

// =============================================================================
// PARALLELISM
// =============================================================================

/// Element count at which per-vertex and per-sample loops run on the
/// rayon thread pool instead of sequentially.
pub const PARALLEL_VERTEX_THRESHOLD: usize = 16_384;
