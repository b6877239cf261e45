//! Size ceilings applied by the mesh generators.
//!
//! The generators clamp caller-supplied segment and subdivision counts to
//! these ceilings so memory stays bounded by `O(vertices + faces)`.

use std::fmt;

use crate::constants::{MAX_SEGMENTS, MAX_SUBDIVISIONS, MIN_SEGMENTS, MIN_SUBDIVISIONS};

/// Immutable snapshot of generator ceilings that can be shared between
/// crates and lowered per call.
///
/// # Examples
/// ```
/// use config::limits::KernelLimits;
/// let limits = KernelLimits::default();
/// assert!(limits.max_segments >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelLimits {
    /// Largest accepted angular segment count for rotation surfaces.
    pub max_segments: u32,
    /// Largest accepted per-axis subdivision count for function surfaces.
    pub max_subdivisions: u32,
}

impl KernelLimits {
    /// Builds limits enforcing that each ceiling still admits the smallest
    /// valid request.
    ///
    /// # Examples
    /// ```
    /// use config::limits::KernelLimits;
    /// let limits = KernelLimits::new(64, 128).expect("valid limits");
    /// assert_eq!(limits.max_subdivisions, 128);
    /// assert!(KernelLimits::new(2, 128).is_err());
    /// ```
    pub fn new(max_segments: u32, max_subdivisions: u32) -> Result<Self, ConfigError> {
        if max_segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegmentCeiling(max_segments));
        }
        if max_subdivisions < MIN_SUBDIVISIONS {
            return Err(ConfigError::InvalidSubdivisionCeiling(max_subdivisions));
        }
        Ok(Self {
            max_segments,
            max_subdivisions,
        })
    }

    /// Clamps a segment count to the ceiling. The lower bound is left to
    /// the caller, which reports it as a validation failure.
    ///
    /// The fields are public, so a ceiling below [`MIN_SEGMENTS`] can
    /// exist without going through [`KernelLimits::new`]; it is treated as
    /// [`MIN_SEGMENTS`].
    #[inline]
    pub fn clamp_segments(&self, segments: u32) -> u32 {
        segments.min(self.max_segments.max(MIN_SEGMENTS))
    }

    /// Clamps a subdivision count to the ceiling, with a ceiling below
    /// [`MIN_SUBDIVISIONS`] treated as [`MIN_SUBDIVISIONS`].
    #[inline]
    pub fn clamp_subdivisions(&self, subdivisions: u32) -> u32 {
        subdivisions.min(self.max_subdivisions.max(MIN_SUBDIVISIONS))
    }
}

impl Default for KernelLimits {
    fn default() -> Self {
        Self {
            max_segments: MAX_SEGMENTS,
            max_subdivisions: MAX_SUBDIVISIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the segment ceiling is below the minimum segment count.
    InvalidSegmentCeiling(u32),
    /// Raised when the subdivision ceiling is below the minimum grid size.
    InvalidSubdivisionCeiling(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegmentCeiling(value) => {
                write!(f, "max_segments must be >= {MIN_SEGMENTS}: {value}")
            }
            ConfigError::InvalidSubdivisionCeiling(value) => {
                write!(f, "max_subdivisions must be >= {MIN_SUBDIVISIONS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
