//! # Config Crate
//!
//! Centralized configuration constants for the mesh geometry kernel.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
//! use config::limits::KernelLimits;
//!
//! assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
//!
//! // Ceilings applied by the generators
//! let limits = KernelLimits::default();
//! assert_eq!(limits.clamp_segments(1_000_000), limits.max_segments);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants and a validated limits value
//! - **Bounded Memory**: Every caller-controlled size has a ceiling

pub mod constants;
pub mod limits;
