//! # Mesh Errors
//!
//! Error types for mesh construction, generation, import and export.
//!
//! Per-line import problems are not errors; they are collected as
//! [`crate::io::ObjWarning`] diagnostics and never abort an import.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by mesh construction and the generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Caller-supplied parameters were rejected; no mesh was produced.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// A face references a vertex that does not exist.
    #[error("Face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A face has fewer than three distinct corners.
    #[error("Face {face} is degenerate: {corners:?}")]
    DegenerateFace { face: usize, corners: [u32; 3] },

    /// The mesh would not be addressable with 32-bit indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Fatal import failures. The stream could not be opened or read.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source file could not be opened.
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an opened stream failed.
    #[error("Read failed: {0}")]
    Read(#[from] io::Error),
}

/// Fatal export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination file could not be created.
    #[error("Cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the destination failed.
    #[error("Write failed: {0}")]
    Write(#[from] io::Error),
}
