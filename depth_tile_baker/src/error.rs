//! Error types for the depth tile baker
//!
//! This module defines the error type used throughout the crate,
//! covering the renderer backend, capture requests, GPU readback,
//! tile encoding and tile persistence.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result type for baker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Baker errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (software rasterizer, GPU API, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, shader, command list, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, renderer, subsystems)
    InitializationFailed(String),

    /// Capture request or manifest content rejected before any GPU work
    InvalidRequest(String),

    /// A required shader or asset could not be located
    ResourceLoad(String),

    /// The GPU to host transfer reported a failure
    Readback(String),

    /// PNG encoding or decoding failed
    Encode(String),

    /// Directory creation, file write or file read failed
    Filesystem {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },
}

impl Error {
    /// Build a `Filesystem` error from an I/O error and the path it concerns
    pub fn filesystem(path: &Path, error: &io::Error) -> Self {
        Error::Filesystem {
            path: path.to_path_buf(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Error::ResourceLoad(msg) => write!(f, "Resource load failed: {}", msg),
            Error::Readback(msg) => write!(f, "Readback failed: {}", msg),
            Error::Encode(msg) => write!(f, "Encode failed: {}", msg),
            Error::Filesystem { path, message, .. } => {
                write!(f, "Filesystem error at {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error (with file:line) and build the matching `Error`
///
/// Without a variant name the error is a `BackendError`.
///
/// # Example
///
/// ```no_run
/// use depth_tile_baker::baker_err;
///
/// let a = baker_err!("baker::Capture", "Texture {} missing", "scene_depth");
/// let b = baker_err!(ResourceLoad, "baker::Capture", "Shader '{}' not found", "SceneDepth");
/// ```
#[macro_export]
macro_rules! baker_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::baker_error!($source, "{}", message);
        $crate::baker::Error::$variant(message)
    }};
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::baker_error!($source, "{}", message);
        $crate::baker::Error::BackendError(message)
    }};
}

/// Log an error and return it from the current function
///
/// # Example
///
/// ```no_run
/// use depth_tile_baker::baker_bail;
///
/// fn check(width: u32) -> depth_tile_baker::baker::Result<()> {
///     if width == 0 {
///         baker_bail!(InvalidRequest, "baker::Request", "width must be > 0");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! baker_bail {
    ($($arg:tt)*) => {
        return Err($crate::baker_err!($($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
