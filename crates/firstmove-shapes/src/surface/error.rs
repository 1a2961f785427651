use std::fmt;
use std::io;

/// Failure inside a concrete surface while emitting a shape set.
///
/// Not part of the [`DrawingSurface`](super::DrawingSurface) contract;
/// writer-backed surfaces keep the last one for the caller to inspect.
#[derive(Debug)]
pub enum SurfaceError {
    Serialize(serde_json::Error),
    Write(io::Error),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Serialize(e) => write!(f, "failed to serialize shapes: {e}"),
            SurfaceError::Write(e) => write!(f, "failed to write shapes: {e}"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::Serialize(e) => Some(e),
            SurfaceError::Write(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SurfaceError {
    fn from(e: serde_json::Error) -> Self {
        SurfaceError::Serialize(e)
    }
}

impl From<io::Error> for SurfaceError {
    fn from(e: io::Error) -> Self {
        SurfaceError::Write(e)
    }
}
