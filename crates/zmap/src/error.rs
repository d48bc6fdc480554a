use std::error::Error;
use std::fmt;

/// Errors raised while building paths, mappings and figures.
#[derive(Debug)]
pub enum ZmapError {
    EmptyPath,
    InvalidSampleCount(usize),
    InvalidSegment(String),
    UnknownTransform(String),
    Io(std::io::Error),
}

impl fmt::Display for ZmapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZmapError::EmptyPath => write!(f, "Sample path must contain at least one point"),
            ZmapError::InvalidSampleCount(count) => {
                write!(f, "Highlight sample count must be positive, got {}", count)
            }
            ZmapError::InvalidSegment(msg) => write!(f, "Invalid path segment: {}", msg),
            ZmapError::UnknownTransform(name) => write!(
                f,
                "Unknown transform: {}. Expected one of: square, cube, inverse, exp",
                name
            ),
            ZmapError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for ZmapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ZmapError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ZmapError {
    fn from(e: std::io::Error) -> Self {
        ZmapError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, ZmapError>;
