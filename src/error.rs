//! Error type for tileset and map loading.
//!
//! Render-time resolution misses are not represented here: a gid that fails
//! to resolve while drawing is skipped and logged, never raised as an error.

use std::fmt;
use std::io;

/// Error raised while loading a tileset descriptor or map document.
#[derive(Debug)]
pub enum MapError {
    /// Missing or malformed attribute, bad number, or broken XML.
    Parse(String),
    /// Declared geometry is internally inconsistent (columns or tile count
    /// not positive, packed row width off the declared sheet edge, layer
    /// data length not matching the layer dimensions).
    Validation(String),
    /// A populated tileset was queried for a local id it never stored.
    Lookup(String),
    /// File I/O error.
    Io(io::Error),
}

impl From<io::Error> for MapError {
    fn from(err: io::Error) -> Self {
        MapError::Io(err)
    }
}

impl From<quick_xml::Error> for MapError {
    fn from(err: quick_xml::Error) -> Self {
        MapError::Parse(format!("malformed XML: {}", err))
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Parse(msg) => write!(f, "parse error: {}", msg),
            MapError::Validation(msg) => write!(f, "validation error: {}", msg),
            MapError::Lookup(msg) => write!(f, "lookup error: {}", msg),
            MapError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            _ => None,
        }
    }
}
