//! Opaque image handles for the user-location indicator.
//!
//! A handle only names an image owned elsewhere (a resource table, a texture
//! cache). Two handles are equal when they name the same image; pixel data is
//! never looked at.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Images shipped with the map surface, used when no custom image is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltInImage {
    LocationForeground,
    LocationBearing,
    LocationBackground,
}

impl BuiltInImage {
    /// Resource name of the built-in image
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocationForeground => "ic_mylocationview_normal",
            Self::LocationBearing => "ic_mylocationview_bearing",
            Self::LocationBackground => "ic_mylocationview_background",
        }
    }
}

/// Reference to an externally owned image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageHandle {
    /// One of the images bundled with the map surface
    BuiltIn(BuiltInImage),
    /// Identifier issued by an attribute source or resource table
    Resource(u32),
}

impl From<BuiltInImage> for ImageHandle {
    fn from(image: BuiltInImage) -> Self {
        Self::BuiltIn(image)
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn(image) => write!(f, "@builtin/{}", image.name()),
            Self::Resource(id) => write!(f, "@resource/{:#010x}", id),
        }
    }
}
