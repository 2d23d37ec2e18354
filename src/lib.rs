//! # map-options
//!
//! Initial-state configuration for a map surface.
//!
//! A [`MapOptions`] record collects everything a map surface needs before its
//! first frame: the camera pose, placement of the compass, logo and
//! attribution, gesture toggles, zoom bounds and the look of the
//! user-location indicator. Records come from three places:
//!
//! - fluent setters on [`MapOptions`]
//! - [`import_from`], which reads a styled [`AttributeSource`] with literal
//!   defaults and converts dimensions to device pixels
//! - [`decode`], which reads the flat binary layout written by [`encode`]
//!
//! ```
//! use map_options::{import_from, AttributeSet, Attribute};
//!
//! let attributes = AttributeSet::new().with(Attribute::CompassMarginTop, 24.0);
//! let options = import_from(attributes, 2.0).unwrap();
//! assert_eq!(options.compass_margins(), Some([20, 48, 20, 20]));
//!
//! let bytes = map_options::encode(&options).unwrap();
//! let restored = map_options::decode(&bytes).unwrap();
//! assert_eq!(restored, options.without_location_images());
//! ```

pub mod attributes;
pub mod core;
pub mod data;
pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    camera::CameraPosition,
    geo::LatLng,
    gravity,
    image::{BuiltInImage, ImageHandle},
    options::MapOptions,
};

pub use attributes::{
    import_from, Attribute, AttributeError, AttributeKind, AttributeSet, AttributeSource,
    AttributeValue,
};

pub use data::{decode, encode, CodecError, RecordFormat};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapOptionsError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapOptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Error type alias for convenience
pub type Error = MapOptionsError;

/// Read a JSON attribute file and import options from it
#[cfg(feature = "json")]
pub fn import_json_file(path: impl AsRef<std::path::Path>, density: f32) -> Result<MapOptions> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let attributes = AttributeSet::from_json(&text)?;
    log::info!("loaded {} attributes from {}", attributes.len(), path.display());
    Ok(import_from(attributes, density)?)
}
