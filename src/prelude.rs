//! Prelude module for common map-options types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use map_options::prelude::*;`

pub use crate::core::{
    camera::{CameraPosition, CameraPositionBuilder},
    constants::{MAXIMUM_ZOOM, MINIMUM_ZOOM, NO_TINT},
    geo::LatLng,
    gravity,
    image::{BuiltInImage, ImageHandle},
    options::MapOptions,
};

pub use crate::attributes::{import_from, Attribute, AttributeSet, AttributeSource};

pub use crate::data::{decode, encode, RecordFormat};

pub use crate::{Error, Result};
