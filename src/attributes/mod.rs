//! Styled attribute sources and the importer that turns them into options
//!
//! An attribute source is anything that can answer typed lookups over the
//! closed [`Attribute`] key set: a parsed theme, an XML layout, a JSON file.
//! The importer asks for every key with an explicit default and converts
//! dimensions from density-independent units to device pixels.

pub mod importer;
pub mod set;

pub use importer::import_from;
pub use set::{AttributeError, AttributeSet, AttributeValue};

use crate::core::image::ImageHandle;
use std::fmt;
use std::str::FromStr;

/// Value type an attribute is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Boolean,
    Integer,
    Float,
    /// Length in density-independent pixels
    Dimension,
    /// Packed ARGB colour
    Color,
    Image,
    String,
}

macro_rules! attributes {
    ($($variant:ident => $name:literal, $kind:ident;)*) => {
        /// Every attribute a map surface understands
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Attribute {
            $($variant,)*
        }

        impl Attribute {
            /// All attributes in declaration order
            pub const ALL: &'static [Attribute] = &[$(Attribute::$variant,)*];

            /// Name used in styled attribute files
            pub fn name(&self) -> &'static str {
                match self {
                    $(Attribute::$variant => $name,)*
                }
            }

            pub fn kind(&self) -> AttributeKind {
                match self {
                    $(Attribute::$variant => AttributeKind::$kind,)*
                }
            }
        }

        impl FromStr for Attribute {
            type Err = AttributeError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $($name => Ok(Attribute::$variant),)*
                    _ => Err(AttributeError::UnknownAttribute(name.to_string())),
                }
            }
        }
    };
}

attributes! {
    DebugActive => "debug_active", Boolean;

    CameraTargetLat => "camera_target_lat", Float;
    CameraTargetLng => "camera_target_lng", Float;
    CameraZoom => "camera_zoom", Float;
    CameraBearing => "camera_bearing", Float;
    CameraTilt => "camera_tilt", Float;

    AccessToken => "access_token", String;
    StyleUrl => "style_url", String;

    ZoomEnabled => "zoom_enabled", Boolean;
    ScrollEnabled => "scroll_enabled", Boolean;
    RotateEnabled => "rotate_enabled", Boolean;
    TiltEnabled => "tilt_enabled", Boolean;
    ZoomControlsEnabled => "zoom_controls_enabled", Boolean;
    ZoomMax => "zoom_max", Float;
    ZoomMin => "zoom_min", Float;

    CompassEnabled => "compass_enabled", Boolean;
    CompassGravity => "compass_gravity", Integer;
    CompassMarginLeft => "compass_margin_left", Dimension;
    CompassMarginTop => "compass_margin_top", Dimension;
    CompassMarginRight => "compass_margin_right", Dimension;
    CompassMarginBottom => "compass_margin_bottom", Dimension;

    LogoEnabled => "logo_enabled", Boolean;
    LogoGravity => "logo_gravity", Integer;
    LogoMarginLeft => "logo_margin_left", Dimension;
    LogoMarginTop => "logo_margin_top", Dimension;
    LogoMarginRight => "logo_margin_right", Dimension;
    LogoMarginBottom => "logo_margin_bottom", Dimension;

    AttributionTint => "attribution_tint", Color;
    AttributionEnabled => "attribution_enabled", Boolean;
    AttributionGravity => "attribution_gravity", Integer;
    AttributionMarginLeft => "attribution_margin_left", Dimension;
    AttributionMarginTop => "attribution_margin_top", Dimension;
    AttributionMarginRight => "attribution_margin_right", Dimension;
    AttributionMarginBottom => "attribution_margin_bottom", Dimension;

    MyLocationEnabled => "my_location_enabled", Boolean;
    MyLocationForeground => "my_location_foreground", Image;
    MyLocationForegroundBearing => "my_location_foreground_bearing", Image;
    MyLocationBackground => "my_location_background", Image;
    MyLocationForegroundTint => "my_location_foreground_tint", Color;
    MyLocationBackgroundTint => "my_location_background_tint", Color;
    MyLocationBackgroundLeft => "my_location_background_left", Dimension;
    MyLocationBackgroundTop => "my_location_background_top", Dimension;
    MyLocationBackgroundRight => "my_location_background_right", Dimension;
    MyLocationBackgroundBottom => "my_location_background_bottom", Dimension;
    MyLocationAccuracyAlpha => "my_location_accuracy_alpha", Integer;
    MyLocationAccuracyTint => "my_location_accuracy_tint", Color;
}

impl Attribute {
    /// Attributes that describe the initial camera
    pub const CAMERA: [Attribute; 5] = [
        Attribute::CameraTargetLat,
        Attribute::CameraTargetLng,
        Attribute::CameraZoom,
        Attribute::CameraBearing,
        Attribute::CameraTilt,
    ];

    /// Whether the attribute holds gravity bits
    pub fn is_gravity(&self) -> bool {
        matches!(
            self,
            Attribute::CompassGravity | Attribute::LogoGravity | Attribute::AttributionGravity
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed lookups over a styled attribute set
///
/// Every lookup takes the value to return when the attribute is absent.
/// Errors (a value of the wrong type, an unreadable resource) are the
/// source's own and are handed back to the caller untouched.
///
/// A source may hold a pooled or shared resource; [`release`](Self::release)
/// is called exactly once by the importer when it is done with the source.
pub trait AttributeSource {
    type Error;

    /// Whether the source has a value for `attribute`
    fn contains(&self, attribute: Attribute) -> bool;

    fn boolean(&self, attribute: Attribute, default: bool) -> Result<bool, Self::Error>;

    fn int(&self, attribute: Attribute, default: i32) -> Result<i32, Self::Error>;

    fn float(&self, attribute: Attribute, default: f32) -> Result<f32, Self::Error>;

    /// Double precision lookup, used for the camera
    fn double(&self, attribute: Attribute, default: f64) -> Result<f64, Self::Error>;

    /// Dimension in density-independent pixels
    fn dimension(&self, attribute: Attribute, default: f32) -> Result<f32, Self::Error>;

    /// Packed ARGB colour
    fn color(&self, attribute: Attribute, default: i32) -> Result<i32, Self::Error>;

    fn image(&self, attribute: Attribute) -> Result<Option<ImageHandle>, Self::Error>;

    fn string(&self, attribute: Attribute) -> Result<Option<String>, Self::Error>;

    /// Give back whatever the source holds
    fn release(&mut self) {}
}

impl<S: AttributeSource + ?Sized> AttributeSource for &mut S {
    type Error = S::Error;

    fn contains(&self, attribute: Attribute) -> bool {
        (**self).contains(attribute)
    }

    fn boolean(&self, attribute: Attribute, default: bool) -> Result<bool, Self::Error> {
        (**self).boolean(attribute, default)
    }

    fn int(&self, attribute: Attribute, default: i32) -> Result<i32, Self::Error> {
        (**self).int(attribute, default)
    }

    fn float(&self, attribute: Attribute, default: f32) -> Result<f32, Self::Error> {
        (**self).float(attribute, default)
    }

    fn double(&self, attribute: Attribute, default: f64) -> Result<f64, Self::Error> {
        (**self).double(attribute, default)
    }

    fn dimension(&self, attribute: Attribute, default: f32) -> Result<f32, Self::Error> {
        (**self).dimension(attribute, default)
    }

    fn color(&self, attribute: Attribute, default: i32) -> Result<i32, Self::Error> {
        (**self).color(attribute, default)
    }

    fn image(&self, attribute: Attribute) -> Result<Option<ImageHandle>, Self::Error> {
        (**self).image(attribute)
    }

    fn string(&self, attribute: Attribute) -> Result<Option<String>, Self::Error> {
        (**self).string(attribute)
    }

    fn release(&mut self) {
        (**self).release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.name().parse::<Attribute>().unwrap(), *attribute);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            "compass_colour".parse::<Attribute>(),
            Err(AttributeError::UnknownAttribute(name)) if name == "compass_colour"
        ));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Attribute::CompassMarginLeft.kind(), AttributeKind::Dimension);
        assert_eq!(Attribute::AttributionTint.kind(), AttributeKind::Color);
        assert_eq!(Attribute::MyLocationBackground.kind(), AttributeKind::Image);
        assert!(Attribute::LogoGravity.is_gravity());
        assert!(!Attribute::LogoEnabled.is_gravity());
        assert_eq!(Attribute::ALL.len(), 46);
    }
}
