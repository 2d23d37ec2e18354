//! The option record describing the initial state of a map surface
//!
//! A [`MapOptions`] value is configured (through the fluent `with_*` setters,
//! the attribute importer or a decoded record), handed to the map surface and
//! then left alone. Nothing stops later mutation; the surface simply reads the
//! values once.

use crate::core::{
    camera::CameraPosition,
    constants::{MAXIMUM_ZOOM, MINIMUM_ZOOM, NO_TINT, TRANSPARENT},
    gravity,
    image::ImageHandle,
    macros::option_accessors,
};
use std::hash::{Hash, Hasher};

/// Initial-state configuration of a map surface
///
/// Margins and padding are `[left, top, right, bottom]` in device pixels.
/// `None` means "not configured", which the consumer may treat differently
/// from an explicit `[0, 0, 0, 0]`.
#[derive(Debug, Clone)]
pub struct MapOptions {
    camera: Option<CameraPosition>,
    debug_active: bool,

    compass_enabled: bool,
    compass_gravity: i32,
    compass_margins: Option<[i32; 4]>,

    logo_enabled: bool,
    logo_gravity: i32,
    logo_margins: Option<[i32; 4]>,

    attribution_enabled: bool,
    attribution_gravity: i32,
    attribution_margins: Option<[i32; 4]>,
    attribution_tint_color: i32,

    min_zoom: f32,
    max_zoom: f32,

    rotate_gestures_enabled: bool,
    scroll_gestures_enabled: bool,
    tilt_gestures_enabled: bool,
    zoom_gestures_enabled: bool,
    zoom_controls_enabled: bool,

    location_enabled: bool,
    location_foreground_image: Option<ImageHandle>,
    location_foreground_bearing_image: Option<ImageHandle>,
    location_background_image: Option<ImageHandle>,
    location_foreground_tint_color: i32,
    location_background_tint_color: i32,
    location_background_padding: Option<[i32; 4]>,
    location_accuracy_tint_color: i32,
    location_accuracy_alpha: i32,

    style_url: Option<String>,
    access_token: Option<String>,
}

impl MapOptions {
    /// Create options with the built-in field defaults
    ///
    /// Margins, padding, images, camera and strings start unset. Use the
    /// attribute importer to get a fully populated record.
    pub fn new() -> Self {
        Self {
            camera: None,
            debug_active: false,
            compass_enabled: true,
            compass_gravity: gravity::DEFAULT_COMPASS,
            compass_margins: None,
            logo_enabled: true,
            logo_gravity: gravity::DEFAULT_LOGO,
            logo_margins: None,
            attribution_enabled: true,
            attribution_gravity: gravity::DEFAULT_ATTRIBUTION,
            attribution_margins: None,
            attribution_tint_color: NO_TINT,
            min_zoom: MINIMUM_ZOOM,
            max_zoom: MAXIMUM_ZOOM,
            rotate_gestures_enabled: true,
            scroll_gestures_enabled: true,
            tilt_gestures_enabled: true,
            zoom_gestures_enabled: true,
            zoom_controls_enabled: false,
            location_enabled: false,
            location_foreground_image: None,
            location_foreground_bearing_image: None,
            location_background_image: None,
            location_foreground_tint_color: TRANSPARENT,
            location_background_tint_color: TRANSPARENT,
            location_background_padding: None,
            location_accuracy_tint_color: 0,
            location_accuracy_alpha: 0,
            style_url: None,
            access_token: None,
        }
    }

    option_accessors! {
        /// Initial camera pose
        optional camera: CameraPosition => with_camera, set_camera;

        /// Debug overlay (tile borders, collision boxes)
        value debug_active: bool => with_debug_active, set_debug_active;

        /// Compass visibility
        value compass_enabled: bool => with_compass_enabled, set_compass_enabled;
        /// Compass placement as raw gravity bits
        value compass_gravity: i32 => with_compass_gravity, set_compass_gravity;
        /// Compass margins `[left, top, right, bottom]` in pixels
        optional compass_margins: [i32; 4] => with_compass_margins, set_compass_margins;

        /// Logo visibility
        value logo_enabled: bool => with_logo_enabled, set_logo_enabled;
        /// Logo placement as raw gravity bits
        value logo_gravity: i32 => with_logo_gravity, set_logo_gravity;
        /// Logo margins `[left, top, right, bottom]` in pixels
        optional logo_margins: [i32; 4] => with_logo_margins, set_logo_margins;

        /// Attribution button visibility
        value attribution_enabled: bool => with_attribution_enabled, set_attribution_enabled;
        /// Attribution placement as raw gravity bits
        value attribution_gravity: i32 => with_attribution_gravity, set_attribution_gravity;
        /// Attribution margins `[left, top, right, bottom]` in pixels
        optional attribution_margins: [i32; 4] => with_attribution_margins, set_attribution_margins;
        /// Attribution tint as packed ARGB, `-1` keeps the default tint
        value attribution_tint_color: i32 => with_attribution_tint_color, set_attribution_tint_color;

        /// Lower zoom bound. Not checked against the upper bound.
        value min_zoom: f32 => with_min_zoom, set_min_zoom;
        /// Upper zoom bound. Not checked against the lower bound.
        value max_zoom: f32 => with_max_zoom, set_max_zoom;

        value rotate_gestures_enabled: bool => with_rotate_gestures_enabled, set_rotate_gestures_enabled;
        value scroll_gestures_enabled: bool => with_scroll_gestures_enabled, set_scroll_gestures_enabled;
        value tilt_gestures_enabled: bool => with_tilt_gestures_enabled, set_tilt_gestures_enabled;
        value zoom_gestures_enabled: bool => with_zoom_gestures_enabled, set_zoom_gestures_enabled;
        /// On-screen zoom buttons
        value zoom_controls_enabled: bool => with_zoom_controls_enabled, set_zoom_controls_enabled;

        /// User-location indicator visibility
        value location_enabled: bool => with_location_enabled, set_location_enabled;
        /// Indicator image when no bearing is known
        optional location_foreground_image: ImageHandle => with_location_foreground_image, set_location_foreground_image;
        /// Indicator image when a bearing is known
        optional location_foreground_bearing_image: ImageHandle => with_location_foreground_bearing_image, set_location_foreground_bearing_image;
        /// Image drawn behind the indicator
        optional location_background_image: ImageHandle => with_location_background_image, set_location_background_image;
        value location_foreground_tint_color: i32 => with_location_foreground_tint_color, set_location_foreground_tint_color;
        value location_background_tint_color: i32 => with_location_background_tint_color, set_location_background_tint_color;
        /// Padding of the background image `[left, top, right, bottom]` in pixels
        optional location_background_padding: [i32; 4] => with_location_background_padding, set_location_background_padding;
        /// Accuracy ring colour as packed ARGB
        value location_accuracy_tint_color: i32 => with_location_accuracy_tint_color, set_location_accuracy_tint_color;
        /// Accuracy ring opacity, 0-255 by convention
        value location_accuracy_alpha: i32 => with_location_accuracy_alpha, set_location_accuracy_alpha;
    }

    /// Set both foreground images of the location indicator at once
    pub fn with_location_foreground_images(
        mut self,
        foreground: ImageHandle,
        bearing: ImageHandle,
    ) -> Self {
        self.location_foreground_image = Some(foreground);
        self.location_foreground_bearing_image = Some(bearing);
        self
    }

    /// Style locator (URL or inline style name)
    pub fn style_url(&self) -> Option<&str> {
        self.style_url.as_deref()
    }

    pub fn with_style_url(mut self, style_url: impl Into<String>) -> Self {
        self.style_url = Some(style_url.into());
        self
    }

    pub fn set_style_url(&mut self, style_url: Option<String>) -> &mut Self {
        self.style_url = style_url;
        self
    }

    #[deprecated(note = "access tokens are configured once per process, not per map")]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[deprecated(note = "access tokens are configured once per process, not per map")]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    #[deprecated(note = "access tokens are configured once per process, not per map")]
    pub fn set_access_token(&mut self, access_token: Option<String>) -> &mut Self {
        self.access_token = access_token;
        self
    }

    /// Whether the three location images are all unset
    pub fn has_no_location_images(&self) -> bool {
        self.location_foreground_image.is_none()
            && self.location_foreground_bearing_image.is_none()
            && self.location_background_image.is_none()
    }

    /// Copy of these options with the three location images unset
    ///
    /// This is what a record looks like after crossing a persistence boundary.
    pub fn without_location_images(&self) -> Self {
        Self {
            location_foreground_image: None,
            location_foreground_bearing_image: None,
            location_background_image: None,
            ..self.clone()
        }
    }

    /// Whether the zoom bounds describe a non-empty range
    pub fn has_valid_zoom_range(&self) -> bool {
        self.min_zoom <= self.max_zoom
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MapOptions {
    fn eq(&self, other: &Self) -> bool {
        self.camera == other.camera
            && self.debug_active == other.debug_active
            && self.compass_enabled == other.compass_enabled
            && self.compass_gravity == other.compass_gravity
            && self.compass_margins == other.compass_margins
            && self.logo_enabled == other.logo_enabled
            && self.logo_gravity == other.logo_gravity
            && self.logo_margins == other.logo_margins
            && self.attribution_enabled == other.attribution_enabled
            && self.attribution_gravity == other.attribution_gravity
            && self.attribution_margins == other.attribution_margins
            && self.attribution_tint_color == other.attribution_tint_color
            && self.min_zoom.to_bits() == other.min_zoom.to_bits()
            && self.max_zoom.to_bits() == other.max_zoom.to_bits()
            && self.rotate_gestures_enabled == other.rotate_gestures_enabled
            && self.scroll_gestures_enabled == other.scroll_gestures_enabled
            && self.tilt_gestures_enabled == other.tilt_gestures_enabled
            && self.zoom_gestures_enabled == other.zoom_gestures_enabled
            && self.zoom_controls_enabled == other.zoom_controls_enabled
            && self.location_enabled == other.location_enabled
            && self.location_foreground_image == other.location_foreground_image
            && self.location_foreground_bearing_image == other.location_foreground_bearing_image
            && self.location_background_image == other.location_background_image
            && self.location_foreground_tint_color == other.location_foreground_tint_color
            && self.location_background_tint_color == other.location_background_tint_color
            && self.location_background_padding == other.location_background_padding
            && self.location_accuracy_tint_color == other.location_accuracy_tint_color
            && self.location_accuracy_alpha == other.location_accuracy_alpha
            && self.style_url == other.style_url
            && self.access_token == other.access_token
    }
}

// Floats compare and hash by bit pattern, which keeps `Eq` lawful.
impl Eq for MapOptions {}

impl Hash for MapOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.camera.hash(state);
        self.debug_active.hash(state);
        self.compass_enabled.hash(state);
        self.compass_gravity.hash(state);
        self.compass_margins.hash(state);
        self.logo_enabled.hash(state);
        self.logo_gravity.hash(state);
        self.logo_margins.hash(state);
        self.attribution_enabled.hash(state);
        self.attribution_gravity.hash(state);
        self.attribution_margins.hash(state);
        self.attribution_tint_color.hash(state);
        self.min_zoom.to_bits().hash(state);
        self.max_zoom.to_bits().hash(state);
        self.rotate_gestures_enabled.hash(state);
        self.scroll_gestures_enabled.hash(state);
        self.tilt_gestures_enabled.hash(state);
        self.zoom_gestures_enabled.hash(state);
        self.zoom_controls_enabled.hash(state);
        self.location_enabled.hash(state);
        self.location_foreground_image.hash(state);
        self.location_foreground_bearing_image.hash(state);
        self.location_background_image.hash(state);
        self.location_foreground_tint_color.hash(state);
        self.location_background_tint_color.hash(state);
        self.location_background_padding.hash(state);
        self.location_accuracy_tint_color.hash(state);
        self.location_accuracy_alpha.hash(state);
        self.style_url.hash(state);
        self.access_token.hash(state);
    }
}

#[cfg(test)]
mod tests {
    #![allow(deprecated)]

    use super::*;
    use crate::core::{geo::LatLng, image::BuiltInImage};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(options: &MapOptions) -> u64 {
        let mut hasher = DefaultHasher::new();
        options.hash(&mut hasher);
        hasher.finish()
    }

    fn sample() -> MapOptions {
        MapOptions::new()
            .with_camera(CameraPosition::new(LatLng::new(48.85, 2.35), 12.0, 45.0, 20.0))
            .with_debug_active(true)
            .with_compass_margins([1, 2, 3, 4])
            .with_logo_margins([5, 6, 7, 8])
            .with_attribution_margins([9, 10, 11, 12])
            .with_attribution_tint_color(0x7F00FF00)
            .with_min_zoom(2.0)
            .with_max_zoom(18.0)
            .with_location_enabled(true)
            .with_location_background_padding([0, 1, 0, 1])
            .with_location_foreground_images(
                ImageHandle::Resource(1),
                BuiltInImage::LocationBearing.into(),
            )
            .with_style_url("mapbox://styles/mapbox/streets-v9")
            .with_access_token("pk.test")
    }

    #[test]
    fn test_new_defaults() {
        let options = MapOptions::new();

        assert!(options.camera().is_none());
        assert!(!options.debug_active());
        assert!(options.compass_enabled());
        assert_eq!(options.compass_gravity(), gravity::TOP | gravity::END);
        assert_eq!(options.logo_gravity(), gravity::BOTTOM | gravity::START);
        assert_eq!(options.attribution_gravity(), gravity::BOTTOM);
        assert_eq!(options.attribution_tint_color(), -1);
        assert_eq!(options.min_zoom(), MINIMUM_ZOOM);
        assert_eq!(options.max_zoom(), MAXIMUM_ZOOM);
        assert!(options.zoom_gestures_enabled());
        assert!(!options.zoom_controls_enabled());
        assert!(options.compass_margins().is_none());
        assert!(options.has_no_location_images());
        assert!(options.style_url().is_none());
        assert!(options.access_token().is_none());
    }

    #[test]
    fn test_fluent_and_in_place_setters_agree() {
        let fluent = MapOptions::new()
            .with_tilt_gestures_enabled(false)
            .with_logo_gravity(gravity::TOP | gravity::LEFT)
            .with_compass_margins([4, 3, 2, 1]);

        let mut in_place = MapOptions::new();
        in_place
            .set_tilt_gestures_enabled(false)
            .set_logo_gravity(gravity::TOP | gravity::LEFT)
            .set_compass_margins(Some([4, 3, 2, 1]));

        assert_eq!(fluent, in_place);
        assert_eq!(hash_of(&fluent), hash_of(&in_place));
    }

    #[test]
    fn test_equal_records_hash_equal() {
        let a = sample();
        let b = sample();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_single_field_change_breaks_equality() {
        let base = sample();
        let variants = vec![
            ("camera", base.clone().with_camera(CameraPosition::default())),
            ("camera tilt", base.clone().with_camera(CameraPosition::new(LatLng::new(48.85, 2.35), 12.0, 45.0, 20.5))),
            ("debug_active", base.clone().with_debug_active(false)),
            ("compass_enabled", base.clone().with_compass_enabled(false)),
            ("compass_gravity", base.clone().with_compass_gravity(gravity::CENTER)),
            ("compass_margins", base.clone().with_compass_margins([1, 2, 3, 5])),
            ("logo_enabled", base.clone().with_logo_enabled(false)),
            ("logo_gravity", base.clone().with_logo_gravity(gravity::CENTER)),
            ("logo_margins", base.clone().with_logo_margins([5, 6, 7, 9])),
            ("attribution_enabled", base.clone().with_attribution_enabled(false)),
            ("attribution_gravity", base.clone().with_attribution_gravity(gravity::CENTER)),
            ("attribution_margins", base.clone().with_attribution_margins([0, 10, 11, 12])),
            ("attribution_tint_color", base.clone().with_attribution_tint_color(-1)),
            ("min_zoom", base.clone().with_min_zoom(2.5)),
            ("max_zoom", base.clone().with_max_zoom(17.0)),
            ("rotate_gestures_enabled", base.clone().with_rotate_gestures_enabled(false)),
            ("scroll_gestures_enabled", base.clone().with_scroll_gestures_enabled(false)),
            ("tilt_gestures_enabled", base.clone().with_tilt_gestures_enabled(false)),
            ("zoom_gestures_enabled", base.clone().with_zoom_gestures_enabled(false)),
            ("zoom_controls_enabled", base.clone().with_zoom_controls_enabled(true)),
            ("location_enabled", base.clone().with_location_enabled(false)),
            ("location_foreground_image", base.clone().with_location_foreground_image(ImageHandle::Resource(2))),
            ("location_foreground_bearing_image", base.clone().with_location_foreground_bearing_image(ImageHandle::Resource(3))),
            ("location_background_image", base.clone().with_location_background_image(ImageHandle::Resource(9))),
            ("location_foreground_tint_color", base.clone().with_location_foreground_tint_color(0x0A0B0C0D)),
            ("location_background_tint_color", base.clone().with_location_background_tint_color(0x0A0B0C0D)),
            ("location_background_padding", base.clone().with_location_background_padding([0, 1, 0, 2])),
            ("location_accuracy_alpha", base.clone().with_location_accuracy_alpha(255)),
            ("location_accuracy_tint_color", base.clone().with_location_accuracy_tint_color(0x0A0B0C0D)),
            ("style_url", base.clone().with_style_url("asset://style.json")),
            ("access_token", base.clone().with_access_token("pk.other")),
        ];

        for (field, variant) in variants {
            assert_ne!(base, variant, "{}", field);
            assert_ne!(hash_of(&base), hash_of(&variant), "{}", field);
        }
    }

    #[test]
    fn test_float_bits_drive_equality_and_hash() {
        let positive = MapOptions::new().with_min_zoom(0.0);
        let negative = MapOptions::new().with_min_zoom(-0.0);
        assert_ne!(positive, negative);
        assert_ne!(hash_of(&positive), hash_of(&negative));

        let a = MapOptions::new().with_max_zoom(f32::NAN);
        let b = MapOptions::new().with_max_zoom(f32::NAN);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_unset_margins_differ_from_zero_margins() {
        let unset = MapOptions::new();
        let zeroed = MapOptions::new().with_compass_margins([0, 0, 0, 0]);
        assert_ne!(unset, zeroed);
    }

    #[test]
    fn test_inverted_zoom_range_is_accepted() {
        let options = MapOptions::new().with_min_zoom(15.0).with_max_zoom(3.0);
        assert_eq!(options.min_zoom(), 15.0);
        assert_eq!(options.max_zoom(), 3.0);
        assert!(!options.has_valid_zoom_range());
    }

    #[test]
    fn test_without_location_images() {
        let stripped = sample().without_location_images();
        assert!(stripped.has_no_location_images());
        assert_eq!(stripped.style_url(), sample().style_url());
    }

    #[test]
    fn test_clearing_optional_field() {
        let mut options = sample();
        options.set_camera(None).set_style_url(None);
        assert!(options.camera().is_none());
        assert!(options.style_url().is_none());
    }
}
