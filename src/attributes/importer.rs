//! Build [`MapOptions`] from a styled attribute source
//!
//! Every attribute is queried with a literal default, so the result is fully
//! populated: margins and padding are always set and each location image
//! falls back to its own built-in image. Only the camera, style and access
//! token stay unset when the source says nothing about them.
//!
//! Dimensions arrive in density-independent pixels and are stored as
//! `round(value * density)` device pixels.

use crate::attributes::{Attribute, AttributeSource};
use crate::core::{
    camera::CameraPosition,
    constants::{
        dp_to_px, DEFAULT_ACCURACY_ALPHA, DIMENSION_SEVENTY_SIX_DP, DIMENSION_SEVEN_DP,
        DIMENSION_SIXTEEN_DP, DIMENSION_TEN_DP, MAXIMUM_ZOOM, MINIMUM_ZOOM, NO_TINT,
        PRIMARY_COLOR, TRANSPARENT,
    },
    geo::LatLng,
    gravity,
    image::{BuiltInImage, ImageHandle},
    options::MapOptions,
};
use std::ops::Deref;

/// Holds a source for the duration of an import and releases it on drop,
/// whichever way the import ends.
struct ReleaseGuard<S: AttributeSource> {
    source: S,
}

impl<S: AttributeSource> Deref for ReleaseGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.source
    }
}

impl<S: AttributeSource> Drop for ReleaseGuard<S> {
    fn drop(&mut self) {
        self.source.release();
    }
}

/// Per-edge defaults of a margin group, in dp
struct EdgeDefaults {
    keys: [Attribute; 4],
    defaults: [f32; 4],
}

const COMPASS_MARGINS: EdgeDefaults = EdgeDefaults {
    keys: [
        Attribute::CompassMarginLeft,
        Attribute::CompassMarginTop,
        Attribute::CompassMarginRight,
        Attribute::CompassMarginBottom,
    ],
    defaults: [DIMENSION_TEN_DP; 4],
};

const LOGO_MARGINS: EdgeDefaults = EdgeDefaults {
    keys: [
        Attribute::LogoMarginLeft,
        Attribute::LogoMarginTop,
        Attribute::LogoMarginRight,
        Attribute::LogoMarginBottom,
    ],
    defaults: [DIMENSION_SIXTEEN_DP; 4],
};

const ATTRIBUTION_MARGINS: EdgeDefaults = EdgeDefaults {
    keys: [
        Attribute::AttributionMarginLeft,
        Attribute::AttributionMarginTop,
        Attribute::AttributionMarginRight,
        Attribute::AttributionMarginBottom,
    ],
    defaults: [
        DIMENSION_SEVENTY_SIX_DP,
        DIMENSION_SEVEN_DP,
        DIMENSION_SEVEN_DP,
        DIMENSION_SEVEN_DP,
    ],
};

const LOCATION_BACKGROUND_PADDING: EdgeDefaults = EdgeDefaults {
    keys: [
        Attribute::MyLocationBackgroundLeft,
        Attribute::MyLocationBackgroundTop,
        Attribute::MyLocationBackgroundRight,
        Attribute::MyLocationBackgroundBottom,
    ],
    defaults: [0.0; 4],
};

/// Read four independent edge dimensions and convert them to pixels
fn edges<S: AttributeSource>(
    source: &S,
    group: &EdgeDefaults,
    density: f32,
) -> Result<[i32; 4], S::Error> {
    let mut pixels = [0; 4];
    for (pixel, (key, default)) in pixels.iter_mut().zip(group.keys.iter().zip(group.defaults)) {
        *pixel = dp_to_px(source.dimension(*key, default)?, density);
    }
    Ok(pixels)
}

fn image_or<S: AttributeSource>(
    source: &S,
    attribute: Attribute,
    fallback: BuiltInImage,
) -> Result<ImageHandle, S::Error> {
    Ok(source.image(attribute)?.unwrap_or(ImageHandle::BuiltIn(fallback)))
}

fn camera<S: AttributeSource>(source: &S) -> Result<Option<CameraPosition>, S::Error> {
    if !Attribute::CAMERA.iter().any(|key| source.contains(*key)) {
        log::trace!("no camera attributes present, leaving camera unset");
        return Ok(None);
    }

    let target = LatLng::new(
        source.double(Attribute::CameraTargetLat, 0.0)?,
        source.double(Attribute::CameraTargetLng, 0.0)?,
    );
    let camera = CameraPosition::builder()
        .target(target)
        .zoom(source.double(Attribute::CameraZoom, 0.0)?)
        .bearing(source.double(Attribute::CameraBearing, 0.0)?)
        .tilt(source.double(Attribute::CameraTilt, 0.0)?)
        .build();
    log::trace!("camera attributes present: {:?}", camera);
    Ok(Some(camera))
}

/// Import options from `source`, scaling dimensions by `density`
///
/// The source is released exactly once before this returns, including when a
/// lookup fails part way. Lookup errors are returned as the source produced
/// them.
#[allow(deprecated)]
pub fn import_from<S: AttributeSource>(source: S, density: f32) -> Result<MapOptions, S::Error> {
    let source = ReleaseGuard { source };
    log::debug!("importing map options at density {}", density);

    let mut options = MapOptions::new()
        .with_debug_active(source.boolean(Attribute::DebugActive, false)?)
        .with_zoom_gestures_enabled(source.boolean(Attribute::ZoomEnabled, true)?)
        .with_scroll_gestures_enabled(source.boolean(Attribute::ScrollEnabled, true)?)
        .with_rotate_gestures_enabled(source.boolean(Attribute::RotateEnabled, true)?)
        .with_tilt_gestures_enabled(source.boolean(Attribute::TiltEnabled, true)?)
        .with_zoom_controls_enabled(source.boolean(Attribute::ZoomControlsEnabled, false)?)
        .with_max_zoom(source.float(Attribute::ZoomMax, MAXIMUM_ZOOM)?)
        .with_min_zoom(source.float(Attribute::ZoomMin, MINIMUM_ZOOM)?)
        .with_compass_enabled(source.boolean(Attribute::CompassEnabled, true)?)
        .with_compass_gravity(source.int(Attribute::CompassGravity, gravity::DEFAULT_COMPASS)?)
        .with_compass_margins(edges(&*source, &COMPASS_MARGINS, density)?)
        .with_logo_enabled(source.boolean(Attribute::LogoEnabled, true)?)
        .with_logo_gravity(source.int(Attribute::LogoGravity, gravity::DEFAULT_LOGO)?)
        .with_logo_margins(edges(&*source, &LOGO_MARGINS, density)?)
        .with_attribution_tint_color(source.color(Attribute::AttributionTint, NO_TINT)?)
        .with_attribution_enabled(source.boolean(Attribute::AttributionEnabled, true)?)
        .with_attribution_gravity(
            source.int(Attribute::AttributionGravity, gravity::DEFAULT_ATTRIBUTION)?,
        )
        .with_attribution_margins(edges(&*source, &ATTRIBUTION_MARGINS, density)?)
        .with_location_enabled(source.boolean(Attribute::MyLocationEnabled, false)?)
        .with_location_foreground_tint_color(
            source.color(Attribute::MyLocationForegroundTint, TRANSPARENT)?,
        )
        .with_location_background_tint_color(
            source.color(Attribute::MyLocationBackgroundTint, TRANSPARENT)?,
        )
        .with_location_foreground_images(
            image_or(&*source, Attribute::MyLocationForeground, BuiltInImage::LocationForeground)?,
            image_or(
                &*source,
                Attribute::MyLocationForegroundBearing,
                BuiltInImage::LocationBearing,
            )?,
        )
        .with_location_background_image(image_or(
            &*source,
            Attribute::MyLocationBackground,
            BuiltInImage::LocationBackground,
        )?)
        .with_location_background_padding(edges(&*source, &LOCATION_BACKGROUND_PADDING, density)?)
        .with_location_accuracy_alpha(
            source.int(Attribute::MyLocationAccuracyAlpha, DEFAULT_ACCURACY_ALPHA)?,
        )
        .with_location_accuracy_tint_color(
            source.color(Attribute::MyLocationAccuracyTint, PRIMARY_COLOR)?,
        );

    options
        .set_camera(camera(&*source)?)
        .set_style_url(source.string(Attribute::StyleUrl)?)
        .set_access_token(source.string(Attribute::AccessToken)?);

    log::debug!(
        "imported map options (camera: {}, style: {:?})",
        options.camera().is_some(),
        options.style_url()
    );
    Ok(options)
}
