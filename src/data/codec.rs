//! Flat binary persistence for [`MapOptions`]
//!
//! The legacy layout is positional: fields are written one after another in
//! a fixed order with no header and no tags, using bincode's fixed-width
//! little-endian encoding (`bool` is one byte, `Option` a one-byte tag,
//! `[i32; 4]` sixteen bytes, strings a `u64` length and UTF-8 bytes).
//! Decoding bytes written with any other layout does not fail reliably; it
//! produces a record with the wrong values.
//!
//! Location images are handles into the current process and are never
//! written. Decoded records always have them unset.

use crate::core::{camera::CameraPosition, options::MapOptions};
use serde::{Deserialize, Serialize};

/// Leading bytes of a versioned record
pub const RECORD_MAGIC: [u8; 4] = *b"MOPT";

/// Layout version written after the magic
pub const RECORD_VERSION: u16 = 1;

const HEADER_LEN: usize = RECORD_MAGIC.len() + std::mem::size_of::<u16>();

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("binary record error: {0}")]
    Binary(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON record error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "json")]
    #[error("{0} is not finite and has no JSON representation")]
    NonFinite(&'static str),

    #[error("record does not start with the expected magic bytes")]
    BadMagic,

    #[error("unsupported record version {0}")]
    UnsupportedVersion(u16),
}

/// Supported record formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// Headerless positional layout, interoperable with existing records
    #[default]
    Legacy,
    /// Legacy layout behind a magic and version header
    Versioned,
    /// JSON rendering of the same fields, for inspection
    #[cfg(feature = "json")]
    Json,
}

/// Field-for-field image of the persisted layout. Declaration order is the
/// wire order and must not change.
#[derive(Debug, Serialize, Deserialize)]
struct OptionsRecord {
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
    zoom_controls_enabled: bool,
    zoom_gestures_enabled: bool,
    location_enabled: bool,
    location_foreground_tint_color: i32,
    location_background_tint_color: i32,
    location_background_padding: Option<[i32; 4]>,
    location_accuracy_alpha: i32,
    location_accuracy_tint_color: i32,
    style_url: Option<String>,
    access_token: Option<String>,
}

impl OptionsRecord {
    /// First float field JSON cannot carry, if any
    #[cfg(feature = "json")]
    fn non_finite_field(&self) -> Option<&'static str> {
        let mut floats = vec![
            ("min_zoom", f64::from(self.min_zoom)),
            ("max_zoom", f64::from(self.max_zoom)),
        ];
        if let Some(camera) = &self.camera {
            floats.extend([
                ("camera.target.lat", camera.target.lat),
                ("camera.target.lng", camera.target.lng),
                ("camera.zoom", camera.zoom),
                ("camera.bearing", camera.bearing),
                ("camera.tilt", camera.tilt),
            ]);
        }
        floats
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
    }
}

impl From<&MapOptions> for OptionsRecord {
    #[allow(deprecated)]
    fn from(options: &MapOptions) -> Self {
        Self {
            camera: options.camera(),
            debug_active: options.debug_active(),
            compass_enabled: options.compass_enabled(),
            compass_gravity: options.compass_gravity(),
            compass_margins: options.compass_margins(),
            logo_enabled: options.logo_enabled(),
            logo_gravity: options.logo_gravity(),
            logo_margins: options.logo_margins(),
            attribution_enabled: options.attribution_enabled(),
            attribution_gravity: options.attribution_gravity(),
            attribution_margins: options.attribution_margins(),
            attribution_tint_color: options.attribution_tint_color(),
            min_zoom: options.min_zoom(),
            max_zoom: options.max_zoom(),
            rotate_gestures_enabled: options.rotate_gestures_enabled(),
            scroll_gestures_enabled: options.scroll_gestures_enabled(),
            tilt_gestures_enabled: options.tilt_gestures_enabled(),
            zoom_controls_enabled: options.zoom_controls_enabled(),
            zoom_gestures_enabled: options.zoom_gestures_enabled(),
            location_enabled: options.location_enabled(),
            location_foreground_tint_color: options.location_foreground_tint_color(),
            location_background_tint_color: options.location_background_tint_color(),
            location_background_padding: options.location_background_padding(),
            location_accuracy_alpha: options.location_accuracy_alpha(),
            location_accuracy_tint_color: options.location_accuracy_tint_color(),
            style_url: options.style_url().map(str::to_owned),
            access_token: options.access_token().map(str::to_owned),
        }
    }
}

impl From<OptionsRecord> for MapOptions {
    #[allow(deprecated)]
    fn from(record: OptionsRecord) -> Self {
        let mut options = MapOptions::new();
        options
            .set_camera(record.camera)
            .set_debug_active(record.debug_active)
            .set_compass_enabled(record.compass_enabled)
            .set_compass_gravity(record.compass_gravity)
            .set_compass_margins(record.compass_margins)
            .set_logo_enabled(record.logo_enabled)
            .set_logo_gravity(record.logo_gravity)
            .set_logo_margins(record.logo_margins)
            .set_attribution_enabled(record.attribution_enabled)
            .set_attribution_gravity(record.attribution_gravity)
            .set_attribution_margins(record.attribution_margins)
            .set_attribution_tint_color(record.attribution_tint_color)
            .set_min_zoom(record.min_zoom)
            .set_max_zoom(record.max_zoom)
            .set_rotate_gestures_enabled(record.rotate_gestures_enabled)
            .set_scroll_gestures_enabled(record.scroll_gestures_enabled)
            .set_tilt_gestures_enabled(record.tilt_gestures_enabled)
            .set_zoom_controls_enabled(record.zoom_controls_enabled)
            .set_zoom_gestures_enabled(record.zoom_gestures_enabled)
            .set_location_enabled(record.location_enabled)
            .set_location_foreground_image(None)
            .set_location_foreground_bearing_image(None)
            .set_location_background_image(None)
            .set_location_foreground_tint_color(record.location_foreground_tint_color)
            .set_location_background_tint_color(record.location_background_tint_color)
            .set_location_background_padding(record.location_background_padding)
            .set_location_accuracy_alpha(record.location_accuracy_alpha)
            .set_location_accuracy_tint_color(record.location_accuracy_tint_color)
            .set_style_url(record.style_url)
            .set_access_token(record.access_token);
        options
    }
}

impl RecordFormat {
    /// Serialize options in this format
    pub fn encode(&self, options: &MapOptions) -> Result<Vec<u8>, CodecError> {
        let record = OptionsRecord::from(options);
        let bytes = match self {
            RecordFormat::Legacy => bincode::serialize(&record)?,
            RecordFormat::Versioned => {
                let body = bincode::serialize(&record)?;
                let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
                bytes.extend_from_slice(&RECORD_MAGIC);
                bytes.extend_from_slice(&RECORD_VERSION.to_le_bytes());
                bytes.extend_from_slice(&body);
                bytes
            }
            #[cfg(feature = "json")]
            RecordFormat::Json => {
                if let Some(field) = record.non_finite_field() {
                    return Err(CodecError::NonFinite(field));
                }
                serde_json::to_vec_pretty(&record)?
            }
        };

        log::trace!("encoded map options as {:?}: {} bytes", self, bytes.len());
        Ok(bytes)
    }

    /// Deserialize options from this format
    pub fn decode(&self, bytes: &[u8]) -> Result<MapOptions, CodecError> {
        let record: OptionsRecord = match self {
            RecordFormat::Legacy => bincode::deserialize(bytes)?,
            RecordFormat::Versioned => {
                if bytes.len() < HEADER_LEN || bytes[..RECORD_MAGIC.len()] != RECORD_MAGIC {
                    return Err(CodecError::BadMagic);
                }
                let version = u16::from_le_bytes([bytes[4], bytes[5]]);
                if version != RECORD_VERSION {
                    return Err(CodecError::UnsupportedVersion(version));
                }
                bincode::deserialize(&bytes[HEADER_LEN..])?
            }
            #[cfg(feature = "json")]
            RecordFormat::Json => serde_json::from_slice(bytes)?,
        };

        log::trace!("decoded map options from {:?}: {} bytes", self, bytes.len());
        Ok(record.into())
    }

    /// Conventional file extension for records in this format
    pub fn file_extension(&self) -> &'static str {
        match self {
            RecordFormat::Legacy => "bin",
            RecordFormat::Versioned => "mopt",
            #[cfg(feature = "json")]
            RecordFormat::Json => "json",
        }
    }
}

/// Encode options in the legacy headerless layout
pub fn encode(options: &MapOptions) -> Result<Vec<u8>, CodecError> {
    RecordFormat::Legacy.encode(options)
}

/// Decode options from the legacy headerless layout
pub fn decode(bytes: &[u8]) -> Result<MapOptions, CodecError> {
    RecordFormat::Legacy.decode(bytes)
}
