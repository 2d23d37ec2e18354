//! Core constants shared by the option record and the attribute importer.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Lowest zoom level a map surface may be restricted to.
pub const MINIMUM_ZOOM: f32 = 0.0;

/// Highest zoom level a map surface may be restricted to.
pub const MAXIMUM_ZOOM: f32 = 25.5;

/// Attribution tint value meaning "keep the default tint".
pub const NO_TINT: i32 = -1;

/// Fully transparent ARGB colour.
pub const TRANSPARENT: i32 = 0x0000_0000;

/// Brand primary colour, used for the location accuracy ring (ARGB `#FF1E8CAB`).
pub const PRIMARY_COLOR: i32 = 0xFF1E_8CABu32 as i32;

/// Default opacity of the location accuracy ring.
pub const DEFAULT_ACCURACY_ALPHA: i32 = 100;

/// Margin defaults, in density-independent pixels.
pub const DIMENSION_SEVEN_DP: f32 = 7.0;
pub const DIMENSION_TEN_DP: f32 = 10.0;
pub const DIMENSION_SIXTEEN_DP: f32 = 16.0;

/// Leaves room for the logo to the left of the attribution button.
pub const DIMENSION_SEVENTY_SIX_DP: f32 = 76.0;

/// Converts a density-independent dimension to device pixels.
pub fn dp_to_px(value: f32, density: f32) -> i32 {
    (value * density).round() as i32
}
