//! Gravity bit flags.
//!
//! Values are bit-compatible with Android's `Gravity` so records written by
//! either side can be exchanged. The option record never interprets them; a
//! gravity is carried as a raw `i32` and handed to whatever lays the surface out.

/// Place at the top of the container.
pub const TOP: i32 = 0x30;
/// Place at the bottom of the container.
pub const BOTTOM: i32 = 0x50;
/// Place at the left edge.
pub const LEFT: i32 = 0x03;
/// Place at the right edge.
pub const RIGHT: i32 = 0x05;
/// Place at the leading edge (left in LTR layouts).
pub const START: i32 = RELATIVE_LAYOUT_DIRECTION | LEFT;
/// Place at the trailing edge (right in LTR layouts).
pub const END: i32 = RELATIVE_LAYOUT_DIRECTION | RIGHT;
/// Center on both axes.
pub const CENTER: i32 = 0x11;

const RELATIVE_LAYOUT_DIRECTION: i32 = 0x0080_0000;

pub const DEFAULT_COMPASS: i32 = TOP | END;
pub const DEFAULT_LOGO: i32 = BOTTOM | START;
pub const DEFAULT_ATTRIBUTION: i32 = BOTTOM;

/// Parse a `|`-separated list of flag names such as `"top|end"`
///
/// Returns `None` if any name is unknown. Names are case-insensitive.
pub fn parse(flags: &str) -> Option<i32> {
    flags.split('|').try_fold(0, |bits, name| {
        let flag = match name.trim().to_ascii_lowercase().as_str() {
            "top" => TOP,
            "bottom" => BOTTOM,
            "left" => LEFT,
            "right" => RIGHT,
            "start" => START,
            "end" => END,
            "center" => CENTER,
            _ => return None,
        };
        Some(bits | flag)
    })
}
