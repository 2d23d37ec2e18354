//! In-memory attribute source
//!
//! [`AttributeSet`] stores loosely typed values and checks them against the
//! requested type on lookup, the way a styled resource set does. It can be
//! built in code or parsed from a flat JSON object keyed by attribute name:
//!
//! ```json
//! {
//!     "compass_gravity": "top|start",
//!     "compass_margin_left": 24,
//!     "attribution_tint": "#80FFFFFF",
//!     "my_location_foreground": { "resource": 2131165300 }
//! }
//! ```

use crate::attributes::{Attribute, AttributeKind, AttributeSource};
use crate::core::{gravity, image::ImageHandle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("attribute `{attribute}` expects a {expected:?} value, found {found}")]
    TypeMismatch {
        attribute: Attribute,
        expected: AttributeKind,
        found: &'static str,
    },

    #[error("attribute `{attribute}` value {value} is out of range")]
    OutOfRange { attribute: Attribute, value: f64 },

    #[error("attribute `{attribute}` has an invalid colour `{value}`")]
    InvalidColor { attribute: Attribute, value: String },

    #[error("attribute `{attribute}` has invalid gravity flags `{value}`")]
    InvalidGravity { attribute: Attribute, value: String },

    #[cfg(feature = "json")]
    #[error("attribute document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loosely typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Image(ImageHandle),
}

impl AttributeValue {
    fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "a boolean",
            AttributeValue::Number(_) => "a number",
            AttributeValue::Text(_) => "a string",
            AttributeValue::Image(_) => "an image",
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<ImageHandle> for AttributeValue {
    fn from(value: ImageHandle) -> Self {
        AttributeValue::Image(value)
    }
}

/// Attribute source backed by an ordered map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    values: BTreeMap<Attribute, AttributeValue>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing any previous one
    pub fn with(mut self, attribute: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(
        &mut self,
        attribute: Attribute,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.values.insert(attribute, value.into())
    }

    pub fn get(&self, attribute: Attribute) -> Option<&AttributeValue> {
        self.values.get(&attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a flat JSON object keyed by attribute name
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, AttributeError> {
        let raw: BTreeMap<String, AttributeValue> = serde_json::from_str(text)?;
        let mut set = Self::new();
        for (name, value) in raw {
            let attribute: Attribute = name.parse()?;
            set.insert(attribute, value);
        }
        log::debug!("parsed attribute set with {} entries", set.len());
        Ok(set)
    }

    fn mismatch(attribute: Attribute, value: &AttributeValue) -> AttributeError {
        AttributeError::TypeMismatch {
            attribute,
            expected: attribute.kind(),
            found: value.type_name(),
        }
    }

    fn integral(attribute: Attribute, value: f64, min: f64, max: f64) -> Result<i64, AttributeError> {
        if value.fract() != 0.0 || value < min || value > max {
            return Err(AttributeError::OutOfRange { attribute, value });
        }
        Ok(value as i64)
    }
}

impl AttributeSource for AttributeSet {
    type Error = AttributeError;

    fn contains(&self, attribute: Attribute) -> bool {
        self.values.contains_key(&attribute)
    }

    fn boolean(&self, attribute: Attribute, default: bool) -> Result<bool, Self::Error> {
        match self.get(attribute) {
            None => Ok(default),
            Some(AttributeValue::Bool(value)) => Ok(*value),
            Some(other) => Err(Self::mismatch(attribute, other)),
        }
    }

    fn int(&self, attribute: Attribute, default: i32) -> Result<i32, Self::Error> {
        match self.get(attribute) {
            None => Ok(default),
            Some(AttributeValue::Number(value)) => {
                Self::integral(attribute, *value, f64::from(i32::MIN), f64::from(i32::MAX))
                    .map(|value| value as i32)
            }
            Some(AttributeValue::Text(flags)) if attribute.is_gravity() => gravity::parse(flags)
                .ok_or_else(|| AttributeError::InvalidGravity {
                    attribute,
                    value: flags.clone(),
                }),
            Some(other) => Err(Self::mismatch(attribute, other)),
        }
    }

    fn float(&self, attribute: Attribute, default: f32) -> Result<f32, Self::Error> {
        self.double(attribute, f64::from(default)).map(|value| value as f32)
    }

    fn double(&self, attribute: Attribute, default: f64) -> Result<f64, Self::Error> {
        match self.get(attribute) {
            None => Ok(default),
            Some(AttributeValue::Number(value)) => Ok(*value),
            Some(other) => Err(Self::mismatch(attribute, other)),
        }
    }

    fn dimension(&self, attribute: Attribute, default: f32) -> Result<f32, Self::Error> {
        self.float(attribute, default)
    }

    fn color(&self, attribute: Attribute, default: i32) -> Result<i32, Self::Error> {
        match self.get(attribute) {
            None => Ok(default),
            // Accept both signed and unsigned renderings of the packed colour
            Some(AttributeValue::Number(value)) => {
                Self::integral(attribute, *value, f64::from(i32::MIN), f64::from(u32::MAX))
                    .map(|value| if value < 0 { value as i32 } else { value as u32 as i32 })
            }
            Some(AttributeValue::Text(text)) => {
                parse_color(text).ok_or_else(|| AttributeError::InvalidColor {
                    attribute,
                    value: text.clone(),
                })
            }
            Some(other) => Err(Self::mismatch(attribute, other)),
        }
    }

    fn image(&self, attribute: Attribute) -> Result<Option<ImageHandle>, Self::Error> {
        match self.get(attribute) {
            None => Ok(None),
            Some(AttributeValue::Image(handle)) => Ok(Some(*handle)),
            Some(other) => Err(Self::mismatch(attribute, other)),
        }
    }

    fn string(&self, attribute: Attribute) -> Result<Option<String>, Self::Error> {
        match self.get(attribute) {
            None => Ok(None),
            Some(AttributeValue::Text(text)) => Ok(Some(text.clone())),
            Some(other) => Err(Self::mismatch(attribute, other)),
        }
    }
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` into packed ARGB
///
/// Forms without alpha are fully opaque.
pub fn parse_color(text: &str) -> Option<i32> {
    let hex = text.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let raw = u32::from_str_radix(hex, 16).ok()?;

    let argb = match hex.len() {
        3 => 0xF000 | raw,
        4 => raw,
        6 => return Some((0xFF00_0000 | raw) as i32),
        8 => return Some(raw as i32),
        _ => return None,
    };

    // Short forms: duplicate every nibble
    let expanded = (0..4).fold(0u32, |acc, shift| {
        let nibble = (argb >> (shift * 4)) & 0xF;
        acc | ((nibble << 4 | nibble) << (shift * 8))
    });
    Some(expanded as i32)
}
