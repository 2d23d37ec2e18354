use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Represents a geographical coordinate with latitude and longitude
///
/// Equality and hashing compare the raw bit patterns of both components so
/// that a `LatLng` can live inside hashed configuration values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
    }
}

impl Eq for LatLng {}

impl Hash for LatLng {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lng.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitwise_equality() {
        assert_eq!(LatLng::new(f64::NAN, 1.0), LatLng::new(f64::NAN, 1.0));
        assert_ne!(LatLng::new(0.0, 1.0), LatLng::new(-0.0, 1.0));
    }
}
