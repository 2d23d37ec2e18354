use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Initial camera pose of a map surface
///
/// Field order is also the persisted order: target, zoom, bearing, tilt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraPosition {
    /// Point the camera looks at
    pub target: LatLng,
    /// Zoom level
    pub zoom: f64,
    /// Bearing in degrees clockwise from north
    pub bearing: f64,
    /// Tilt in degrees away from nadir
    pub tilt: f64,
}

impl CameraPosition {
    pub fn new(target: LatLng, zoom: f64, bearing: f64, tilt: f64) -> Self {
        Self {
            target,
            zoom,
            bearing,
            tilt,
        }
    }

    /// Start a fluent camera builder
    pub fn builder() -> CameraPositionBuilder {
        CameraPositionBuilder::default()
    }
}

impl PartialEq for CameraPosition {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && self.zoom.to_bits() == other.zoom.to_bits()
            && self.bearing.to_bits() == other.bearing.to_bits()
            && self.tilt.to_bits() == other.tilt.to_bits()
    }
}

impl Eq for CameraPosition {}

impl Hash for CameraPosition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
        self.zoom.to_bits().hash(state);
        self.bearing.to_bits().hash(state);
        self.tilt.to_bits().hash(state);
    }
}

/// Builder for [`CameraPosition`]
#[derive(Debug, Clone, Default)]
pub struct CameraPositionBuilder {
    position: CameraPosition,
}

impl CameraPositionBuilder {
    /// Set the point the camera looks at
    pub fn target(mut self, target: LatLng) -> Self {
        self.position.target = target;
        self
    }

    /// Set the zoom level
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.position.zoom = zoom;
        self
    }

    /// Set the bearing in degrees
    pub fn bearing(mut self, bearing: f64) -> Self {
        self.position.bearing = bearing;
        self
    }

    /// Set the tilt in degrees
    pub fn tilt(mut self, tilt: f64) -> Self {
        self.position.tilt = tilt;
        self
    }

    pub fn build(self) -> CameraPosition {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let camera = CameraPosition::builder()
            .target(LatLng::new(52.52, 13.405))
            .zoom(11.0)
            .bearing(90.0)
            .tilt(30.0)
            .build();

        assert_eq!(camera, CameraPosition::new(LatLng::new(52.52, 13.405), 11.0, 90.0, 30.0));
    }

    #[test]
    fn test_default_is_origin() {
        let camera = CameraPosition::builder().build();
        assert_eq!(camera.target, LatLng::default());
        assert_eq!(camera.zoom, 0.0);
    }

    #[test]
    fn test_any_field_breaks_equality() {
        let base = CameraPosition::new(LatLng::new(1.0, 2.0), 3.0, 4.0, 5.0);
        assert_ne!(base, CameraPosition { zoom: 3.5, ..base });
        assert_ne!(base, CameraPosition { bearing: 0.0, ..base });
        assert_ne!(base, CameraPosition { tilt: 0.0, ..base });
        assert_ne!(base, CameraPosition { target: LatLng::new(1.0, 2.5), ..base });
    }
}
