use map_options::prelude::*;
use map_options::{AttributeError, CodecError};
use std::collections::HashSet;

/// Integration tests for the import -> persist -> restore flow
/// These tests exercise the library the way a map surface host does
#[cfg(test)]
mod integration_tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A theme as a host application would ship it
    const THEME: &str = r##"{
        "camera_target_lat": 51.5,
        "camera_target_lng": -0.125,
        "camera_zoom": 11,
        "camera_tilt": 30,
        "style_url": "mapbox://styles/mapbox/outdoors-v9",
        "compass_gravity": "top|start",
        "compass_margin_left": 12,
        "logo_enabled": false,
        "attribution_tint": "#FF4264FB",
        "attribution_margin_left": 8,
        "zoom_min": 2,
        "zoom_max": 17.5,
        "tilt_enabled": false,
        "my_location_enabled": true,
        "my_location_foreground": { "resource": 2131165301 },
        "my_location_accuracy_alpha": 64
    }"##;

    #[test]
    fn test_theme_import() {
        init_logging();

        let attributes = AttributeSet::from_json(THEME).unwrap();
        let options = import_from(attributes, 2.0).unwrap();

        let camera = options.camera().unwrap();
        assert_eq!(camera.target, LatLng::new(51.5, -0.125));
        assert_eq!(camera.zoom, 11.0);
        assert_eq!(camera.bearing, 0.0);
        assert_eq!(camera.tilt, 30.0);

        assert_eq!(options.style_url(), Some("mapbox://styles/mapbox/outdoors-v9"));
        assert_eq!(options.compass_gravity(), gravity::TOP | gravity::START);
        assert_eq!(options.compass_margins(), Some([24, 20, 20, 20]));
        assert!(!options.logo_enabled());
        assert_eq!(options.logo_margins(), Some([32, 32, 32, 32]));
        assert_eq!(options.attribution_tint_color(), 0xFF4264FBu32 as i32);
        assert_eq!(options.attribution_margins(), Some([16, 14, 14, 14]));
        assert_eq!(options.min_zoom(), 2.0);
        assert_eq!(options.max_zoom(), 17.5);
        assert!(!options.tilt_gestures_enabled());
        assert!(options.location_enabled());
        assert_eq!(options.location_foreground_image(), Some(ImageHandle::Resource(2131165301)));
        assert_eq!(
            options.location_foreground_bearing_image(),
            Some(ImageHandle::BuiltIn(BuiltInImage::LocationBearing))
        );
        assert_eq!(options.location_accuracy_alpha(), 64);
    }

    #[test]
    fn test_persist_and_restore() {
        init_logging();

        let options = import_from(AttributeSet::from_json(THEME).unwrap(), 3.0).unwrap();
        let bytes = encode(&options).unwrap();
        let restored = decode(&bytes).unwrap();

        // Image handles do not survive, everything else does
        assert!(restored.has_no_location_images());
        assert!(!options.has_no_location_images());
        assert_eq!(restored, options.without_location_images());
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let records = vec![
            MapOptions::new(),
            MapOptions::new()
                .with_camera(CameraPosition::new(LatLng::new(-33.8688, 151.2093), 14.25, 270.0, 60.0))
                .with_compass_enabled(false)
                .with_compass_gravity(gravity::BOTTOM | gravity::RIGHT)
                .with_compass_margins([-1, 0, i32::MAX, i32::MIN]),
            MapOptions::new()
                .with_min_zoom(20.0)
                .with_max_zoom(1.0)
                .with_attribution_tint_color(0)
                .with_location_background_padding([3, 3, 3, 3])
                .with_style_url(""),
            MapOptions::new()
                .with_debug_active(true)
                .with_rotate_gestures_enabled(false)
                .with_scroll_gestures_enabled(false)
                .with_tilt_gestures_enabled(false)
                .with_zoom_gestures_enabled(false)
                .with_zoom_controls_enabled(true)
                .with_location_enabled(true)
                .with_location_foreground_tint_color(-2)
                .with_location_background_tint_color(i32::MIN)
                .with_location_accuracy_tint_color(0x12345678)
                .with_location_accuracy_alpha(300)
                .with_style_url("https://example.com/style.json?key=ünïcødé"),
        ];

        for options in records {
            for format in [RecordFormat::Legacy, RecordFormat::Versioned] {
                let bytes = format.encode(&options).unwrap();
                assert_eq!(format.decode(&bytes).unwrap(), options, "{:?}", format);
            }
        }
    }

    #[test]
    fn test_records_deduplicate_by_value() {
        let a = import_from(AttributeSet::new(), 1.0).unwrap();
        let b = import_from(AttributeSet::new(), 1.0).unwrap();
        let c = import_from(AttributeSet::new(), 2.0).unwrap();

        let unique: HashSet<MapOptions> = [a, b, c].into_iter().collect();
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_bad_theme_reports_attribute() {
        let attributes = AttributeSet::from_json(r#"{ "logo_margin_top": "wide" }"#).unwrap();
        let err = import_from(attributes, 1.0).unwrap_err();

        assert!(matches!(
            err,
            AttributeError::TypeMismatch {
                attribute: Attribute::LogoMarginTop,
                ..
            }
        ));
        assert!(err.to_string().contains("logo_margin_top"));
    }

    #[test]
    fn test_versioned_header_guards_legacy_reader() {
        let options = MapOptions::new().with_debug_active(true);
        let versioned = RecordFormat::Versioned.encode(&options).unwrap();
        let legacy = encode(&options).unwrap();

        assert_eq!(versioned.len(), legacy.len() + 6);
        assert!(matches!(
            RecordFormat::Versioned.decode(&legacy),
            Err(CodecError::BadMagic)
        ));
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let options = MapOptions::new().with_logo_margins([1, 2, 3, 4]);
        let mut bytes = encode(&options).unwrap();
        bytes.extend_from_slice(&[0xAA; 8]);
        assert_eq!(decode(&bytes).unwrap(), options);
    }

    #[test]
    fn test_json_file_import() {
        let path = std::env::temp_dir().join(format!("map-options-theme-{}.json", std::process::id()));
        std::fs::write(&path, THEME).unwrap();

        let options = map_options::import_json_file(&path, 1.0).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.compass_margins(), Some([12, 10, 10, 10]));
        assert!(matches!(
            map_options::import_json_file(&path, 1.0),
            Err(map_options::Error::Io(_))
        ));
    }
}
