//! Preset loading tests
//!
//! Cards can be configured from JSON files; missing fields fall back to
//! defaults and broken files report an error instead of a half-built card.

use std::io::Write;

use tempfile::NamedTempFile;
use tiltcard_core::{CardConfig, MotionModel, TiltError};

fn write_preset(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_preset() {
    let file = write_preset(
        r#"{
            "width": 320,
            "height": 480,
            "max_angle": 15,
            "parallax_offset": 4,
            "sensitivity": 0.4,
            "motion": "release-only",
            "spring": { "mass": 1, "stiffness": 120, "damping": 18 },
            "sheen": { "sweep": 90, "min_opacity": 0.1, "max_opacity": 0.6 }
        }"#,
    );

    let config = CardConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.width, 320.0);
    assert_eq!(config.max_angle, 15.0);
    assert_eq!(config.motion, MotionModel::ReleaseOnly);
    assert_eq!(config.spring.damping, 18.0);
    assert_eq!(config.spring.rest_speed_threshold, 0.01);
    assert_eq!(config.sheen.sweep, 90.0);
    assert_eq!(config.sheen.scale, 1.3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_object_is_default() {
    let file = write_preset("{}");
    let config = CardConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config, CardConfig::default());
}

#[test]
fn test_round_trip_through_file() {
    let original = CardConfig {
        max_angle: 20.0,
        motion: MotionModel::ReleaseOnly,
        ..CardConfig::default()
    };
    let file = write_preset(&serde_json::to_string_pretty(&original).unwrap());
    assert_eq!(CardConfig::from_json_file(file.path()).unwrap(), original);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CardConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TiltError::Io(_)));
}

#[test]
fn test_unknown_motion_is_json_error() {
    let file = write_preset(r#"{ "motion": "wobbly" }"#);
    let err = CardConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, TiltError::Json(_)));
}

#[test]
fn test_invalid_values_load_then_sanitize() {
    let file = write_preset(r#"{ "width": -5, "max_angle": -1 }"#);
    let config = CardConfig::from_json_file(file.path()).unwrap();
    assert!(config.validate().is_err());

    let config = config.sanitized();
    assert!(config.validate().is_ok());
    assert!(config.is_static());
}
