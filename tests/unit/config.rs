use super::*;
use rand::Rng;

#[test]
fn defaults_fill_missing_fields() {
    let cfg = CurveConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, CurveConfig::default());
    assert_eq!(cfg.count, 50);
    assert_eq!(cfg.max_step_fraction, 0.05);
    assert_eq!(cfg.style, CurveStyle::Smooth);
    assert_eq!(cfg.stroke.color, "green");
    assert_eq!(cfg.stroke.width, 2.0);
}

#[test]
fn parses_full_document() {
    let cfg = CurveConfig::from_json_str(
        r##"{
            "canvas": { "width": 800, "height": 200 },
            "style": "polyline",
            "count": 12,
            "max_step_fraction": 0.1,
            "stroke": { "color": "#22c55e", "width": 1.5 },
            "seed": 99
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.canvas, Canvas::new(800.0, 200.0).unwrap());
    assert_eq!(cfg.style, CurveStyle::Polyline);
    assert_eq!(cfg.count, 12);
    assert_eq!(cfg.seed, Some(99));
    assert_eq!(cfg.stroke.color, "#22c55e");
}

#[test]
fn rejects_invalid_values() {
    for bad in [
        r#"{"count": 0}"#,
        r#"{"max_step_fraction": 0}"#,
        r#"{"max_step_fraction": -0.5}"#,
        r#"{"canvas": {"width": 0, "height": 10}}"#,
        r#"{"stroke": {"width": 0}}"#,
        r#"{"stroke": {"color": "  "}}"#,
        r#"{"canvas": {"width": 100, "height": 1e308}, "max_step_fraction": 1.0}"#,
        r#"{"canvas": {"width": 100, "height": 100}, "max_step_fraction": 1e307}"#,
    ] {
        let err = CurveConfig::from_json_str(bad).unwrap_err();
        assert!(matches!(err, StonkError::Validation(_)), "{bad}: {err}");
    }
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(
        CurveConfig::from_json_str("{"),
        Err(StonkError::Serde(_))
    ));
    assert!(matches!(
        CurveConfig::from_json_str(r#"{"colour": "red"}"#),
        Err(StonkError::Serde(_))
    ));
    assert!(matches!(
        CurveConfig::from_json_str(r#"{"style": "zigzag"}"#),
        Err(StonkError::Serde(_))
    ));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = CurveConfig {
        style: CurveStyle::Scatter,
        seed: Some(5),
        ..CurveConfig::default()
    };
    let back = CurveConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn seeded_rng_repeats() {
    let cfg = CurveConfig {
        seed: Some(11),
        ..CurveConfig::default()
    };
    let a: u64 = cfg.rng().gen_range(0..u64::MAX);
    let b: u64 = cfg.rng().gen_range(0..u64::MAX);
    assert_eq!(a, b);
}

#[test]
fn missing_file_is_reported() {
    let err = CurveConfig::from_path("target/does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open curve config JSON"));
}
