use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config(style: CurveStyle) -> CurveConfig {
    CurveConfig {
        canvas: Canvas::new(400.0, 100.0).unwrap(),
        style,
        count: 20,
        seed: Some(1),
        ..CurveConfig::default()
    }
}

#[test]
fn smooth_drawing_keeps_samples_and_curve_in_sync() {
    let cfg = config(CurveStyle::Smooth);
    let d = draw(&cfg, &mut cfg.rng()).unwrap();
    assert_eq!(d.style(), CurveStyle::Smooth);
    let Shape::Smooth { samples, curve } = &d.shape else {
        panic!("expected smooth shape");
    };
    assert_eq!(samples.len(), 21);
    assert_eq!(curve.segments.len(), 20);
    assert_eq!(curve.start, samples[0]);
    assert_eq!(curve.end(), samples[20]);
    assert!(d.path_data().starts_with("M 0 50 C "));
}

#[test]
fn polyline_and_scatter_shapes() {
    let cfg = config(CurveStyle::Polyline);
    let d = draw(&cfg, &mut cfg.rng()).unwrap();
    match &d.shape {
        Shape::Polyline { points } => assert_eq!(points.len(), 21),
        other => panic!("unexpected shape {other:?}"),
    }
    assert_eq!(d.path_data().matches('L').count(), 20);

    let cfg = config(CurveStyle::Scatter);
    let d = draw(&cfg, &mut cfg.rng()).unwrap();
    match &d.shape {
        Shape::Scatter { lines } => assert_eq!(lines.len(), 20),
        other => panic!("unexpected shape {other:?}"),
    }
    assert_eq!(d.to_bez_path().elements().len(), 40);
}

#[test]
fn same_seed_same_drawing() {
    let cfg = config(CurveStyle::Smooth);
    let a = draw(&cfg, &mut cfg.rng()).unwrap();
    let b = draw(&cfg, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_config_is_rejected_before_drawing() {
    let cfg = CurveConfig {
        count: 0,
        ..CurveConfig::default()
    };
    assert!(draw(&cfg, &mut StdRng::seed_from_u64(0)).is_err());
}

#[test]
fn overflowing_step_range_is_an_error_not_a_panic() {
    let cfg = CurveConfig {
        canvas: Canvas::new(100.0, 1e308).unwrap(),
        max_step_fraction: 1.0,
        ..CurveConfig::default()
    };
    let err = draw(&cfg, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, StonkError::Validation(_)));
}

#[test]
fn drawing_json_is_tagged_by_style() {
    let cfg = config(CurveStyle::Polyline);
    let d = draw(&cfg, &mut cfg.rng()).unwrap();
    let json = d.to_json_pretty().unwrap();
    assert!(json.contains("\"style\": \"polyline\""));
    let back: Drawing = serde_json::from_str(&json).unwrap();
    assert_eq!(back.style(), CurveStyle::Polyline);
    assert_eq!(back.canvas, d.canvas);
}
