use super::*;

#[test]
fn canvas_rejects_degenerate_sizes() {
    assert!(Canvas::new(0.0, 10.0).is_err());
    assert!(Canvas::new(10.0, -1.0).is_err());
    assert!(Canvas::new(f64::NAN, 10.0).is_err());
    assert!(Canvas::new(10.0, f64::INFINITY).is_err());
    assert!(Canvas::new(10.0, 20.0).is_ok());
}

#[test]
fn canvas_contains_is_closed() {
    let c = Canvas::new(100.0, 50.0).unwrap();
    assert!(c.contains(Point::new(0.0, 0.0)));
    assert!(c.contains(Point::new(100.0, 50.0)));
    assert!(!c.contains(Point::new(100.5, 10.0)));
    assert!(!c.contains(Point::new(10.0, -0.1)));
    assert_eq!(c.mid_y(), 25.0);
}

#[test]
fn canvas_serde_shape() {
    let c: Canvas = serde_json::from_str(r#"{"width": 640, "height": 480}"#).unwrap();
    assert_eq!(c, Canvas::new(640.0, 480.0).unwrap());
}
