use super::*;

#[test]
fn canvas_accepts_positive_extents() {
    let c = Canvas::new(50.0, 20.5).unwrap();
    assert_eq!(c.width, 50.0);
    assert_eq!(c.height, 20.5);
}

#[test]
fn canvas_rejects_zero_negative_and_nan() {
    assert!(Canvas::new(0.0, 10.0).is_err());
    assert!(Canvas::new(10.0, -1.0).is_err());
    assert!(Canvas::new(f64::NAN, 10.0).is_err());
    assert!(Canvas::new(10.0, f64::INFINITY).is_err());
}

#[test]
fn radius_must_be_finite_and_positive() {
    assert!(validate_radius(0.5).is_ok());
    assert!(validate_radius(0.0).is_err());
    assert!(validate_radius(-3.0).is_err());
    assert!(validate_radius(f64::NAN).is_err());
}

#[test]
fn canvas_json_shape() {
    let c: Canvas = serde_json::from_str(r#"{"width": 300, "height": 120.5}"#).unwrap();
    assert_eq!(c, Canvas { width: 300.0, height: 120.5 });
}
