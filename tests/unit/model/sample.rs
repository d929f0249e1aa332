use super::*;

#[test]
fn colors_fade_by_default() {
    assert!(Color4D::new(0.0, 1, 2, 3).is_fade);
    assert!(!Color4D::cut(0.0, 1, 2, 3).is_fade);
    assert_eq!(Color4D::new(0.0, 1, 2, 3).rgb(), [1, 2, 3]);
}

#[test]
fn try_new_accepts_integral_channels() {
    let c = Color4D::try_new(1.5, 0.0, 128.0, 255.0, false).unwrap();
    assert_eq!(c, Color4D::cut(1.5, 0, 128, 255));
}

#[test]
fn try_new_rejects_out_of_range_channels() {
    for bad in [256.0, -1.0, 12.5, f64::NAN, f64::INFINITY] {
        let err = Color4D::try_new(0.0, bad, 0.0, 0.0, true).unwrap_err();
        assert!(matches!(err, ShowError::ValueRange(_)), "{bad}: {err}");
    }
}

#[test]
fn deserialization_validates_channels() {
    let c: Color4D = serde_json::from_str(r#"{"t":2,"r":10,"g":20,"b":30}"#).unwrap();
    assert_eq!(c, Color4D::new(2.0, 10, 20, 30));

    let err = serde_json::from_str::<Color4D>(r#"{"t":2,"r":300,"g":0,"b":0}"#).unwrap_err();
    assert!(err.to_string().contains("[0, 255]"));
}

#[test]
fn point_deserializes_from_named_fields() {
    let p: Point4D = serde_json::from_str(r#"{"t":1,"x":2,"y":3,"z":4.5}"#).unwrap();
    assert_eq!(p, Point4D::new(1.0, 2.0, 3.0, 4.5));
}

#[test]
fn non_finite_time_is_a_validation_error() {
    assert!(ensure_finite_time(0.0, "point").is_ok());
    let err = ensure_finite_time(f64::NAN, "point").unwrap_err();
    assert!(matches!(err, ShowError::Validation(_)));
}

#[test]
fn non_finite_coordinates_are_a_validation_error() {
    assert!(ensure_finite_coords(&Point4D::new(0.0, 1.0, -2.0, 1e300)).is_ok());
    let err = ensure_finite_coords(&Point4D::new(0.0, 0.0, f64::NAN, 0.0)).unwrap_err();
    assert!(matches!(err, ShowError::Validation(_)));
}
