use super::*;

const DEMO: &str = r#"{
  "title": "Demo",
  "drones": {
    "d1": {
      "trajectory": [
        {"t": 1, "x": 1, "y": 2, "z": 3},
        {"t": 0, "x": 0, "y": 0, "z": 0}
      ],
      "lights": [
        {"t": 1, "r": 0, "g": 255, "b": 0, "is_fade": false},
        {"t": 0, "r": 255, "g": 0, "b": 0}
      ]
    }
  }
}"#;

#[test]
fn manifest_builds_sorted_converter() {
    let show = ShowSamples::from_json_str(DEMO)
        .unwrap()
        .into_converter()
        .unwrap();
    assert_eq!(show.title(), "Demo");
    let d1 = show.drone("d1").unwrap();
    assert_eq!(d1.trajectory.points()[0], Point4D::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(d1.lights.colors()[0], Color4D::new(0.0, 255, 0, 0));
    assert_eq!(d1.lights.colors()[1], Color4D::cut(1.0, 0, 255, 0));
}

#[test]
fn missing_sample_lists_default_to_empty() {
    let show: ShowConverter = ShowSamples::from_json_str(r#"{"title":"t","drones":{"x":{}}}"#)
        .unwrap()
        .try_into()
        .unwrap();
    assert!(show.drone("x").unwrap().trajectory.is_empty());
}

#[test]
fn duplicate_trajectory_times_name_the_drone() {
    let text = r#"{"title":"t","drones":{"uav7":{"trajectory":[
        {"t":1,"x":0,"y":0,"z":0},{"t":1,"x":1,"y":1,"z":1}]}}}"#;
    let err = ShowSamples::from_json_str(text)
        .unwrap()
        .into_converter()
        .unwrap_err();
    match err {
        ShowError::Ordering(msg) => assert!(msg.contains("uav7"), "{msg}"),
        other => panic!("expected Ordering, got {other:?}"),
    }
}

#[test]
fn fractional_channels_are_rejected_while_parsing() {
    let text = r#"{"title":"t","drones":{"a":{"lights":[{"t":0,"r":0.5,"g":0,"b":0}]}}}"#;
    let err = ShowSamples::from_json_str(text).unwrap_err();
    assert!(matches!(err, ShowError::Serde(_)));
    assert!(err.to_string().contains("[0, 255]"));
}
