use super::*;

fn p(t: f64, x: f64, y: f64, z: f64) -> Point4D {
    Point4D::new(t, x, y, z)
}

#[test]
fn new_sorts_unsorted_input_once() {
    let traj = Trajectory::new([p(2.0, 0.0, 0.0, 2.0), p(0.0, 0.0, 0.0, 0.0), p(1.0, 0.0, 0.0, 1.0)])
        .unwrap();
    let times: Vec<f64> = traj.points().iter().map(|p| p.t).collect();
    assert_eq!(times, vec![0.0, 1.0, 2.0]);
    assert_eq!(traj.end_time(), Some(2.0));
}

#[test]
fn new_rejects_duplicate_times() {
    let err = Trajectory::new([p(1.0, 0.0, 0.0, 0.0), p(1.0, 5.0, 5.0, 5.0)]).unwrap_err();
    assert!(matches!(err, ShowError::Ordering(_)));
}

#[test]
fn append_enforces_strictly_increasing_time() {
    let mut traj = Trajectory::default();
    traj.append(p(0.0, 0.0, 0.0, 0.0)).unwrap();
    traj.append(p(1.0, 1.0, 2.0, 3.0)).unwrap();

    let before = traj.clone();
    for t in [0.5, 1.0, -3.0] {
        let err = traj.append(p(t, 9.0, 9.0, 9.0)).unwrap_err();
        assert!(matches!(err, ShowError::Ordering(_)), "t={t}: {err}");
        assert_eq!(traj, before);
    }
    assert_eq!(traj.len(), 2);
}

#[test]
fn append_rejects_nan_time() {
    let mut traj = Trajectory::default();
    let err = traj.append(p(f64::NAN, 0.0, 0.0, 0.0)).unwrap_err();
    assert!(matches!(err, ShowError::Validation(_)));
    assert!(traj.is_empty());
}

#[test]
fn document_rounds_and_emits_reserved_slot() {
    let traj = Trajectory::new([p(0.0, 0.0, 0.0, 0.0), p(1.23456, 1.0001, -2.0004, 3.9999)]).unwrap();
    let doc = traj.to_document(3);
    assert_eq!(doc.version, 1);
    assert_eq!(doc.points.len(), 2);
    assert_eq!(doc.points[1].0, 1.235);
    assert_eq!(doc.points[1].1, [1.0, -2.0, 4.0]);
    assert!(doc.points[1].2.is_empty());

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "points": [[0.0, [0.0, 0.0, 0.0], []], [1.235, [1.0, -2.0, 4.0], []]],
            "version": 1
        })
    );
}

#[test]
fn empty_trajectory_has_no_points() {
    let doc = Trajectory::default().to_document(3);
    assert!(doc.points.is_empty());
    assert_eq!(Trajectory::default().end_time(), None);
}

#[test]
fn append_rejects_non_finite_coordinates() {
    let mut traj = Trajectory::default();
    traj.append(p(0.0, 0.0, 0.0, 0.0)).unwrap();
    let before = traj.clone();

    for bad in [
        p(1.0, f64::NAN, 0.0, 0.0),
        p(1.0, 0.0, f64::INFINITY, 0.0),
        p(1.0, 0.0, 0.0, f64::NEG_INFINITY),
    ] {
        let err = traj.append(bad).unwrap_err();
        assert!(matches!(err, ShowError::Validation(_)), "{err}");
        assert_eq!(traj, before);
    }

    // Every emitted coordinate is a JSON number.
    let json = serde_json::to_string(&traj.to_document(3)).unwrap();
    assert!(!json.contains("null"), "{json}");
}

#[test]
fn new_rejects_non_finite_coordinates() {
    let err = Trajectory::new([p(0.0, 0.0, 0.0, 0.0), p(1.0, f64::NAN, f64::INFINITY, 0.0)])
        .unwrap_err();
    assert!(matches!(err, ShowError::Validation(_)));
}
