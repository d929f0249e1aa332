use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShowError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ShowError::ordering("x").to_string().contains("ordering error:"));
    assert!(
        ShowError::mismatched_drones("x")
            .to_string()
            .contains("mismatched drones:")
    );
    assert!(
        ShowError::value_range("x")
            .to_string()
            .contains("value out of range:")
    );
    assert!(
        ShowError::tool_missing("x")
            .to_string()
            .contains("external tool missing:")
    );
    assert!(ShowError::compile("x").to_string().contains("compile error:"));
    assert!(
        ShowError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_is_passed_through_untouched() {
    let base = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
    let err = ShowError::from(base);
    match err {
        ShowError::Io(e) => {
            assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
            assert_eq!(e.to_string(), "nope");
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn serde_json_errors_map_to_serde() {
    let err: ShowError = serde_json::from_str::<u8>("\"x\"").unwrap_err().into();
    assert!(matches!(err, ShowError::Serde(_)));
}
