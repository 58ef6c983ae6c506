use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollyError::invalid_step_range(10.0, 5.0)
            .to_string()
            .contains("invalid step range:")
    );
    assert!(
        ScrollyError::offset_out_of_range(1.0, 2.0)
            .to_string()
            .contains("precedes step start")
    );
    assert!(
        ScrollyError::scheduler_start("x")
            .to_string()
            .contains("scheduler start failure:")
    );
    assert!(
        ScrollyError::telemetry_send("x")
            .to_string()
            .contains("telemetry send failure:")
    );
    assert!(
        ScrollyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn step_errors_are_local() {
    assert!(ScrollyError::invalid_step_range(1.0, 1.0).is_step_local());
    assert!(ScrollyError::offset_out_of_range(0.0, 1.0).is_step_local());
    assert!(!ScrollyError::scheduler_start("boom").is_step_local());
    assert!(!ScrollyError::telemetry_send("boom").is_step_local());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: ScrollyError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollyError::Serde(_)));
}
