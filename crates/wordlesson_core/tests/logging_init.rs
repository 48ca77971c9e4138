use wordlesson_core::{init_logging, logging_status};

// Logger state is process-global, so every scenario lives in one test.
#[test]
fn init_is_idempotent_and_refuses_reconfiguration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_dir = dir.path().join("logs");
    let log_dir_str = log_dir.to_str().expect("utf-8 temp path");

    assert!(init_logging("verbose", log_dir_str).is_err());
    assert!(logging_status().is_none());

    init_logging("info", log_dir_str).expect("first init succeeds");
    init_logging("INFO", log_dir_str).expect("same settings are accepted again");
    assert!(log_dir.is_dir());

    let (level, active_dir) = logging_status().expect("logging is active");
    assert_eq!(level, "info");
    assert_eq!(active_dir, log_dir);

    let err = init_logging("debug", log_dir_str).expect_err("level switch is refused");
    assert!(err.contains("refusing to switch"));

    let other_dir = dir.path().join("other");
    let err = init_logging("info", other_dir.to_str().expect("utf-8 temp path"))
        .expect_err("directory switch is refused");
    assert!(err.contains("refusing to switch"));
}
