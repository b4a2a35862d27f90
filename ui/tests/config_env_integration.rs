//! Environment overrides mutate process-wide state, so they live in their own
//! test binary with a single test.

use engine::ElapsedPolicy;
use savedate::config::load_config;
use std::fs;

const OVERRIDES: [(&str, &str); 3] = [
    ("SAVEDATE_EVENT__TARGET", "2026-09-12T16:00:00"),
    ("SAVEDATE_COUNTDOWN__ELAPSED_POLICY", "zero"),
    ("SAVEDATE_COUNTDOWN__CADENCE_MS", "500"),
];

#[test]
fn test_environment_overrides_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[event]
target = "2025-03-24T18:00:00"

[countdown]
cadence_ms = 1000
elapsed_policy = "freeze"
"#,
    )
    .expect("write config");

    for (key, value) in OVERRIDES {
        unsafe { std::env::set_var(key, value) };
    }
    let result = load_config(Some(path.as_path()));
    for (key, _) in OVERRIDES {
        unsafe { std::env::remove_var(key) };
    }

    let config = result.as_config().expect("config loads");
    assert_eq!(config.event().target_raw(), "2026-09-12T16:00:00");
    assert_eq!(config.countdown().elapsed_policy(), ElapsedPolicy::Zero);
    assert_eq!(config.countdown().cadence_ms(), 500);
    assert!(config.validate().is_ok());
}
