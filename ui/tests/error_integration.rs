use claims::assert_matches;
use savedate::components::common::{Msg, PopupActivityMsg};
use savedate::error::ErrorReporter;
use savedate::theme::{ThemeProvider, ThemeRole};
use savedate::AppError;
use std::sync::mpsc;

#[test]
fn test_rejected_color_reaches_the_popup_channel() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);
    let theme = ThemeProvider::default().use_theme().expect("theme");

    let error = theme
        .update_color(ThemeRole::Accent, "not-a-color")
        .expect_err("invalid color must be rejected");
    assert_matches!(error, AppError::Config(_));

    reporter.report_simple(error, "ThemeStore", "update_color");

    match rx.recv().expect("popup message") {
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(message))) => {
            assert!(message.starts_with("Configuration Error"));
            assert!(message.contains("not-a-color"));
        }
        other => panic!("Expected a configuration error popup, got {other:?}"),
    }
}

#[test]
fn test_uninitialized_provider_is_a_configuration_error() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    let error = ThemeProvider::uninitialized()
        .use_theme()
        .err()
        .expect("no theme outside a provider");
    reporter.report_critical_and_exit(
        error,
        "Hero",
        "mount",
        "The invitation cannot be drawn without a theme.",
    );

    assert_matches!(
        rx.recv().expect("popup message"),
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(_)))
    );
}

#[test]
fn test_reporter_survives_closed_channel() {
    let (tx, rx) = mpsc::channel();
    drop(rx);

    // Only logs when the main loop is gone
    ErrorReporter::new(tx).report_theme_error("switch", "preset 'neon' not found");
}
