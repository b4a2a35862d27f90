use chrono::{DateTime, Local};
use engine::{Clock, CountdownEngine, CountdownTicker, ElapsedPolicy, RemainingDuration, TargetInstant};
use savedate::components::common::{Msg, ThemeActivityMsg};
use savedate::components::countdown_display::CountdownDisplay;
use savedate::components::palette::Palette;
use savedate::components::state::ComponentState;
use savedate::components::theme_picker::ThemePicker;
use savedate::config::event::UnitLabels;
use savedate::config::keys::KeyBindingsConfig;
use savedate::theme::{ThemeLoader, ThemeProvider, ThemeRole};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, NoUserEvent};

/// Wall clock that follows tokio's (paused) virtual time.
struct VirtualClock {
    base: DateTime<Local>,
    started: Instant,
}

impl Clock for VirtualClock {
    fn now(&self) -> DateTime<Local> {
        let elapsed = Instant::now().duration_since(self.started);
        self.base + chrono::Duration::from_std(elapsed).expect("elapsed fits")
    }
}

fn key(code: Key) -> Event<NoUserEvent> {
    Event::Keyboard(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_picker_selection_applies_through_shared_store() {
    let provider = ThemeProvider::default();
    let loader = ThemeLoader::embedded_only();
    let palette = Palette::new(provider.use_theme().expect("theme"));
    let mut picker = ThemePicker::new(
        provider.use_theme().expect("theme"),
        KeyBindingsConfig::default(),
        loader.clone(),
    );
    picker.mount().expect("mount");

    // blush, classic, midnight, sage, sand
    picker.on(key(Key::Down));
    picker.on(key(Key::Down));
    let msg = picker.on(key(Key::Enter));

    let Some(Msg::ThemeActivity(ThemeActivityMsg::PresetSelected(name))) = msg else {
        panic!("expected a preset selection, got {msg:?}");
    };
    assert_eq!(name, "sage");

    let preset = loader.load_preset(&name).expect("load");
    provider
        .use_theme()
        .expect("theme")
        .apply_theme(&preset)
        .expect("apply");

    let rows = palette.rows();
    assert_eq!(rows[0], (ThemeRole::Primary, "#6b7f6a".to_string()));
}

#[test]
fn test_countdown_display_redraws_on_new_value() {
    let (tx, rx) = watch::channel(RemainingDuration::from_millis(26 * 86_400_000));
    let mut display = CountdownDisplay::new(
        ThemeProvider::default().use_theme().expect("theme"),
        &UnitLabels::default(),
        rx,
    );

    tx.send(RemainingDuration::from_millis(26 * 86_400_000 - 1_000))
        .expect("receiver alive");

    assert_eq!(display.on(Event::Tick), Some(Msg::ForceRedraw));
    assert_eq!(display.current().days, 25);
    assert_eq!(display.current().seconds, 59);
}

#[tokio::test(start_paused = true)]
async fn test_countdown_display_follows_running_ticker() {
    let target = TargetInstant::parse_local("2029-09-01T12:00:00").expect("target");
    let clock = VirtualClock {
        base: target.at() - chrono::Duration::seconds(90),
        started: Instant::now(),
    };
    let ticker = CountdownTicker::start(
        CountdownEngine::initialize(target, clock, ElapsedPolicy::Freeze),
        Duration::from_secs(1),
    );
    let mut display = CountdownDisplay::new(
        ThemeProvider::default().use_theme().expect("theme"),
        &UnitLabels::default(),
        ticker.subscribe(),
    );
    assert_eq!(display.current(), RemainingDuration::from_millis(90_000));

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(display.on(Event::Tick), Some(Msg::ForceRedraw));
    assert_eq!(display.current().minutes, 1);
    assert_eq!(display.current().seconds, 29);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(display.on(Event::Tick), Some(Msg::ForceRedraw));
    assert_eq!(display.current().seconds, 28);

    ticker.shutdown().await;
    tokio::time::sleep(Duration::from_secs(3)).await;
    display.on(Event::Tick);
    assert_eq!(display.current(), RemainingDuration::from_millis(88_000));
}
