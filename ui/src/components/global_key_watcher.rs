use crate::components::common::{Msg, ThemeActivityMsg};
use crate::config::keys::KeyBindingsConfig;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every event.
///
/// Handles quit and opening the theme picker. While suspended (a popup or
/// the picker has focus) only Ctrl+C still quits.
#[derive(MockComponent)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    keys: KeyBindingsConfig,
    suspended: bool,
}

impl GlobalKeyWatcher {
    pub fn new(keys: KeyBindingsConfig, suspended: bool) -> Self {
        Self {
            component: Phantom::default(),
            keys,
            suspended,
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if !self.suspended => {
                if c == self.keys.quit() {
                    Some(Msg::AppClose)
                } else if c == self.keys.theme() {
                    Some(Msg::ThemeActivity(ThemeActivityMsg::ShowPicker))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(watcher: &mut GlobalKeyWatcher, c: char, modifiers: KeyModifiers) -> Option<Msg> {
        watcher.on(Event::Keyboard(KeyEvent {
            code: Key::Char(c),
            modifiers,
        }))
    }

    #[test]
    fn test_quit_and_theme_keys() {
        let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default(), false);

        assert_eq!(press(&mut watcher, 'q', KeyModifiers::NONE), Some(Msg::AppClose));
        assert_eq!(
            press(&mut watcher, 't', KeyModifiers::NONE),
            Some(Msg::ThemeActivity(ThemeActivityMsg::ShowPicker))
        );
        assert_eq!(press(&mut watcher, 'x', KeyModifiers::NONE), None);
    }

    #[test]
    fn test_suspended_watcher_only_honours_ctrl_c() {
        let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default(), true);

        assert_eq!(press(&mut watcher, 'q', KeyModifiers::NONE), None);
        assert_eq!(press(&mut watcher, 't', KeyModifiers::NONE), None);
        assert_eq!(
            press(&mut watcher, 'c', KeyModifiers::CONTROL),
            Some(Msg::AppClose)
        );
    }
}
