use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::config::keys::KeyBindingsConfig;
use crate::error::AppResult;
use crate::theme::{PresetEntry, ThemeHandle, ThemeLoader, ThemeRole};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_PRESET_SELECTED: &str = "PresetSelected";
const CMD_RESULT_CLOSE_PICKER: &str = "ClosePicker";

/// Popup listing the available color presets.
///
/// # Navigation
///
/// - **Up/Down** (or the configured up/down keys) - Move the selection
/// - **Enter** - Apply the selected preset
/// - **Escape** - Close without changes
pub struct ThemePicker {
    theme: ThemeHandle,
    keys: KeyBindingsConfig,
    loader: ThemeLoader,
    presets: Vec<PresetEntry>,
    selected: usize,
}

impl ThemePicker {
    pub fn new(theme: ThemeHandle, keys: KeyBindingsConfig, loader: ThemeLoader) -> Self {
        Self {
            theme,
            keys,
            loader,
            presets: Vec::new(),
            selected: 0,
        }
    }

    pub fn load_presets(&mut self) {
        match self.loader.discover_presets() {
            Ok(presets) => self.presets = presets,
            Err(e) => {
                log::error!("Failed to discover theme presets: {e}");
                self.presets = Vec::new();
            }
        }

        let current = self.theme.preset_name();
        self.selected = self
            .presets
            .iter()
            .position(|p| p.name == current)
            .unwrap_or(0);
    }

    pub fn selected_preset(&self) -> Option<&PresetEntry> {
        self.presets.get(self.selected)
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.presets.len() {
            self.selected += 1;
        }
    }
}

impl MockComponent for ThemePicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let contrast = self.theme.tui_color(ThemeRole::Contrast);
        let background = self.theme.tui_color(ThemeRole::Background);
        let accent = self.theme.tui_color(ThemeRole::Accent);
        let primary = self.theme.tui_color(ThemeRole::Primary);
        let current = self.theme.preset_name();

        let items: Vec<ListItem> = self
            .presets
            .iter()
            .map(|preset| {
                let marker = if preset.name == current { "●" } else { " " };
                ListItem::new(format!(
                    "{marker} {:<10} {}",
                    preset.name, preset.metadata.description
                ))
                .style(Style::default().fg(contrast))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(primary))
            .title("  Select Theme  ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(background));

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(background)
                    .bg(accent)
                    .add_modifier(TextModifiers::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        match self.selected_preset() {
            Some(preset) => State::One(StateValue::String(preset.name.clone())),
            None => State::None,
        }
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ThemePicker {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.move_up();
                CmdResult::Changed(self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => {
                self.move_down();
                CmdResult::Changed(self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) if c == self.keys.up() => {
                self.move_up();
                CmdResult::Changed(self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) if c == self.keys.down() => {
                self.move_down();
                CmdResult::Changed(self.state())
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => match self.state() {
                State::None => CmdResult::None,
                state => CmdResult::Custom(CMD_RESULT_PRESET_SELECTED, state),
            },
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, State::None)
            }
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_PRESET_SELECTED, State::One(StateValue::String(name))) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::PresetSelected(name)))
            }
            CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, _) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::PickerClosed))
            }
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for ThemePicker {
    fn mount(&mut self) -> AppResult<()> {
        self.load_presets();
        log::debug!("ThemePicker mounted with {} presets", self.presets.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeProvider;
    use tuirealm::event::KeyModifiers;

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn picker() -> ThemePicker {
        let theme = ThemeProvider::default().use_theme().expect("theme");
        let mut picker =
            ThemePicker::new(theme, KeyBindingsConfig::default(), ThemeLoader::embedded_only());
        picker.mount().expect("mount");
        picker
    }

    #[test]
    fn test_starts_on_current_preset() {
        let picker = picker();
        assert_eq!(
            picker.state(),
            State::One(StateValue::String("classic".to_string()))
        );
    }

    #[test]
    fn test_navigation_and_selection() {
        let mut picker = picker();

        assert_eq!(picker.on(key(Key::Char('j'))), Some(Msg::ForceRedraw));
        assert_eq!(
            picker.on(key(Key::Enter)),
            Some(Msg::ThemeActivity(ThemeActivityMsg::PresetSelected(
                "midnight".to_string()
            )))
        );
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut picker = picker();
        for _ in 0..10 {
            picker.on(key(Key::Up));
        }
        assert_eq!(picker.selected_preset().map(|p| p.name.as_str()), Some("blush"));

        for _ in 0..10 {
            picker.on(key(Key::Down));
        }
        assert_eq!(picker.selected_preset().map(|p| p.name.as_str()), Some("sand"));
    }

    #[test]
    fn test_escape_closes() {
        let mut picker = picker();
        assert_eq!(
            picker.on(key(Key::Esc)),
            Some(Msg::ThemeActivity(ThemeActivityMsg::PickerClosed))
        );
    }
}
