use tuirealm::props::{Alignment, Color};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::Frame;

use crate::components::common::ComponentId;
use crate::config::keys::KeyBindingsConfig;
use crate::theme::{ThemeHandle, types::hex_to_color};

/// Help bar that shows keyboard shortcuts for the focused component.
///
/// Styled from the global `--color-*` variables rather than the structured
/// theme, like any consumer that only knows variable names.
pub struct HelpBar {
    theme: ThemeHandle,
    keys: KeyBindingsConfig,
}

impl HelpBar {
    pub fn new(theme: ThemeHandle, keys: KeyBindingsConfig) -> Self {
        Self { theme, keys }
    }

    fn var_color(&self, name: &str) -> Color {
        self.theme
            .css_var(name)
            .map(|value| hex_to_color(&value))
            .unwrap_or(Color::Reset)
    }

    fn get_global_shortcuts(&self) -> Vec<(String, bool)> {
        vec![
            (format!("[{}]", self.keys.theme()), true),
            (" Theme ".to_string(), false),
            (format!("[{}]", self.keys.quit()), true),
            (" Quit".to_string(), false),
        ]
    }

    fn get_context_shortcuts(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        match active_component {
            ComponentId::ThemePicker => vec![
                (format!("[↑/{}]", self.keys.up()), true),
                (" Up ".to_string(), false),
                (format!("[↓/{}]", self.keys.down()), true),
                (" Down ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Apply ".to_string(), false),
                ("[Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            ComponentId::ErrorPopup => vec![
                ("[Enter/Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            _ => vec![],
        }
    }

    /// Context shortcuts followed by the global ones
    pub fn get_help_text(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        let mut shortcuts = self.get_context_shortcuts(active_component);
        if !matches!(active_component, ComponentId::ErrorPopup) {
            shortcuts.extend(self.get_global_shortcuts());
        }
        shortcuts
    }

    pub fn view_with_active(&mut self, frame: &mut Frame, area: Rect, active_component: &ComponentId) {
        let key_color = self.var_color("--color-accent");
        let text_color = self.var_color("--color-contrast");
        let separator_color = self.var_color("--color-secondary");
        let background = self.var_color("--color-background");

        let help_text = self.get_help_text(active_component);
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in help_text.iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(" | ", Style::default().fg(separator_color)));
            }

            if *highlight {
                spans.push(Span::styled(text.clone(), Style::default().fg(key_color)));
            } else {
                spans.push(Span::styled(text.clone(), Style::default().fg(text_color)));
            }
        }

        let paragraph = tuirealm::ratatui::widgets::Paragraph::new(Text::from(Line::from(spans)))
            .style(Style::default().bg(background))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeProvider, ThemeRole};

    fn help_bar() -> (HelpBar, ThemeHandle) {
        let theme = ThemeProvider::default().use_theme().expect("theme");
        (HelpBar::new(theme.clone(), KeyBindingsConfig::default()), theme)
    }

    #[test]
    fn test_countdown_shows_global_shortcuts() {
        let (bar, _) = help_bar();
        let text: Vec<String> = bar
            .get_help_text(&ComponentId::Countdown)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(text, vec!["[t]", " Theme ", "[q]", " Quit"]);
    }

    #[test]
    fn test_error_popup_hides_global_shortcuts() {
        let (bar, _) = help_bar();
        assert_eq!(bar.get_help_text(&ComponentId::ErrorPopup).len(), 2);
    }

    #[test]
    fn test_colors_follow_style_variables() {
        let (bar, theme) = help_bar();
        theme
            .update_color(ThemeRole::Accent, "#010203")
            .expect("valid color");
        assert_eq!(bar.var_color("--color-accent"), Color::Rgb(1, 2, 3));
        assert_eq!(bar.var_color("--color-missing"), Color::Reset);
    }
}
