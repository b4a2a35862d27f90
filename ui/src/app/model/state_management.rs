use super::Model;
use crate::app::managers::AppState;
use crate::app::view::*;
use crate::components::countdown_display::GLYPH_HEIGHT;
use crate::components::help_bar::HelpBar;
use crate::error::AppResult;
use crate::theme::ThemeRole;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout};
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::widgets::Block;
use tuirealm::terminal::TerminalAdapter;

/// Palette rows plus its border
const PALETTE_HEIGHT: u16 = 7;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let mut view_result: AppResult<()> = Ok(());

        let theme = self.theme_provider.use_theme()?;
        let background = theme.tui_color(ThemeRole::Background);
        let mut help_bar = HelpBar::new(theme, self.keys.clone());

        let current_app_state = self.state_manager.app_state.clone();
        let active_component = self.state_manager.active_component.clone();

        let _ = self.terminal.draw(|f| {
            f.render_widget(Block::default().style(Style::default().bg(background)), f.area());

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Min(7),                    // Hero
                        Constraint::Length(GLYPH_HEIGHT + 3), // Countdown and labels
                        Constraint::Length(PALETTE_HEIGHT),
                        Constraint::Length(1), // Help bar
                    ]
                    .as_ref(),
                )
                .split(f.area());

            view_result = match current_app_state {
                AppState::Countdown => with_error_popup(&mut self.app, f, &chunks, view_countdown),
                AppState::ThemePicker => {
                    with_error_popup(&mut self.app, f, &chunks, view_theme_picker)
                }
            };

            help_bar.view_with_active(f, chunks[3], &active_component);
        });

        view_result
    }
}
