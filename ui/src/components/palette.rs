use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::{ThemeHandle, ThemeRole, types::hex_to_color};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::{Alignment, Style};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

/// Swatches of the current theme with their hex values.
pub struct Palette {
    theme: ThemeHandle,
}

impl Palette {
    pub fn new(theme: ThemeHandle) -> Self {
        Self { theme }
    }

    /// One `(role, hex)` row per role, in display order
    pub fn rows(&self) -> Vec<(ThemeRole, String)> {
        let colors = self.theme.colors();
        colors
            .iter()
            .map(|(role, value)| (role, value.to_string()))
            .collect()
    }
}

impl MockComponent for Palette {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let contrast = self.theme.tui_color(ThemeRole::Contrast);
        let background = self.theme.tui_color(ThemeRole::Background);
        let muted = self.theme.tui_color(ThemeRole::Secondary);

        let lines: Vec<Line> = self
            .rows()
            .into_iter()
            .map(|(role, hex)| {
                Line::from(vec![
                    Span::styled("████ ", Style::default().fg(hex_to_color(&hex))),
                    Span::styled(format!("{:<11}", role.as_str()), Style::default().fg(contrast)),
                    Span::styled(hex, Style::default().fg(muted)),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(muted))
            .title(format!(" {} ", self.theme.preset_name()))
            .title_alignment(Alignment::Center);

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .style(Style::default().bg(background));

        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for Palette {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for Palette {
    fn mount(&mut self) -> AppResult<()> {
        Ok(())
    }
}
