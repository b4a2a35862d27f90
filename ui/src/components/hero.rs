use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::config::event::EventConfig;
use crate::error::AppResult;
use crate::theme::{ThemeHandle, ThemeRole};
use engine::TargetInstant;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

/// Headline, couple names and the event date.
pub struct Hero {
    theme: ThemeHandle,
    headline: String,
    couple: String,
    date_line: String,
}

impl Hero {
    pub fn new(theme: ThemeHandle, event: &EventConfig, target: &TargetInstant) -> Self {
        Self {
            theme,
            headline: letter_spaced(event.headline()),
            couple: event.couple().to_string(),
            date_line: target.at().format("%d · %m · %Y  |  %H:%M").to_string(),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let primary = self.theme.tui_color(ThemeRole::Primary);
        let contrast = self.theme.tui_color(ThemeRole::Contrast);
        let secondary = self.theme.tui_color(ThemeRole::Secondary);

        vec![
            Line::from(""),
            Line::from(Span::styled(
                self.headline.clone(),
                Style::default().fg(primary),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.couple.clone(),
                Style::default()
                    .fg(contrast)
                    .add_modifier(TextModifiers::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.date_line.clone(),
                Style::default().fg(secondary),
            )),
        ]
    }
}

/// "SAVE THE DATE" -> "S A V E   T H E   D A T E"
fn letter_spaced(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

impl MockComponent for Hero {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let background = self.theme.tui_color(ThemeRole::Background);
        let paragraph = Paragraph::new(Text::from(self.lines()))
            .alignment(Alignment::Center)
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

impl Component<Msg, NoUserEvent> for Hero {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for Hero {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting Hero for {}", self.couple);
        Ok(())
    }
}
