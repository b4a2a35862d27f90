use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::{ThemeHandle, ThemeRole};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::{
    AttrValue, Attribute, Component, Event, MockComponent, NoUserEvent, State,
    event::{Key, KeyEvent},
    props::{Alignment, Color, TextModifiers},
    ratatui::{
        Frame,
        layout::Rect,
        style::Style,
        text::{Line, Text},
        widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum PopupKind {
    Error,
    Warning,
}

/// Popup showing an error or a warning until dismissed with Enter or Esc.
pub struct ErrorPopup {
    theme: ThemeHandle,
    kind: PopupKind,
    message: String,
}

impl ErrorPopup {
    pub fn new(theme: ThemeHandle, error: &AppError) -> Self {
        // ErrorReporter already formats the message
        Self {
            theme,
            kind: PopupKind::Error,
            message: error.to_string(),
        }
    }

    pub fn warning(theme: ThemeHandle, message: &str) -> Self {
        Self {
            theme,
            kind: PopupKind::Warning,
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn title(&self) -> &'static str {
        match self.kind {
            PopupKind::Error => " Error ",
            PopupKind::Warning => " Warning ",
        }
    }

    fn border_color(&self) -> Color {
        match self.kind {
            PopupKind::Error => self.theme.tui_color(ThemeRole::Accent),
            PopupKind::Warning => self.theme.tui_color(ThemeRole::Primary),
        }
    }
}

impl MockComponent for ErrorPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = self.border_color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(self.title())
            .title_alignment(Alignment::Center);

        let mut lines = vec![Line::from("")];
        lines.extend(self.message.lines().map(|line| Line::from(line.to_string())));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(self.theme.tui_color(ThemeRole::Contrast))
                    .bg(self.theme.tui_color(ThemeRole::Background))
                    .add_modifier(TextModifiers::BOLD),
            );

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

impl Component<Msg, NoUserEvent> for ErrorPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for ErrorPopup {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting ErrorPopup ({:?})", self.kind);
        Ok(())
    }
}
