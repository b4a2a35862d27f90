use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::config::event::UnitLabels;
use crate::config::limits::DIGIT_HIGHLIGHT_MS;
use crate::error::AppResult;
use crate::theme::{ThemeHandle, ThemeRole};
use engine::RemainingDuration;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

/// 3x5 block glyphs for the digits 0-9
const GLYPHS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

pub const GLYPH_HEIGHT: u16 = 5;

/// Render `value` as rows of block glyphs, zero-padded to two digits.
pub fn render_number(value: u64) -> [String; 5] {
    let digits: Vec<usize> = format!("{value:02}")
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();

    std::array::from_fn(|row| {
        digits
            .iter()
            .map(|d| GLYPHS[*d][row])
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// The four-unit countdown.
///
/// Reads the ticker's latest value on every UI tick and asks for a redraw
/// only when it changed. Units that changed are drawn in the accent color
/// for a short moment.
pub struct CountdownDisplay {
    theme: ThemeHandle,
    labels: [String; 4],
    receiver: watch::Receiver<RemainingDuration>,
    current: RemainingDuration,
    changed_at: [Option<Instant>; 4],
    highlight: Duration,
}

impl CountdownDisplay {
    pub fn new(
        theme: ThemeHandle,
        labels: &UnitLabels,
        mut receiver: watch::Receiver<RemainingDuration>,
    ) -> Self {
        let current = *receiver.borrow_and_update();
        Self {
            theme,
            labels: labels.all().map(str::to_string),
            receiver,
            current,
            changed_at: [None; 4],
            highlight: Duration::from_millis(DIGIT_HIGHLIGHT_MS),
        }
    }

    pub fn current(&self) -> RemainingDuration {
        self.current
    }

    /// Pull a newer value from the ticker. Returns whether anything changed.
    pub fn refresh(&mut self) -> bool {
        match self.receiver.has_changed() {
            Ok(true) => {}
            Ok(false) => return false,
            Err(_) => {
                log::debug!("Countdown ticker closed; keeping last value");
                return false;
            }
        }

        let next = *self.receiver.borrow_and_update();
        if next == self.current {
            return false;
        }

        let now = Instant::now();
        for (i, (old, new)) in self
            .current
            .units()
            .into_iter()
            .zip(next.units())
            .enumerate()
        {
            if old != new {
                self.changed_at[i] = Some(now);
            }
        }
        self.current = next;
        true
    }

    fn is_highlighted(&self, unit: usize) -> bool {
        self.changed_at[unit].is_some_and(|at| at.elapsed() < self.highlight)
    }

    /// Drop highlights that ran out. Returns true if any did.
    fn expire_highlights(&mut self) -> bool {
        let mut expired = false;
        for slot in self.changed_at.iter_mut() {
            if slot.is_some_and(|at| at.elapsed() >= self.highlight) {
                *slot = None;
                expired = true;
            }
        }
        expired
    }

    fn unit_text(&self, unit: usize, value: u64) -> Text<'static> {
        let digit_color = if self.is_highlighted(unit) {
            self.theme.tui_color(ThemeRole::Accent)
        } else {
            self.theme.tui_color(ThemeRole::Primary)
        };
        let label_color = self.theme.tui_color(ThemeRole::Secondary);

        let mut lines: Vec<Line> = render_number(value)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(digit_color))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.labels[unit].clone(),
            Style::default()
                .fg(label_color)
                .add_modifier(TextModifiers::BOLD),
        )));

        Text::from(lines)
    }
}

impl MockComponent for CountdownDisplay {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let background = self.theme.tui_color(ThemeRole::Background);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (unit, value) in self.current.units().into_iter().enumerate() {
            let paragraph = Paragraph::new(self.unit_text(unit, value))
                .alignment(Alignment::Center)
                .style(Style::default().bg(background));
            frame.render_widget(paragraph, columns[unit]);
        }
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::Vec(
            self.current
                .units()
                .into_iter()
                .map(StateValue::U64)
                .collect(),
        )
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for CountdownDisplay {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Tick => {
                let refreshed = self.refresh();
                let expired = self.expire_highlights();
                (refreshed || expired).then_some(Msg::ForceRedraw)
            }
            _ => None,
        }
    }
}

impl ComponentState for CountdownDisplay {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting CountdownDisplay at {}", self.current);
        Ok(())
    }
}
