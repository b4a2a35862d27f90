use crate::config::event::{EventConfig, UnitLabels};
use crate::error::{AppError, AppResult};
use engine::target::TARGET_FORMAT;
use engine::{Clock, CountdownEngine, ElapsedPolicy, RemainingDuration};
use serde::Serialize;

/// Snapshot of the countdown printed by `savedate --once`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownReport {
    pub couple: String,
    pub target: String,
    pub remaining: RemainingDuration,
    pub elapsed: bool,
    pub policy: ElapsedPolicy,
}

impl CountdownReport {
    pub fn from_engine<C: Clock>(engine: &CountdownEngine<C>, event: &EventConfig) -> Self {
        Self {
            couple: event.couple().to_string(),
            target: engine.target().at().format(TARGET_FORMAT).to_string(),
            remaining: engine.current(),
            elapsed: engine.is_elapsed(),
            policy: engine.policy(),
        }
    }

    /// Human readable form using the configured unit labels
    pub fn to_text(&self, labels: &UnitLabels) -> String {
        let units = self
            .remaining
            .units()
            .iter()
            .zip(labels.all())
            .map(|(value, label)| format!("{value:02} {label}"))
            .collect::<Vec<_>>()
            .join("  ");

        let mut text = format!("{}\n{}\n{}", self.couple, self.target, units);
        if self.elapsed {
            text.push_str("\n(target reached)");
        }
        text
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::State(format!("Failed to serialize countdown: {e}")))
    }
}
