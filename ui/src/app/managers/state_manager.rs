use crate::components::common::ComponentId;

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Countdown,
    ThemePicker,
}

/// Manages application state transitions and UI state
pub struct StateManager {
    pub app_state: AppState,
    pub active_component: ComponentId,
    pub quit: bool,
    pub redraw: bool,
    pub previous_state: Option<AppState>,
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            app_state: AppState::Countdown,
            active_component: ComponentId::Countdown,
            quit: false,
            redraw: true,
            previous_state: None,
        }
    }

    /// Change application state, remembering the one we left
    pub fn set_app_state(&mut self, new_state: AppState) {
        log::debug!("State transition: {:?} -> {:?}", self.app_state, new_state);
        if self.app_state != new_state {
            self.previous_state = Some(self.app_state.clone());
        }
        self.app_state = new_state;
        self.redraw = true;
    }

    /// Go back to the state active before the last transition
    pub fn restore_previous_state(&mut self) {
        let previous = self.previous_state.take().unwrap_or(AppState::Countdown);
        log::debug!("Restoring state: {:?} -> {:?}", self.app_state, previous);
        self.app_state = previous;
        self.redraw = true;
    }

    pub fn set_active_component(&mut self, component: ComponentId) {
        self.active_component = component;
        self.redraw = true;
    }

    /// Signal application shutdown
    pub fn shutdown(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    pub fn redraw_complete(&mut self) {
        self.redraw = false;
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_countdown_with_pending_redraw() {
        let state = StateManager::new();
        assert_eq!(state.app_state, AppState::Countdown);
        assert_eq!(state.active_component, ComponentId::Countdown);
        assert!(state.needs_redraw());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_picker_round_trip_restores_countdown() {
        let mut state = StateManager::new();
        state.redraw_complete();

        state.set_app_state(AppState::ThemePicker);
        assert!(state.needs_redraw());
        assert_eq!(state.previous_state, Some(AppState::Countdown));

        state.restore_previous_state();
        assert_eq!(state.app_state, AppState::Countdown);
        assert_eq!(state.previous_state, None);
    }

    #[test]
    fn test_shutdown_sets_quit() {
        let mut state = StateManager::new();
        state.shutdown();
        assert!(state.should_quit());
    }
}
