use super::Model;
use crate::app::managers::AppState;
use crate::components::common::ComponentId;
use crate::components::error_popup::ErrorPopup;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::state::ComponentStateMount;
use crate::components::theme_picker::ThemePicker;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(self.theme_provider.use_theme()?, error),
            Vec::default(),
        )?;

        self.focus_error_popup()
    }

    /// Mount the popup in its warning form
    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::warning(self.theme_provider.use_theme()?, message),
            Vec::default(),
        )?;

        self.focus_error_popup()
    }

    fn focus_error_popup(&mut self) -> AppResult<()> {
        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;
        self.state_manager
            .set_active_component(ComponentId::ErrorPopup);

        if let Err(e) = self.update_global_key_watcher_state() {
            self.error_reporter.report_key_watcher_error(e);
        }

        self.state_manager.set_redraw(true);
        Ok(())
    }

    /// Unmount error popup and return focus to previous component
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        self.app
            .umount(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.activate_component_for_current_state()?;
        self.state_manager.set_redraw(true);
        Ok(())
    }

    pub fn mount_theme_picker(&mut self) -> AppResult<()> {
        log::debug!("Mounting theme picker");

        self.app.remount_with_state(
            ComponentId::ThemePicker,
            ThemePicker::new(
                self.theme_provider.use_theme()?,
                self.keys.clone(),
                self.theme_loader.clone(),
            ),
            Vec::default(),
        )?;

        self.state_manager.set_app_state(AppState::ThemePicker);
        self.activate_component_for_current_state()?;
        Ok(())
    }

    pub fn unmount_theme_picker(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::ThemePicker) {
            self.app
                .umount(&ComponentId::ThemePicker)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        self.state_manager.restore_previous_state();
        self.activate_component_for_current_state()?;
        Ok(())
    }

    /// Give focus to whatever the current state shows, popups first
    pub fn activate_component_for_current_state(&mut self) -> AppResult<()> {
        let target = if self.app.mounted(&ComponentId::ErrorPopup) {
            ComponentId::ErrorPopup
        } else {
            match self.state_manager.app_state {
                AppState::ThemePicker if self.app.mounted(&ComponentId::ThemePicker) => {
                    ComponentId::ThemePicker
                }
                _ => ComponentId::Countdown,
            }
        };

        if self.app.mounted(&target) {
            self.app
                .active(&target)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        self.state_manager.set_active_component(target);

        if let Err(e) = self.update_global_key_watcher_state() {
            self.error_reporter.report_key_watcher_error(e);
        }
        Ok(())
    }

    /// Suspend the global shortcuts while a popup or the picker owns the keyboard
    pub fn update_global_key_watcher_state(&mut self) -> AppResult<()> {
        let suspended = self.app.mounted(&ComponentId::ErrorPopup)
            || self.app.mounted(&ComponentId::ThemePicker);

        self.app
            .remount(
                ComponentId::GlobalKeyWatcher,
                Box::new(GlobalKeyWatcher::new(self.keys.clone(), suspended)),
                vec![Sub::new(SubEventClause::Any, SubClause::Always)],
            )
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
