use crate::app::model::Model;
use crate::components::common::{Msg, ThemeActivityMsg};
use crate::error::AppResult;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::ShowPicker => self.handle_show_picker(),
            ThemeActivityMsg::PresetSelected(name) => self.handle_preset_selected(&name),
            ThemeActivityMsg::PickerClosed => self.handle_picker_closed(),
        }
    }

    fn handle_show_picker(&mut self) -> Option<Msg> {
        if let Err(e) = self.mount_theme_picker() {
            self.error_reporter
                .report_mount_error("ThemePicker", "mount", e);
        }
        None
    }

    fn handle_preset_selected(&mut self, name: &str) -> Option<Msg> {
        log::info!("Switching to theme preset: {name}");

        let result = self.apply_preset(name);

        // Close the picker first so a warning popup can be seen
        if let Err(e) = self.unmount_theme_picker() {
            self.error_reporter
                .report_mount_error("ThemePicker", "unmount", e);
        }

        if let Err(e) = result {
            self.error_reporter.report_theme_error("switch", e);
        }

        None
    }

    fn apply_preset(&mut self, name: &str) -> AppResult<()> {
        let theme = self.theme_loader.load_preset(name)?;
        self.theme_provider.use_theme()?.apply_theme(&theme)?;
        self.state_manager.set_redraw(true);
        Ok(())
    }

    fn handle_picker_closed(&mut self) -> Option<Msg> {
        log::debug!("Theme picker closed");

        if let Err(e) = self.unmount_theme_picker() {
            self.error_reporter
                .report_mount_error("ThemePicker", "unmount", e);
        }
        None
    }
}
