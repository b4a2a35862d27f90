use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Hero,
    Countdown,
    Palette,
    ThemePicker,
    ErrorPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    ThemeActivity(ThemeActivityMsg),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    ShowPicker,
    PresetSelected(String),
    PickerClosed,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    CloseError,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
