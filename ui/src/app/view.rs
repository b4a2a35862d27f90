use crate::components::common::{ComponentId, Msg};
use crate::error::AppError;
use tuirealm::ratatui::layout::Rect;
use tuirealm::{Application, Frame, NoUserEvent};

const ERROR_POPUP_WIDTH: u16 = 60;
const ERROR_POPUP_HEIGHT: u16 = 10;
const THEME_PICKER_WIDTH: u16 = 52;
const THEME_PICKER_HEIGHT: u16 = 9;
pub const PALETTE_WIDTH: u16 = 32;

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// Render the error popup centered on the screen
pub fn view_error_popup(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
) -> Result<(), AppError> {
    let popup_area = centered_rect(ERROR_POPUP_WIDTH, ERROR_POPUP_HEIGHT, f.area());
    app.view(&ComponentId::ErrorPopup, f, popup_area);

    // Make sure the popup has focus
    app.active(&ComponentId::ErrorPopup)
        .map_err(|e| AppError::Component(e.to_string()))?;

    Ok(())
}

// Draw the main view, then the error popup over it if one is mounted
pub fn with_error_popup<F>(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
    view_fn: F,
) -> Result<(), AppError>
where
    F: FnOnce(
        &mut Application<ComponentId, Msg, NoUserEvent>,
        &mut Frame,
        &[Rect],
    ) -> Result<(), AppError>,
{
    view_fn(app, f, chunks)?;

    if app.mounted(&ComponentId::ErrorPopup) {
        return view_error_popup(app, f);
    }

    Ok(())
}

pub fn view_countdown(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
) -> Result<(), AppError> {
    app.view(&ComponentId::Hero, f, chunks[0]);
    app.view(&ComponentId::Countdown, f, chunks[1]);
    app.view(
        &ComponentId::Palette,
        f,
        centered_rect(PALETTE_WIDTH, chunks[2].height, chunks[2]),
    );
    Ok(())
}

pub fn view_theme_picker(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
) -> Result<(), AppError> {
    view_countdown(app, f, chunks)?;

    let picker_area = centered_rect(THEME_PICKER_WIDTH, THEME_PICKER_HEIGHT, f.area());
    app.view(&ComponentId::ThemePicker, f, picker_area);
    Ok(())
}
