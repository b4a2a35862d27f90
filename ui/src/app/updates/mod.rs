pub mod popup;
pub mod theme;
