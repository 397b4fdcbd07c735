//! TUI widgets

mod status_bar;

pub use status_bar::StatusBar;
