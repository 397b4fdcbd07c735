//! TUI views

mod filters_view;
mod results_view;

pub use filters_view::{FilterField, FiltersView};
pub use results_view::ResultsView;
