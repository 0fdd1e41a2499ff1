//! Presentation layer with UI screens and widgets.

/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
