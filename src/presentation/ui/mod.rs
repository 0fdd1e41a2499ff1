//! UI screens.

mod app;
mod deck_screen;
mod editor_screen;
mod library_screen;
mod present_screen;

pub use app::App;
pub use deck_screen::{DeckAction, DeckScreen};
pub use editor_screen::{EditorAction, EditorScreen};
pub use library_screen::{LibraryAction, LibraryScreen};
pub use present_screen::{PresentAction, PresentScreen};
