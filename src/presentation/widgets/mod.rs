mod input;
mod status_bar;

pub use input::TextInput;
pub use status_bar::{StatusBar, StatusLevel};
