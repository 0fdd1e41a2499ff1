//! Application layer with services the UI orchestrates.

/// Service implementations.
pub mod services;

pub use services::{RoomCode, RoomService};
