//! Service implementations.

pub mod room_service;

pub use room_service::{RoomCode, RoomService};
