//! Podium - a terminal app for authoring and presenting slide decks.
//!
//! This crate provides an in-memory library of presentations made of
//! text slides, sortable views over it, and a TUI for creating,
//! reordering, renaming, deleting, and presenting them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing async services.
pub mod application;
/// Domain layer containing entities, ordering, sorting, and errors.
pub mod domain;
/// Infrastructure layer containing configuration adapters.
pub mod infrastructure;
/// Presentation layer containing UI screens and widgets.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "podium";
