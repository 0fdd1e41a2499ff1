//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::sort::SortPolicy;

const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "podium";
const APP_NAME: &str = "podium";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Sort order selection for the presentation list.
///
/// Mirrors the domain [`SortPolicy`] so the config file and CLI stay
/// decoupled from the domain layer, the same way the log level mirrors
/// `tracing::Level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Creation order (the "Creation Date" menu entry).
    #[default]
    CreationOrder,
    /// The "Title Ascending" menu entry.
    TitleAscending,
    /// The "Title Descending" menu entry.
    TitleDescending,
}

impl SortMode {
    /// Converts to the domain sort policy.
    #[must_use]
    pub const fn to_policy(self) -> SortPolicy {
        match self {
            Self::CreationOrder => SortPolicy::CreationOrder,
            Self::TitleAscending => SortPolicy::TitleAscending,
            Self::TitleDescending => SortPolicy::TitleDescending,
        }
    }
}

/// Presenting-room configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Delay in milliseconds before a room code is handed out.
    #[serde(default = "default_room_delay_ms")]
    pub request_delay_ms: u64,
}

impl RoomConfig {
    /// Returns the request delay as a duration.
    #[must_use]
    pub const fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_room_delay_ms(),
        }
    }
}

fn default_room_delay_ms() -> u64 {
    1000
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path override.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Initial sort order for the presentation list.
    #[serde(default)]
    pub sort: SortMode,

    /// Presenting-room configuration.
    #[serde(default)]
    pub room: RoomConfig,
}

impl AppConfig {
    /// Returns the default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("podium.log"))
    }

    /// Returns the effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Merges CLI arguments into the configuration. CLI values win.
    pub fn merge_with_args(&mut self, args: super::args::CliArgs) {
        if let Some(config) = args.config {
            self.config = Some(config);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(sort) = args.sort {
            self.sort = sort;
        }
        if let Some(room_delay_ms) = args.room_delay_ms {
            self.room.request_delay_ms = room_delay_ms;
        }
    }
}
