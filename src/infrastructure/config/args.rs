use std::path::PathBuf;

use clap::Parser;

use super::app_config::{LogLevel, SortMode};

/// Command-line arguments. Values given here override the config file.
#[derive(Debug, Parser)]
#[command(
    name = "podium",
    version,
    about = "A terminal app for authoring and presenting slide decks",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Initial sort order for the presentation list.
    #[arg(long, value_enum)]
    pub sort: Option<SortMode>,

    /// Delay in milliseconds before a room code is handed out.
    #[arg(long, value_name = "MS")]
    pub room_delay_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_parses_to_all_none() {
        let args = CliArgs::parse_from(["podium"]);
        assert!(args.config.is_none());
        assert!(args.log_path.is_none());
        assert!(args.log_level.is_none());
        assert!(args.sort.is_none());
        assert!(args.room_delay_ms.is_none());
    }

    #[test]
    fn test_sort_value_enum() {
        let args = CliArgs::parse_from(["podium", "--sort", "title-ascending"]);
        assert_eq!(args.sort, Some(SortMode::TitleAscending));
    }

    #[test]
    fn test_room_delay_override() {
        let args = CliArgs::parse_from(["podium", "--room-delay-ms", "0"]);
        assert_eq!(args.room_delay_ms, Some(0));
    }
}
