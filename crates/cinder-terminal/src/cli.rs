//! Command-line interface for the `cinder` binary

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use cinder_app::{
    delete_folder_waiting_key, AppConfig, AppError, AppState, FsPath, Platform, RouteEntry,
};

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".cinder/config.toml";

#[derive(Parser, Debug)]
#[command(name = "cinder")]
#[command(about = "Cinder - confirmation and error screens in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Use mobile presentation regardless of config
    #[arg(long, global = true)]
    pub mobile: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Ask for confirmation before deleting a path
    Delete {
        /// Path to delete, e.g. /keybase/private/alice/doc.txt
        path: String,

        /// Start with a delete of the path already in flight
        #[arg(long)]
        waiting: bool,
    },

    /// Show the conversation error panel
    ConversationError {
        /// Error text to display
        text: String,
    },

    /// Render one frame without a terminal and print it
    Snapshot {
        /// Screen to render
        #[arg(value_enum)]
        screen: SnapshotScreen,

        /// Path for `delete`, error text for `conversation-error`
        arg: String,

        /// Frame width in cells
        #[arg(long, default_value_t = 60)]
        width: u16,

        /// Frame height in cells
        #[arg(long, default_value_t = 14)]
        height: u16,

        /// Render the delete screen with the delete in flight
        #[arg(long)]
        waiting: bool,
    },
}

/// Screens `cinder snapshot` can render
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotScreen {
    /// Delete confirmation
    Delete,
    /// Conversation error panel
    ConversationError,
}

impl Cli {
    /// Load the config file named by `--config`
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(&self.config)
    }

    /// Platform after applying `--mobile` over the config file
    pub fn platform(&self, config: &AppConfig) -> Platform {
        if self.mobile {
            Platform::Mobile
        } else {
            config.platform
        }
    }
}

impl Commands {
    /// Store contents the command's screen opens on
    pub fn initial_state(&self) -> Result<AppState, AppError> {
        match self {
            Self::Delete { path, waiting } => delete_state(path, *waiting),
            Self::ConversationError { text } => Ok(error_state(text)),
            Self::Snapshot {
                screen: SnapshotScreen::Delete,
                arg,
                waiting,
                ..
            } => delete_state(arg, *waiting),
            Self::Snapshot {
                screen: SnapshotScreen::ConversationError,
                arg,
                ..
            } => Ok(error_state(arg)),
        }
    }

    /// Check if the command renders headlessly
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot { .. })
    }
}

fn delete_state(raw: &str, waiting: bool) -> Result<AppState, AppError> {
    let path = FsPath::parse(raw)?;
    let mut state = AppState::with_route(RouteEntry::really_delete(&path));
    if waiting {
        state.waiting.increment(&delete_folder_waiting_key(&path));
    }
    Ok(state)
}

fn error_state(text: &str) -> AppState {
    AppState::with_route(RouteEntry::conversation_error(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cinder_app::RouteName;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete_with_globals() {
        let cli = Cli::try_parse_from([
            "cinder",
            "delete",
            "/keybase/private/alice/doc.txt",
            "--waiting",
            "--mobile",
        ])
        .unwrap();

        assert!(cli.mobile);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(cli.platform(&AppConfig::default()), Platform::Mobile);

        let state = cli.command.initial_state().unwrap();
        assert_eq!(state.routes.current().name, RouteName::ReallyDelete);
        let path = FsPath::parse("/keybase/private/alice/doc.txt").unwrap();
        assert!(state.waiting.is_waiting(&delete_folder_waiting_key(&path)));
    }

    #[test]
    fn test_parse_snapshot() {
        let cli = Cli::try_parse_from([
            "cinder",
            "snapshot",
            "conversation-error",
            "boom",
            "--width",
            "80",
        ])
        .unwrap();

        assert!(cli.command.is_snapshot());
        assert_eq!(
            cli.command,
            Commands::Snapshot {
                screen: SnapshotScreen::ConversationError,
                arg: "boom".to_string(),
                width: 80,
                height: 14,
                waiting: false,
            }
        );
        let state = cli.command.initial_state().unwrap();
        assert_eq!(state.routes.current().name, RouteName::ConversationError);
    }

    #[test]
    fn test_config_file_sets_platform_unless_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "platform = \"mobile\"\nlog_level = \"warn\"\n").unwrap();
        let config_arg = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["cinder", "--config", &config_arg, "conversation-error", "x"])
            .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(cli.platform(&config), Platform::Mobile);

        std::fs::write(&path, "platform = \"desktop\"\n").unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(cli.platform(&config), Platform::Desktop);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let missing = missing.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["cinder", "-c", &missing, "delete", "/keybase/public/bob"])
            .unwrap();
        assert_eq!(cli.load_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_broken_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "platform = [").unwrap();
        let config_arg = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["cinder", "--config", &config_arg, "delete", "/keybase/public/bob"])
            .unwrap();
        assert!(cli.load_config().unwrap_err().is_config());
    }

    #[test]
    fn test_relative_delete_path_is_rejected() {
        let command = Commands::Delete {
            path: "doc.txt".to_string(),
            waiting: false,
        };
        assert!(command.initial_state().is_err());
    }
}
