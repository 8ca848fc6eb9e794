//! CLI command definitions and handlers.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lumiq_core::applicator::Applicator;
use lumiq_core::config::{Config, PickerConfig};
use lumiq_core::picker::PickerController;
use lumiq_core::storage::FileStore;

pub mod completions;
pub mod config;
pub mod dark;
pub mod list;
pub mod pick;
pub mod set;
pub mod show;

/// Load configuration with graceful fallback to defaults.
///
/// This function should be used by all commands to load the user's configuration.
/// If the config file doesn't exist or can't be parsed, it falls back to defaults.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        Config::default()
    })
}

/// Resolve the preference file: `--store`, then the config file, then the
/// platform data directory.
pub fn store_path(config: &Config, store_override: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = store_override.or(config.storage.path.as_ref()) {
        return Ok(path.clone());
    }

    FileStore::default_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory; pass --store <path>"))
}

/// Build and mount a picker over the resolved preference file.
pub fn mounted_picker(
    config: &Config,
    options: PickerConfig,
    store_override: Option<&PathBuf>,
) -> anyhow::Result<PickerController<FileStore>> {
    let store = FileStore::new(store_path(config, store_override)?);
    let live_region = lumiq_core::announce::LiveRegion::new(config.ui.announcement_ttl);

    let mut picker =
        PickerController::new(options, store, Applicator::global()).with_live_region(live_region);
    picker.subscribe(|change| {
        tracing::debug!(theme = %change.theme, dark_mode = change.dark_mode, "Theme changed");
    });
    picker.mount();

    Ok(picker)
}

/// Lumiq - choose a theme and dark mode
#[derive(Parser)]
#[command(name = "lumiq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Preference file to use instead of the configured one
    #[arg(long, global = true, env = "LUMIQ_STORE")]
    pub store: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// List the available themes
    List(ListArgs),

    /// Show the current theme preference
    Show(ShowArgs),

    /// Select a theme
    Set(SetArgs),

    /// Turn dark mode on or off
    Dark(DarkArgs),

    /// Open the interactive theme picker
    Pick(pick::PickArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Parser)]
pub struct ListArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Parser)]
pub struct ShowArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the set command
#[derive(Parser)]
pub struct SetArgs {
    /// Theme id (see `lumiq list`)
    pub theme: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the dark command
#[derive(Parser)]
pub struct DarkArgs {
    /// What to do with dark mode
    #[arg(value_enum, default_value = "toggle")]
    pub mode: DarkMode,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Dark mode actions
#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum DarkMode {
    /// Enable dark mode
    On,
    /// Disable dark mode
    Off,
    /// Flip the current value
    Toggle,
}

/// Arguments for the config command
#[derive(Parser)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Value to set
        value: String,
    },

    /// Show all configuration
    Show,

    /// Reset to defaults
    Reset,

    /// Print the configuration and preference file locations
    Path,
}

/// Arguments for the completions command
#[derive(Parser)]
pub struct CompletionsArgs {
    /// Completions subcommand
    #[command(subcommand)]
    pub action: CompletionsAction,
}

/// Completions subcommands
#[derive(Subcommand, Clone, Copy)]
pub enum CompletionsAction {
    /// Install shell completions (auto-detects shell)
    Install {
        /// Override shell detection
        #[arg(long, value_enum)]
        shell: Option<ShellType>,
    },

    /// Uninstall shell completions
    Uninstall {
        /// Override shell detection
        #[arg(long, value_enum)]
        shell: Option<ShellType>,
    },

    /// Generate completions and print to stdout (for manual installation)
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: ShellType,
    },
}

/// Supported shell types for completions
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum ShellType {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_with_store() {
        let cli = Cli::parse_from(["lumiq", "set", "ocean", "--store", "/tmp/p.json"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));
        match cli.command {
            Command::Set(args) => assert_eq!(args.theme, "ocean"),
            _ => panic!("expected set command"),
        }
    }

    #[test]
    fn test_dark_defaults_to_toggle() {
        let cli = Cli::parse_from(["lumiq", "dark"]);
        match cli.command {
            Command::Dark(args) => assert_eq!(args.mode, DarkMode::Toggle),
            _ => panic!("expected dark command"),
        }
    }

    #[test]
    fn test_store_override_wins() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/from/config.json"));

        let cli_path = PathBuf::from("/from/cli.json");
        assert_eq!(store_path(&config, Some(&cli_path)).unwrap(), cli_path);
        assert_eq!(
            store_path(&config, None).unwrap(),
            PathBuf::from("/from/config.json")
        );
    }
}
