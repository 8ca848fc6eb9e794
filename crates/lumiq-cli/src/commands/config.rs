//! Config command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use lumiq_core::config::Config;

use super::{ConfigAction, ConfigArgs};

/// Run the config command.
pub fn run(args: ConfigArgs, store_override: Option<&PathBuf>) -> Result<()> {
    match args.action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(v) => println!("{key}: {v}"),
                None => println!("Unknown configuration key: {key}"),
            }
        }

        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config
                .set(&key, &value)
                .with_context(|| format!("Valid keys: {}", Config::KEYS.join(", ")))?;
            config.save()?;
            println!("Set {key} = {value}");
        }

        ConfigAction::Show => {
            let config = Config::load()?;
            println!();
            println!("Lumiq Configuration");
            println!("{}", "─".repeat(50));
            println!();
            println!("[picker]");
            println!("  current_theme = \"{}\"", config.picker.current_theme);
            println!("  show_dark_mode = {}", config.picker.show_dark_mode);
            println!();
            println!("[storage]");
            println!(
                "  path = \"{}\"",
                config.get("storage_path").unwrap_or_default()
            );
            println!();
            println!("[ui]");
            println!(
                "  announcement_ttl = \"{}\"",
                config.get("announcement_ttl").unwrap_or_default()
            );
            println!();
        }

        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Configuration reset to defaults.");
        }

        ConfigAction::Path => {
            let config = super::load_config();
            println!("config:      {}", Config::config_path().display());
            match super::store_path(&config, store_override) {
                Ok(path) => println!("preferences: {}", path.display()),
                Err(e) => println!("preferences: unavailable ({e})"),
            }
        }
    }

    Ok(())
}
