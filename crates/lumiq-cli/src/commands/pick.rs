//! Pick command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lumiq_core::ThemeId;

use crate::tui;
use crate::ui::{self, PreferenceBox};

/// Arguments for the pick command
#[derive(Parser, Debug, Clone, Default)]
pub struct PickArgs {
    /// Theme to use when nothing valid is stored (defaults to the configured one)
    #[arg(long)]
    pub theme: Option<String>,

    /// Hide the dark mode switch
    #[arg(long)]
    pub no_dark_mode: bool,
}

/// Run the pick command.
pub fn run(args: &PickArgs, store_override: Option<&PathBuf>) -> Result<()> {
    let config = super::load_config();

    let mut options = config.picker;
    if let Some(id) = &args.theme {
        options.current_theme = id
            .trim()
            .to_lowercase()
            .parse::<ThemeId>()
            .with_context(|| format!("'{id}' is not a Lumiq theme"))?;
    }
    if args.no_dark_mode {
        options.show_dark_mode = false;
    }

    let picker = super::mounted_picker(&config, options, store_override)?;
    let outcome = tui::run(picker)?;

    println!();
    PreferenceBox::new(outcome.preferences).display();
    println!();

    if !outcome.persisted {
        ui::warn_not_persisted();
    }

    Ok(())
}
