//! Dark command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use lumiq_core::picker::PickerController;
use lumiq_core::storage::KeyValueStore;

use super::{DarkArgs, DarkMode};
use crate::ui;

/// Run the dark command.
pub fn run(args: &DarkArgs, store_override: Option<&PathBuf>) -> Result<()> {
    let config = super::load_config();
    let mut picker = super::mounted_picker(&config, config.picker, store_override)?;

    let changed = apply(&mut picker, args.mode);

    if args.json {
        let output = serde_json::json!({
            "preferences": picker.preferences(),
            "changed": changed,
            "persisted": picker.is_persisted(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if changed {
        if let Some(message) = picker.announcement(Instant::now()) {
            println!("  {message}");
        }
    } else {
        println!(
            "  Dark mode is already {}",
            if picker.dark_mode() { "on" } else { "off" }
        );
    }

    if !picker.is_persisted() {
        ui::warn_not_persisted();
    }

    Ok(())
}

/// Apply `mode`. Returns whether dark mode changed.
fn apply<S: KeyValueStore>(picker: &mut PickerController<S>, mode: DarkMode) -> bool {
    match mode {
        DarkMode::On => picker.set_dark_mode(true),
        DarkMode::Off => picker.set_dark_mode(false),
        DarkMode::Toggle => {
            picker.toggle_dark_mode();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mounted_picker;
    use lumiq_core::config::{Config, PickerConfig};
    use lumiq_core::preferences::DARK_MODE_KEY;
    use lumiq_core::storage::FileStore;
    use tempfile::TempDir;

    #[test]
    fn test_dark_on_twice_reports_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let config = Config::default();

        let mut picker = mounted_picker(&config, PickerConfig::default(), Some(&path)).unwrap();
        assert!(apply(&mut picker, DarkMode::On));
        assert_eq!(
            picker.announcement(Instant::now()),
            Some("Dark mode enabled")
        );

        let mut again = mounted_picker(&config, PickerConfig::default(), Some(&path)).unwrap();
        assert!(again.dark_mode());
        assert!(!apply(&mut again, DarkMode::On));
        assert!(again.dark_mode());

        let stored = FileStore::new(&path);
        assert_eq!(stored.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_toggle_always_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut picker =
            mounted_picker(&Config::default(), PickerConfig::default(), Some(&path)).unwrap();
        assert!(apply(&mut picker, DarkMode::Toggle));
        assert!(apply(&mut picker, DarkMode::Toggle));
        assert!(!picker.dark_mode());
        assert!(!apply(&mut picker, DarkMode::Off));
    }
}
