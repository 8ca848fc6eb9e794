//! Set command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use lumiq_core::picker::PickerController;
use lumiq_core::storage::KeyValueStore;

use super::SetArgs;
use crate::ui::{self, PreferenceBox};

/// Run the set command.
///
/// Goes through the same path as a click in the picker: open, select,
/// which applies, persists, closes and announces.
pub fn run(args: &SetArgs, store_override: Option<&PathBuf>) -> Result<()> {
    let config = super::load_config();
    let mut picker = super::mounted_picker(&config, config.picker, store_override)?;

    let announcement = select(&mut picker, &args.theme)?;

    if args.json {
        let output = serde_json::json!({
            "preferences": picker.preferences(),
            "persisted": picker.is_persisted(),
            "announcement": announcement,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    match announcement.as_deref() {
        Some(message) => PreferenceBox::new(picker.preferences())
            .with_note(message)
            .display(),
        None => PreferenceBox::new(picker.preferences()).display(),
    }
    println!();

    if !picker.is_persisted() {
        ui::warn_not_persisted();
    }

    Ok(())
}

/// Select `theme` the way a click would, returning the announcement.
fn select<S: KeyValueStore>(
    picker: &mut PickerController<S>,
    theme: &str,
) -> Result<Option<String>> {
    let id = theme.trim().to_lowercase();
    picker.open();
    picker.select_by_id(&id).with_context(|| {
        format!("'{theme}' is not a Lumiq theme. Run 'lumiq list' to see the available themes.")
    })?;

    Ok(picker
        .announcement(Instant::now())
        .map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mounted_picker;
    use lumiq_core::config::{Config, PickerConfig};
    use lumiq_core::preferences::{DARK_MODE_KEY, THEME_KEY};
    use lumiq_core::storage::FileStore;
    use lumiq_core::ThemeId;
    use tempfile::TempDir;

    #[test]
    fn test_set_ocean_persists_to_store_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let config = Config::default();

        let mut picker = mounted_picker(&config, PickerConfig::default(), Some(&path)).unwrap();
        let announcement = select(&mut picker, " Ocean ").unwrap();

        assert_eq!(announcement.as_deref(), Some("Theme changed to Ocean"));
        assert!(!picker.is_open());
        assert!(picker.is_persisted());

        let stored = FileStore::new(&path);
        assert_eq!(stored.get(THEME_KEY).unwrap().as_deref(), Some("ocean"));
        assert_eq!(stored.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));

        let reloaded = mounted_picker(&config, PickerConfig::default(), Some(&path)).unwrap();
        assert_eq!(reloaded.preferences().selected_theme, ThemeId::Ocean);
    }

    #[test]
    fn test_set_unknown_theme_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut picker =
            mounted_picker(&Config::default(), PickerConfig::default(), Some(&path)).unwrap();
        let err = select(&mut picker, "neon").unwrap_err();

        assert!(err.to_string().contains("'neon' is not a Lumiq theme"));
        assert!(!path.exists());
    }
}
