//! End-to-end picker scenarios against an on-disk preference file.

mod common;

use lumiq_core::applicator::{ThemeChange, THEME_ATTRIBUTE, VARIANT_ATTRIBUTE};
use lumiq_core::catalog::ThemeId;
use lumiq_core::picker::PickerState;
use lumiq_core::preferences::{PreferenceState, PreferenceStore, DARK_MODE_KEY, THEME_KEY};
use lumiq_core::storage::{FileStore, KeyValueStore};

#[test]
fn test_initial_load_with_empty_storage() {
    let dir = common::create_temp_dir();
    let (mut picker, board) = common::file_picker(&common::prefs_path(&dir));
    let changes = common::record_changes(&mut picker);

    let prefs = picker.mount();

    assert_eq!(prefs, PreferenceState::new(ThemeId::Parchment, false));
    assert_eq!(board.theme(), Some(ThemeId::Parchment));
    assert!(!board.is_dark());
    assert_eq!(board.snapshot().attribute(VARIANT_ATTRIBUTE), None);
    assert_eq!(
        *changes.borrow(),
        vec![ThemeChange {
            theme: ThemeId::Parchment,
            dark_mode: false
        }]
    );
}

#[test]
fn test_user_selects_ocean() {
    let dir = common::create_temp_dir();
    let path = common::prefs_path(&dir);
    let (mut picker, board) = common::file_picker(&path);
    picker.mount();
    let changes = common::record_changes(&mut picker);

    picker.open();
    picker.select(ThemeId::Ocean);

    assert_eq!(board.snapshot().attribute(THEME_ATTRIBUTE), Some("ocean"));
    assert_eq!(picker.state(), PickerState::Closed);
    assert_eq!(
        *changes.borrow(),
        vec![ThemeChange {
            theme: ThemeId::Ocean,
            dark_mode: false
        }]
    );

    let stored = FileStore::new(&path);
    assert_eq!(stored.get(THEME_KEY).unwrap().as_deref(), Some("ocean"));
    assert_eq!(stored.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
}

#[test]
fn test_dark_mode_toggled_twice() {
    let dir = common::create_temp_dir();
    let (mut picker, board) = common::file_picker(&common::prefs_path(&dir));
    let initial = picker.mount();
    let changes = common::record_changes(&mut picker);

    picker.toggle_dark_mode();
    picker.toggle_dark_mode();

    assert_eq!(picker.preferences(), initial);
    assert!(!board.is_dark());
    let values: Vec<bool> = changes.borrow().iter().map(|c| c.dark_mode).collect();
    assert_eq!(values, vec![true, false]);
}

#[test]
fn test_preference_survives_restart() {
    let dir = common::create_temp_dir();
    let path = common::prefs_path(&dir);

    {
        let (mut picker, _) = common::file_picker(&path);
        picker.mount();
        picker.select(ThemeId::Festival);
        picker.toggle_dark_mode();
    }

    let (mut picker, board) = common::file_picker(&path);
    let prefs = picker.mount();

    assert_eq!(prefs, PreferenceState::new(ThemeId::Festival, true));
    assert_eq!(board.theme(), Some(ThemeId::Festival));
    assert!(board.is_dark());
}

#[test]
fn test_unknown_stored_theme_is_sanitized() {
    let dir = common::create_temp_dir();
    let path = common::prefs_path(&dir);
    let mut raw = FileStore::new(&path);
    raw.set(THEME_KEY, "midnight").unwrap();
    raw.set(DARK_MODE_KEY, "yes").unwrap();

    let (mut picker, board) = common::file_picker(&path);
    let prefs = picker.mount();

    assert_eq!(prefs, PreferenceState::new(ThemeId::Parchment, false));
    assert_eq!(board.theme(), Some(ThemeId::Parchment));
}

#[test]
fn test_corrupt_file_falls_back_and_is_repaired_on_save() {
    let dir = common::create_temp_dir();
    let path = common::prefs_path(&dir);
    std::fs::write(&path, "garbage").unwrap();

    let (mut picker, board) = common::file_picker(&path);
    assert_eq!(picker.mount().selected_theme, ThemeId::Parchment);
    assert_eq!(board.theme(), Some(ThemeId::Parchment));

    // The corrupt document cannot be read back, so the write fails too.
    picker.select(ThemeId::Garden);
    assert!(!picker.is_persisted());
    assert_eq!(board.theme(), Some(ThemeId::Garden));

    std::fs::remove_file(&path).unwrap();
    picker.select(ThemeId::Garden);
    assert!(picker.is_persisted());
}

#[test]
fn test_save_load_roundtrip_through_file() {
    let dir = common::create_temp_dir();
    let mut prefs = PreferenceStore::new(FileStore::new(common::prefs_path(&dir)));

    for theme in ThemeId::ALL {
        for dark_mode in [true, false] {
            let state = PreferenceState::new(theme, dark_mode);
            prefs.save(&state).unwrap();
            assert_eq!(prefs.load().unwrap(), state);
        }
    }
}
