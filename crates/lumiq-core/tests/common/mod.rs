//! Common test utilities for `Lumiq` integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use lumiq_core::applicator::{Applicator, MarkerBoard, ThemeChange};
use lumiq_core::config::PickerConfig;
use lumiq_core::picker::PickerController;
use lumiq_core::storage::FileStore;

/// Create a temporary directory for test files.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Path of the preference file inside `dir`.
pub fn prefs_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("preferences.json")
}

/// A picker over a file store at `path`, with its own marker board.
pub fn file_picker(path: &Path) -> (PickerController<FileStore>, MarkerBoard) {
    let board = MarkerBoard::new();
    let picker = PickerController::new(
        PickerConfig::default(),
        FileStore::new(path),
        Applicator::new(board.clone()),
    );
    (picker, board)
}

/// Record every change the picker broadcasts.
pub fn record_changes<S: lumiq_core::storage::KeyValueStore>(
    picker: &mut PickerController<S>,
) -> Rc<RefCell<Vec<ThemeChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    picker.subscribe(move |change| sink.borrow_mut().push(*change));
    log
}
