//! Interactive theme picker.
//!
//! # Architecture
//!
//! The TUI is built using `ratatui` and `crossterm`:
//!
//! - `app`: Main loop and terminal setup
//! - `action`: User action types
//! - `event`: Terminal event mapping
//! - `layout`: Picker layout and hit testing
//! - `components`: Trigger, menu, dark mode switch, status bar, help
//! - `theme`: Palettes derived from the active theme's markers

#![allow(clippy::missing_const_for_fn, clippy::option_if_let_else)]

pub mod action;
pub mod app;
pub mod components;
pub mod event;
pub mod layout;
pub mod theme;

use lumiq_core::picker::PickerController;
use lumiq_core::storage::FileStore;
use lumiq_core::PreferenceState;

use app::App;

/// Outcome of an interactive session.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    /// Preference when the picker closed
    pub preferences: PreferenceState,
    /// Whether the last change reached storage
    pub persisted: bool,
}

/// Run the picker until the user quits. The terminal is restored before
/// this returns.
pub fn run(picker: PickerController<FileStore>) -> anyhow::Result<Outcome> {
    let _guard = suppress_logging();

    let mut app = App::new(picker)?;
    app.run()?;

    Ok(Outcome {
        preferences: app.picker().preferences(),
        persisted: app.picker().is_persisted(),
    })
}

/// Suppress console logging to prevent corruption of the TUI's alternate screen buffer.
/// Returns a guard that restores the default subscriber when dropped.
fn suppress_logging() -> tracing::subscriber::DefaultGuard {
    use tracing_subscriber::layer::SubscriberExt;

    let noop_subscriber =
        tracing_subscriber::registry().with(tracing_subscriber::filter::LevelFilter::OFF);

    tracing::subscriber::set_default(noop_subscriber)
}
