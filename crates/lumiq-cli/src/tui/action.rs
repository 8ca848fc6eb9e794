//! TUI action types.
//!
//! Actions represent user intents that can be triggered by terminal events
//! and are processed by the application to update the picker.

use lumiq_core::PickerKey;

/// Actions that can be triggered by user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a key to the picker controller
    Picker(PickerKey),
    /// Select the theme at a catalog position
    SelectIndex(usize),
    /// Left click at a terminal cell
    Click {
        /// Column of the click
        column: u16,
        /// Row of the click
        row: u16,
    },
    /// Show or hide the help overlay
    ToggleHelp,
    /// Leave the picker
    Quit,
    /// Nothing to do
    None,
}
