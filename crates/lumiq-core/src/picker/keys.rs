//! Keys the picker understands.

/// A key press, independent of the terminal or toolkit delivering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerKey {
    /// Activate: open the picker or select the focused theme
    Enter,
    /// Same as [`PickerKey::Enter`]
    Space,
    /// Close the picker
    Escape,
    /// Focus previous entry
    Up,
    /// Focus next entry
    Down,
    /// Focus previous entry
    Left,
    /// Focus next entry
    Right,
    /// Focus first entry
    Home,
    /// Focus last entry
    End,
    /// Toggle dark mode (when the toggle is shown)
    DarkModeShortcut,
}

impl PickerKey {
    /// Map a character key. Only `d`/`D` means anything to the picker.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Space),
            'd' | 'D' => Some(Self::DarkModeShortcut),
            _ => None,
        }
    }
}
