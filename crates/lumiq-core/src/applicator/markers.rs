//! Process-wide presentation markers.
//!
//! Two markers describe what the styling layer should draw: the active theme
//! id and, only while dark mode is on, the dark variant. They start unset,
//! are written by the first apply and are overwritten by every later one.
//! Nothing tears them down.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde::Serialize;

use crate::catalog::ThemeId;

/// Attribute name carrying the active theme id.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute name present only when the dark variant is active.
pub const VARIANT_ATTRIBUTE: &str = "data-theme-variant";

/// Value of [`VARIANT_ATTRIBUTE`] for the dark variant.
pub const DARK_VARIANT: &str = "dark";

/// A snapshot of the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Markers {
    /// Active theme, `None` until the first apply
    pub theme: Option<ThemeId>,
    /// Whether the dark variant marker is present
    pub dark_variant: bool,
}

impl Markers {
    /// The markers as `(attribute, value)` pairs. Absent markers are omitted.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        let mut attrs = Vec::with_capacity(2);
        if let Some(theme) = self.theme {
            attrs.push((THEME_ATTRIBUTE, theme.as_str()));
        }
        if self.dark_variant {
            attrs.push((VARIANT_ATTRIBUTE, DARK_VARIANT));
        }
        attrs
    }

    /// Value of a single attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'static str> {
        self.attributes()
            .into_iter()
            .find_map(|(attr, value)| (attr == name).then_some(value))
    }
}

/// Shared handle to a set of markers.
///
/// Clones observe the same markers. Readers use the accessors; only the
/// [`Applicator`](super::Applicator) writes.
#[derive(Debug, Clone, Default)]
pub struct MarkerBoard {
    inner: Arc<RwLock<Markers>>,
}

impl MarkerBoard {
    /// Create an isolated board with no markers set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide board.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<MarkerBoard> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Current markers.
    pub fn snapshot(&self) -> Markers {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Active theme, if any apply has happened.
    pub fn theme(&self) -> Option<ThemeId> {
        self.snapshot().theme
    }

    /// Whether the dark variant marker is present.
    pub fn is_dark(&self) -> bool {
        self.snapshot().dark_variant
    }

    /// Current markers as attribute pairs.
    pub fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        self.snapshot().attributes()
    }

    pub(crate) fn set(&self, theme: ThemeId, dark_variant: bool) {
        let mut markers = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        markers.theme = Some(theme);
        markers.dark_variant = dark_variant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_unset() {
        let board = MarkerBoard::new();
        assert_eq!(board.theme(), None);
        assert!(!board.is_dark());
        assert!(board.attributes().is_empty());
    }

    #[test]
    fn test_set_and_clear_variant() {
        let board = MarkerBoard::new();

        board.set(ThemeId::Cosmos, true);
        assert_eq!(
            board.attributes(),
            vec![(THEME_ATTRIBUTE, "cosmos"), (VARIANT_ATTRIBUTE, DARK_VARIANT)]
        );

        board.set(ThemeId::Cosmos, false);
        assert_eq!(board.attributes(), vec![(THEME_ATTRIBUTE, "cosmos")]);
        assert_eq!(board.snapshot().attribute(VARIANT_ATTRIBUTE), None);
    }

    #[test]
    fn test_clones_share_markers() {
        let board = MarkerBoard::new();
        let reader = board.clone();

        board.set(ThemeId::Terra, false);
        assert_eq!(reader.theme(), Some(ThemeId::Terra));
    }

    #[test]
    fn test_global_is_a_single_instance() {
        assert!(std::ptr::eq(MarkerBoard::global(), MarkerBoard::global()));
    }
}
