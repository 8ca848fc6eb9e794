//! Theme preference persistence.
//!
//! A preference is the selected theme plus the dark-mode flag, stored as two
//! scalar values under fixed keys. Loading sanitizes what it finds: a missing
//! or unknown theme id becomes the default theme, and the dark flag is on
//! only for the literal string `"true"`.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ThemeId};
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key holding the selected theme id.
pub const THEME_KEY: &str = "lumiq-theme";

/// Storage key holding the dark-mode flag (`"true"` or `"false"`).
pub const DARK_MODE_KEY: &str = "lumiq-dark-mode";

/// The user's theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    /// Selected catalog theme
    pub selected_theme: ThemeId,
    /// Whether the dark variant is active
    pub dark_mode: bool,
}

impl PreferenceState {
    /// Create a state with the given values.
    #[must_use]
    pub const fn new(selected_theme: ThemeId, dark_mode: bool) -> Self {
        Self {
            selected_theme,
            dark_mode,
        }
    }
}

/// Reads and writes [`PreferenceState`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    store: S,
    default_theme: ThemeId,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Create a preference store falling back to the catalog's primary theme.
    pub fn new(store: S) -> Self {
        Self::with_default_theme(store, catalog::default_theme().id)
    }

    /// Create a preference store with an explicit fallback theme.
    pub fn with_default_theme(store: S, default_theme: ThemeId) -> Self {
        Self {
            store,
            default_theme,
        }
    }

    /// The theme used when nothing valid is stored.
    pub fn default_theme(&self) -> ThemeId {
        self.default_theme
    }

    /// State returned when nothing is stored.
    pub fn default_state(&self) -> PreferenceState {
        PreferenceState::new(self.default_theme, false)
    }

    /// Load the stored preference.
    ///
    /// Invalid stored values are sanitized rather than reported. Only a
    /// failing backend produces an error.
    pub fn load(&self) -> Result<PreferenceState> {
        let theme = self.store.get(THEME_KEY)?;
        let dark_mode = self.store.get(DARK_MODE_KEY)?;

        let selected_theme = match theme.as_deref() {
            Some(id) => catalog::find_theme(id).map_or_else(
                || {
                    tracing::debug!("Ignoring unknown stored theme '{}'", id);
                    self.default_theme
                },
                |record| record.id,
            ),
            None => self.default_theme,
        };

        Ok(PreferenceState {
            selected_theme,
            dark_mode: dark_mode.as_deref() == Some("true"),
        })
    }

    /// Load the stored preference, falling back to defaults on failure.
    ///
    /// Failures are logged at warn level and never reach the caller.
    pub fn load_or_default(&self) -> PreferenceState {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme preferences: {}", e);
            self.default_state()
        })
    }

    /// Write both values of `state`.
    pub fn save(&mut self, state: &PreferenceState) -> Result<()> {
        self.store.set(THEME_KEY, state.selected_theme.as_str())?;
        self.store
            .set(DARK_MODE_KEY, if state.dark_mode { "true" } else { "false" })
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the preference store and return the backend.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStore;

    fn store_with(entries: &[(&str, &str)]) -> PreferenceStore<MemoryStore> {
        let mut backend = MemoryStore::new();
        for (key, value) in entries {
            backend.set(key, value).unwrap();
        }
        PreferenceStore::new(backend)
    }

    #[test]
    fn test_load_empty_returns_defaults() {
        let prefs = store_with(&[]);
        let state = prefs.load().unwrap();

        assert_eq!(state, PreferenceState::new(ThemeId::Parchment, false));
    }

    #[test]
    fn test_load_unknown_theme_falls_back() {
        let prefs = store_with(&[(THEME_KEY, "neon"), (DARK_MODE_KEY, "true")]);
        let state = prefs.load().unwrap();

        assert_eq!(state.selected_theme, ThemeId::Parchment);
        assert!(state.dark_mode);
    }

    #[test]
    fn test_load_unknown_theme_uses_configured_default() {
        let mut backend = MemoryStore::new();
        backend.set(THEME_KEY, "OCEAN").unwrap();
        let prefs = PreferenceStore::with_default_theme(backend, ThemeId::Mist);

        assert_eq!(prefs.load().unwrap().selected_theme, ThemeId::Mist);
    }

    #[test]
    fn test_dark_mode_only_for_literal_true() {
        for raw in ["TRUE", "1", "yes", "", " true", "false"] {
            let prefs = store_with(&[(DARK_MODE_KEY, raw)]);
            assert!(!prefs.load().unwrap().dark_mode, "{raw:?} should be off");
        }

        let prefs = store_with(&[(DARK_MODE_KEY, "true")]);
        assert!(prefs.load().unwrap().dark_mode);
    }

    #[test]
    fn test_save_then_load_roundtrips_every_pair() {
        let mut prefs = PreferenceStore::new(MemoryStore::new());

        for theme in ThemeId::ALL {
            for dark_mode in [false, true] {
                let state = PreferenceState::new(theme, dark_mode);
                prefs.save(&state).unwrap();
                assert_eq!(prefs.load().unwrap(), state);
            }
        }
    }

    #[test]
    fn test_save_writes_string_literals() {
        let mut prefs = PreferenceStore::new(MemoryStore::new());
        prefs
            .save(&PreferenceState::new(ThemeId::Ember, true))
            .unwrap();

        let backend = prefs.store();
        assert_eq!(backend.get(THEME_KEY).unwrap().as_deref(), Some("ember"));
        assert_eq!(backend.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_load_reports_backend_failure() {
        let prefs = PreferenceStore::new(MemoryStore::disabled());
        assert!(matches!(prefs.load(), Err(Error::StorageUnavailable(_))));
    }

    #[test]
    fn test_load_or_default_swallows_failure() {
        let prefs =
            PreferenceStore::with_default_theme(MemoryStore::disabled(), ThemeId::Garden);
        assert_eq!(
            prefs.load_or_default(),
            PreferenceState::new(ThemeId::Garden, false)
        );
    }

    #[test]
    fn test_save_reports_quota_failure() {
        let mut prefs = PreferenceStore::new(MemoryStore::with_quota(4));
        let err = prefs
            .save(&PreferenceState::new(ThemeId::Ocean, false))
            .unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded { .. }));
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let json = serde_json::to_value(PreferenceState::new(ThemeId::Sunlit, true)).unwrap();
        assert_eq!(json["selectedTheme"], "sunlit");
        assert_eq!(json["darkMode"], true);
    }
}
