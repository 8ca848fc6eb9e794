//! Theme picker controller.
//!
//! The controller owns the picker's open/closed state, the in-memory
//! preference and keyboard focus, and drives the [`Applicator`] and the
//! [`PreferenceStore`] in response to user events.
//!
//! # State machine
//!
//! ```text
//!            open / toggle
//!   Closed ─────────────────▶ Open
//!      ▲                        │
//!      └────────────────────────┘
//!   close / toggle / select / outside interaction
//! ```
//!
//! Dark-mode toggles never change the open/closed state. Storage failures
//! are logged and leave the in-memory preference authoritative.

mod keys;

pub use keys::PickerKey;

use std::time::Instant;

use crate::announce::LiveRegion;
use crate::applicator::{Applicator, SubscriptionId, ThemeChange};
use crate::catalog::{self, ThemeId, ThemeRecord};
use crate::config::PickerConfig;
use crate::error::{Error, Result};
use crate::preferences::{PreferenceState, PreferenceStore};
use crate::storage::KeyValueStore;

/// Whether the theme list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    /// Only the trigger is visible
    #[default]
    Closed,
    /// The theme list is visible
    Open,
}

/// The picker controller.
#[derive(Debug)]
pub struct PickerController<S> {
    options: PickerConfig,
    store: PreferenceStore<S>,
    applicator: Applicator,
    live_region: LiveRegion,
    prefs: PreferenceState,
    state: PickerState,
    focus: usize,
    persisted: bool,
    #[cfg(test)]
    transitions: usize,
}

impl<S: KeyValueStore> PickerController<S> {
    /// Create a controller.
    ///
    /// `options.current_theme` is the initial theme and the fallback for
    /// missing or unknown stored values. Nothing is loaded or applied until
    /// [`mount`](Self::mount).
    pub fn new(options: PickerConfig, store: S, applicator: Applicator) -> Self {
        let store = PreferenceStore::with_default_theme(store, options.current_theme);
        let prefs = store.default_state();

        Self {
            options,
            store,
            applicator,
            live_region: LiveRegion::default(),
            prefs,
            state: PickerState::Closed,
            focus: options.current_theme.position(),
            persisted: true,
            #[cfg(test)]
            transitions: 0,
        }
    }

    /// Replace the live region, e.g. to change its time-to-live.
    #[must_use]
    pub fn with_live_region(mut self, live_region: LiveRegion) -> Self {
        self.live_region = live_region;
        self
    }

    /// Load the saved preference and apply it.
    pub fn mount(&mut self) -> PreferenceState {
        self.prefs = self.store.load_or_default();
        self.focus = self.prefs.selected_theme.position();
        tracing::debug!(
            theme = %self.prefs.selected_theme,
            dark_mode = self.prefs.dark_mode,
            "Mounted theme picker"
        );
        self.applicator
            .apply(self.prefs.selected_theme, self.prefs.dark_mode);
        self.prefs
    }

    /// Current open/closed state.
    pub const fn state(&self) -> PickerState {
        self.state
    }

    /// Whether the theme list is showing.
    pub fn is_open(&self) -> bool {
        self.state == PickerState::Open
    }

    /// In-memory preference.
    pub const fn preferences(&self) -> PreferenceState {
        self.prefs
    }

    /// Record of the selected theme.
    pub fn current_theme(&self) -> &'static ThemeRecord {
        self.prefs.selected_theme.record()
    }

    /// Whether dark mode is on.
    pub const fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    /// Embedder options.
    pub const fn options(&self) -> &PickerConfig {
        &self.options
    }

    /// Whether the dark-mode toggle is shown.
    pub const fn shows_dark_mode(&self) -> bool {
        self.options.show_dark_mode
    }

    /// Catalog index of the focused entry.
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Record of the focused entry.
    pub fn focused_theme(&self) -> &'static ThemeRecord {
        &catalog::list_themes()[self.focus]
    }

    /// Whether the last save reached storage.
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// The applicator, for reading markers.
    pub const fn applicator(&self) -> &Applicator {
        &self.applicator
    }

    /// Register a theme change observer.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.applicator.subscribe(observer)
    }

    /// Remove a theme change observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.applicator.unsubscribe(id)
    }

    /// The live region holding announcements.
    pub const fn live_region(&self) -> &LiveRegion {
        &self.live_region
    }

    /// Most recent announcement still live at `now`.
    pub fn announcement(&self, now: Instant) -> Option<&str> {
        self.live_region
            .latest(now)
            .map(|entry| entry.message.as_str())
    }

    /// Borrow the preference store.
    pub const fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    /// Open the theme list, focusing the selected theme.
    pub fn open(&mut self) {
        if self.state == PickerState::Open {
            return;
        }
        self.focus = self.prefs.selected_theme.position();
        self.transition(PickerState::Open);
    }

    /// Close the theme list.
    pub fn close(&mut self) {
        if self.state == PickerState::Closed {
            return;
        }
        self.transition(PickerState::Closed);
    }

    /// Open when closed, close when open.
    pub fn toggle(&mut self) {
        match self.state {
            PickerState::Closed => self.open(),
            PickerState::Open => self.close(),
        }
    }

    /// Handle an interaction outside the picker.
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Select `theme`: apply, persist, close and announce.
    pub fn select(&mut self, theme: ThemeId) {
        self.prefs.selected_theme = theme;
        self.focus = theme.position();
        self.applicator.apply(theme, self.prefs.dark_mode);
        self.persist();
        self.close();
        self.live_region
            .announce(format!("Theme changed to {}", theme.record().name));
    }

    /// Select a theme by its string id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTheme`] if `id` is not in the catalog. Nothing
    /// changes in that case.
    pub fn select_by_id(&mut self, id: &str) -> Result<()> {
        let record = catalog::find_theme(id).ok_or_else(|| Error::UnknownTheme(id.to_string()))?;
        self.select(record.id);
        Ok(())
    }

    /// Flip dark mode: apply, persist and announce. The open/closed state is
    /// left alone.
    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        self.applicator
            .apply(self.prefs.selected_theme, self.prefs.dark_mode);
        self.persist();
        self.live_region.announce(if self.prefs.dark_mode {
            "Dark mode enabled"
        } else {
            "Dark mode disabled"
        });
    }

    /// Set dark mode to `enabled`. Returns whether anything changed.
    pub fn set_dark_mode(&mut self, enabled: bool) -> bool {
        if self.prefs.dark_mode == enabled {
            return false;
        }
        self.toggle_dark_mode();
        true
    }

    /// Move focus to the next entry, wrapping at the end.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % catalog::list_themes().len();
    }

    /// Move focus to the previous entry, wrapping at the start.
    pub fn focus_prev(&mut self) {
        let len = catalog::list_themes().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Focus the entry at `index`, clamped to the catalog.
    pub fn focus_at(&mut self, index: usize) {
        self.focus = index.min(catalog::list_themes().len() - 1);
    }

    /// Handle a key press. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: PickerKey) -> bool {
        if key == PickerKey::DarkModeShortcut {
            if !self.options.show_dark_mode {
                return false;
            }
            self.toggle_dark_mode();
            return true;
        }

        match (self.state, key) {
            (PickerState::Closed, PickerKey::Enter | PickerKey::Space) => self.open(),
            (PickerState::Closed, _) => return false,

            (PickerState::Open, PickerKey::Enter | PickerKey::Space) => {
                self.select(self.focused_theme().id);
            }
            (PickerState::Open, PickerKey::Escape) => self.close(),
            (PickerState::Open, PickerKey::Up | PickerKey::Left) => self.focus_prev(),
            (PickerState::Open, PickerKey::Down | PickerKey::Right) => self.focus_next(),
            (PickerState::Open, PickerKey::Home) => self.focus_at(0),
            (PickerState::Open, PickerKey::End) => self.focus_at(usize::MAX),
            (PickerState::Open, PickerKey::DarkModeShortcut) => return false,
        }

        true
    }

    fn transition(&mut self, next: PickerState) {
        tracing::debug!("Picker {:?} -> {:?}", self.state, next);
        self.state = next;
        #[cfg(test)]
        {
            self.transitions += 1;
        }
    }

    fn persist(&mut self) {
        match self.store.save(&self.prefs) {
            Ok(()) => self.persisted = true,
            Err(e) => {
                tracing::warn!("Failed to save theme preferences: {}", e);
                self.persisted = false;
            }
        }
    }
}
