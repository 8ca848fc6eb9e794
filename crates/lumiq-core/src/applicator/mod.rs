//! Theme application.
//!
//! The [`Applicator`] is the only writer of the presentation markers. Every
//! apply overwrites the markers and then notifies observers, synchronously
//! and in registration order. Components that react to theme changes
//! subscribe here instead of polling the markers.

mod markers;

pub use markers::{
    MarkerBoard, Markers, DARK_VARIANT, THEME_ATTRIBUTE, VARIANT_ATTRIBUTE,
};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ThemeId;

/// Notification emitted after every apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChange {
    /// Applied theme
    pub theme: ThemeId,
    /// Whether the dark variant is active
    pub dark_mode: bool,
}

/// Handle returned by [`Applicator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ThemeChange)>;

/// Writes presentation markers and broadcasts [`ThemeChange`]s.
pub struct Applicator {
    board: MarkerBoard,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Applicator {
    /// Create an applicator writing to `board`.
    pub fn new(board: MarkerBoard) -> Self {
        Self {
            board,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Create an applicator writing to the process-wide board.
    pub fn global() -> Self {
        Self::new(MarkerBoard::global().clone())
    }

    /// The board this applicator writes to.
    pub fn board(&self) -> &MarkerBoard {
        &self.board
    }

    /// Set the markers for `theme` and `dark_mode`, then notify observers.
    pub fn apply(&mut self, theme: ThemeId, dark_mode: bool) {
        self.board.set(theme, dark_mode);
        tracing::debug!(theme = %theme, dark_mode, "Applied theme");

        let change = ThemeChange { theme, dark_mode };
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }

    /// Register `observer` to be called after every apply.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for Applicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Applicator")
            .field("board", &self.board)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_apply_sets_theme_marker_for_every_theme() {
        let mut applicator = Applicator::new(MarkerBoard::new());

        for theme in ThemeId::ALL {
            for dark_mode in [false, true] {
                applicator.apply(theme, dark_mode);
                assert_eq!(applicator.board().theme(), Some(theme));
                assert_eq!(applicator.board().is_dark(), dark_mode);
            }
        }
    }

    #[test]
    fn test_dark_variant_attribute_presence() {
        let mut applicator = Applicator::new(MarkerBoard::new());

        applicator.apply(ThemeId::Ocean, true);
        assert_eq!(
            applicator.board().snapshot().attribute(VARIANT_ATTRIBUTE),
            Some(DARK_VARIANT)
        );

        applicator.apply(ThemeId::Ocean, false);
        assert_eq!(
            applicator.board().snapshot().attribute(VARIANT_ATTRIBUTE),
            None
        );
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut applicator = Applicator::new(MarkerBoard::new());
        let calls = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            applicator.subscribe(move |change| calls.borrow_mut().push((label, *change)));
        }

        applicator.apply(ThemeId::Chalk, true);

        let expected = ThemeChange {
            theme: ThemeId::Chalk,
            dark_mode: true,
        };
        assert_eq!(
            *calls.borrow(),
            vec![("first", expected), ("second", expected), ("third", expected)]
        );
    }

    #[test]
    fn test_observer_sees_markers_already_set() {
        let board = MarkerBoard::new();
        let mut applicator = Applicator::new(board.clone());
        let seen = Rc::new(RefCell::new(None));

        let seen_in = Rc::clone(&seen);
        applicator.subscribe(move |_| *seen_in.borrow_mut() = board.theme());
        applicator.apply(ThemeId::Garden, false);

        assert_eq!(*seen.borrow(), Some(ThemeId::Garden));
    }

    #[test]
    fn test_unsubscribe() {
        let mut applicator = Applicator::new(MarkerBoard::new());
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let id = applicator.subscribe(move |_| *counter.borrow_mut() += 1);
        applicator.apply(ThemeId::Mist, false);

        assert!(applicator.unsubscribe(id));
        assert!(!applicator.unsubscribe(id));
        applicator.apply(ThemeId::Mist, true);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(applicator.observer_count(), 0);
    }

    #[test]
    fn test_change_serializes_like_event_detail() {
        let change = ThemeChange {
            theme: ThemeId::Festival,
            dark_mode: false,
        };
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(json, r#"{"theme":"festival","darkMode":false}"#);
    }
}
