//! TUI layout and hit testing.
//!
//! The picker sits in a row under the header: the trigger on the left and,
//! when shown, the dark mode switch next to it. The open menu drops down
//! over the preview area.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of the trigger button.
const TRIGGER_WIDTH: u16 = 28;
/// Width of the dark mode switch.
const TOGGLE_WIDTH: u16 = 18;
/// Width of the dropdown menu.
const MENU_WIDTH: u16 = 72;

/// Computed layout areas for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    /// Header area (title bar)
    pub header: Rect,
    /// Trigger button
    pub trigger: Rect,
    /// Dark mode switch, if shown
    pub dark_toggle: Option<Rect>,
    /// Theme preview
    pub preview: Rect,
    /// Dropdown menu, if open
    pub menu: Option<Rect>,
    /// Status bar area
    pub status: Rect,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The trigger button
    Trigger,
    /// The dark mode switch
    DarkToggle,
    /// A theme entry, by catalog position
    MenuItem(usize),
    /// The menu frame, between entries
    Menu,
    /// Anywhere outside the picker
    Outside,
}

impl PickerLayout {
    /// Compute the layout for the given terminal size.
    pub fn compute(size: Rect, open: bool, show_dark_mode: bool, entries: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(size);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(TRIGGER_WIDTH),
                Constraint::Length(1),
                Constraint::Length(if show_dark_mode { TOGGLE_WIDTH } else { 0 }),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let preview = rows[2];
        let menu = open.then(|| {
            let height = u16::try_from(entries)
                .unwrap_or(u16::MAX)
                .saturating_add(2)
                .min(preview.height);
            let width = MENU_WIDTH.min(size.width.saturating_sub(controls[1].x));
            Rect::new(controls[1].x, preview.y, width, height)
        });

        Self {
            header: rows[0],
            trigger: controls[1],
            dark_toggle: show_dark_mode.then_some(controls[3]),
            preview,
            menu,
            status: rows[3],
        }
    }

    /// Find what lies under a terminal cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        let position = Position::new(column, row);

        if let Some(menu) = self.menu {
            if menu.contains(position) {
                let inner_top = menu.y + 1;
                let inner_bottom = menu.y + menu.height.saturating_sub(1);
                if row >= inner_top && row < inner_bottom {
                    return Hit::MenuItem(usize::from(row - inner_top));
                }
                return Hit::Menu;
            }
        }

        if self.trigger.contains(position) {
            return Hit::Trigger;
        }

        if self.dark_toggle.is_some_and(|area| area.contains(position)) {
            return Hit::DarkToggle;
        }

        Hit::Outside
    }
}
