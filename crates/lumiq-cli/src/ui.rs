//! UI utilities for Lumiq CLI.

use crossterm::style::{Color, Stylize};
use lumiq_core::catalog::{Rgb, ThemeRecord};
use lumiq_core::PreferenceState;

const BOX_WIDTH: usize = 41;

/// Render a swatch as three colored blocks.
pub fn swatch(record: &ThemeRecord) -> String {
    record
        .swatch
        .iter()
        .map(|color| format!("{}", "██".with(to_color(*color))))
        .collect()
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// One line of `lumiq list` output.
pub fn theme_row(record: &ThemeRecord, current: bool) -> String {
    let marker = if current { "▸" } else { " " };
    let name = if current {
        format!("{:<10}", record.name).bold().to_string()
    } else {
        format!("{:<10}", record.name)
    };

    format!(
        "  {} {} {} {}  {:<10} {}",
        marker,
        record.emoji,
        name,
        swatch(record),
        record.id,
        record.best_for.dark_grey()
    )
}

/// A boxed summary of the current preference.
pub struct PreferenceBox<'a> {
    prefs: PreferenceState,
    note: Option<&'a str>,
}

impl<'a> PreferenceBox<'a> {
    /// Create a summary box.
    #[must_use]
    pub const fn new(prefs: PreferenceState) -> Self {
        Self { prefs, note: None }
    }

    /// Add a line below the summary.
    #[must_use]
    pub const fn with_note(mut self, note: &'a str) -> Self {
        self.note = Some(note);
        self
    }

    /// Display the box to stdout.
    pub fn display(&self) {
        let record = self.prefs.selected_theme.record();
        let theme_line = format!("{} {}", record.emoji, record.name);
        let dark_line = format!(
            "Dark mode: {}",
            if self.prefs.dark_mode { "on" } else { "off" }
        );

        println!("  ┌{}┐", "─".repeat(BOX_WIDTH));
        println!("  │{}│", " ".repeat(BOX_WIDTH));
        println!("  │{}│", center_in_box(&theme_line, BOX_WIDTH));
        println!("  │{}│", center_in_box(record.tagline, BOX_WIDTH));
        println!("  │{}│", center_in_box(&dark_line, BOX_WIDTH));
        println!("  │{}│", " ".repeat(BOX_WIDTH));

        if let Some(note) = self.note {
            println!("  │{}│", center_in_box(note, BOX_WIDTH));
            println!("  │{}│", " ".repeat(BOX_WIDTH));
        }

        println!("  └{}┘", "─".repeat(BOX_WIDTH));
    }
}

fn center_in_box(content: &str, width: usize) -> String {
    let content_len = content.chars().count();
    let padding = width.saturating_sub(content_len);
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

/// Print a warning that the last change was not saved.
pub fn warn_not_persisted() {
    eprintln!(
        "  {} preference applied but could not be saved; it will not survive a restart",
        "warning:".yellow()
    );
}
