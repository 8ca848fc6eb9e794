//! Light palette derivation.

use lumiq_core::catalog::{Rgb, ThemeRecord};
use ratatui::style::Color;

use super::{color, mix, Palette};

const INK: Rgb = Rgb::from_hex(0x1c1917);

/// Create the light palette: the swatch surface as background, dark ink text.
pub fn palette(record: &ThemeRecord) -> Palette {
    let [surface, soft, strong] = record.swatch;

    Palette {
        name: record.id.to_string(),

        background: color(surface),
        accent: color(strong),

        border: color(soft),
        border_focused: color(strong),
        selection: color(mix(surface, soft, 0.45)),

        text_primary: color(INK),
        text_secondary: color(mix(INK, surface, 0.35)),
        text_muted: color(mix(INK, surface, 0.6)),

        success: Color::Green,
        warning: Color::Yellow,
    }
}
