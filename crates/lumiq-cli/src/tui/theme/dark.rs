//! Dark palette derivation.

use lumiq_core::catalog::{Rgb, ThemeRecord};
use ratatui::style::Color;

use super::{color, mix, Palette};

const NIGHT: Rgb = Rgb::from_hex(0x0c0a09);

/// Create the dark palette: a near-black surface tinted by the strong
/// accent, light text taken from the swatch surface.
pub fn palette(record: &ThemeRecord) -> Palette {
    let [surface, soft, strong] = record.swatch;
    let background = mix(NIGHT, strong, 0.12);

    Palette {
        name: format!("{}-dark", record.id),

        background: color(background),
        accent: color(soft),

        border: color(mix(background, soft, 0.4)),
        border_focused: color(soft),
        selection: color(mix(background, strong, 0.35)),

        text_primary: color(surface),
        text_secondary: color(mix(surface, background, 0.3)),
        text_muted: color(mix(surface, background, 0.55)),

        success: Color::LightGreen,
        warning: Color::LightYellow,
    }
}
