//! TUI palette.
//!
//! The picker styles itself from the presentation markers, the same way any
//! other consumer of the active theme would: it reads the marker board and
//! derives terminal colors from the theme's swatch.

use lumiq_core::applicator::Markers;
use lumiq_core::catalog::{self, Rgb, ThemeRecord};
use ratatui::style::Color;

mod dark;
mod light;

/// Colors for the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Theme name
    pub name: String,

    // primary
    /// Background color
    pub background: Color,
    /// Accent color for highlights and focus
    pub accent: Color,

    // UI element
    /// Border color (unfocused)
    pub border: Color,
    /// Border color (focused)
    pub border_focused: Color,
    /// Selection background
    pub selection: Color,

    // text
    /// Primary text color
    pub text_primary: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted/disabled text color
    pub text_muted: Color,

    // semantic
    /// Toggle "on" indicator
    pub success: Color,
    /// Unsaved preference warning
    pub warning: Color,
}

impl Palette {
    /// Light palette for `record`.
    pub fn light(record: &ThemeRecord) -> Self {
        light::palette(record)
    }

    /// Dark palette for `record`.
    pub fn dark(record: &ThemeRecord) -> Self {
        dark::palette(record)
    }

    /// Palette for the current markers. Unset markers use the primary theme.
    pub fn from_markers(markers: &Markers) -> Self {
        let record = markers
            .theme
            .map_or_else(catalog::default_theme, lumiq_core::ThemeId::record);

        if markers.dark_variant {
            Self::dark(record)
        } else {
            Self::light(record)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_markers(&Markers::default())
    }
}

/// Convert a catalog color.
pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Blend `from` toward `to` by `amount` in `0.0..=1.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mix(from: Rgb, to: Rgb, amount: f32) -> Rgb {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| {
        (f32::from(b) - f32::from(a))
            .mul_add(amount, f32::from(a))
            .round() as u8
    };

    Rgb {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiq_core::ThemeId;

    #[test]
    fn test_from_markers_follows_variant() {
        let light = Palette::from_markers(&Markers {
            theme: Some(ThemeId::Ocean),
            dark_variant: false,
        });
        let dark = Palette::from_markers(&Markers {
            theme: Some(ThemeId::Ocean),
            dark_variant: true,
        });

        assert_eq!(light.name, "ocean");
        assert_eq!(dark.name, "ocean-dark");
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn test_unset_markers_use_primary_theme() {
        assert_eq!(Palette::default().name, "parchment");
    }

    #[test]
    fn test_mix_endpoints() {
        let black = Rgb::from_hex(0x000000);
        let white = Rgb::from_hex(0xffffff);

        assert_eq!(mix(black, white, 0.0), black);
        assert_eq!(mix(black, white, 1.0), white);
        assert_eq!(mix(black, white, 0.5), Rgb::from_hex(0x808080));
        assert_eq!(mix(black, white, 3.0), white);
    }
}
