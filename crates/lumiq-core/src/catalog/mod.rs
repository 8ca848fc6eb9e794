//! Theme catalog.
//!
//! The catalog is a fixed, ordered list of the ten Lumiq themes. It is
//! reference data: built at compile time, never mutated, ids unique. The
//! first entry is the primary theme and the default when nothing else is
//! chosen.
//!
//! ## Example
//!
//! ```rust
//! use lumiq_core::catalog::{self, ThemeId};
//!
//! let ocean = catalog::find_theme("ocean").unwrap();
//! assert_eq!(ocean.id, ThemeId::Ocean);
//! assert_eq!(catalog::list_themes().len(), 10);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

mod themes;

pub use themes::THEMES;

/// Identifier of a catalog theme.
///
/// The set is closed: every value names exactly one [`ThemeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Scholar's desk
    #[default]
    Parchment,
    /// Growth metaphor
    Garden,
    /// Playful clarity
    Sunlit,
    /// Flow state
    Ocean,
    /// Human story
    Terra,
    /// Classroom board
    Chalk,
    /// Focused intensity
    Ember,
    /// Wonder space
    Cosmos,
    /// Gentle clarity
    Mist,
    /// Global celebration
    Festival,
}

impl ThemeId {
    /// All theme ids in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Parchment,
        Self::Garden,
        Self::Sunlit,
        Self::Ocean,
        Self::Terra,
        Self::Chalk,
        Self::Ember,
        Self::Cosmos,
        Self::Mist,
        Self::Festival,
    ];

    /// The stable string id, as written to storage and markers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parchment => "parchment",
            Self::Garden => "garden",
            Self::Sunlit => "sunlit",
            Self::Ocean => "ocean",
            Self::Terra => "terra",
            Self::Chalk => "chalk",
            Self::Ember => "ember",
            Self::Cosmos => "cosmos",
            Self::Mist => "mist",
            Self::Festival => "festival",
        }
    }

    /// The catalog record for this id.
    #[must_use]
    pub fn record(self) -> &'static ThemeRecord {
        &THEMES[self.position()]
    }

    /// Index of this id in catalog order.
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = Error;

    /// Parse an exact catalog id. Case and whitespace are significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Channels as a tuple.
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A theme in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    /// Stable identifier
    pub id: ThemeId,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub tagline: &'static str,
    /// Suitability label
    pub best_for: &'static str,
    /// Representative colors: surface, soft accent, strong accent
    pub swatch: [Rgb; 3],
    /// Icon glyph
    pub emoji: &'static str,
}

impl ThemeRecord {
    /// Index of this record in catalog order.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.id.position()
    }
}

/// All themes in catalog order.
#[must_use]
pub fn list_themes() -> &'static [ThemeRecord] {
    &THEMES
}

/// Look a theme up by its exact string id.
#[must_use]
pub fn find_theme(id: &str) -> Option<&'static ThemeRecord> {
    THEMES.iter().find(|theme| theme.id.as_str() == id)
}

/// The primary theme: the first catalog entry.
#[must_use]
pub fn default_theme() -> &'static ThemeRecord {
    &THEMES[0]
}
