//! Catalog entries.

use super::{Rgb, ThemeId, ThemeRecord};

/// The ten Lumiq themes, in display order.
pub static THEMES: [ThemeRecord; 10] = [
    ThemeRecord {
        id: ThemeId::Parchment,
        name: "Parchment",
        tagline: "Scholar's Desk — calm and focused",
        best_for: "Grade 6-12 humanities",
        swatch: [
            Rgb::from_hex(0xf7f0e6),
            Rgb::from_hex(0xc4956a),
            Rgb::from_hex(0x6366f1),
        ],
        emoji: "📜",
    },
    ThemeRecord {
        id: ThemeId::Garden,
        name: "Garden",
        tagline: "Growth metaphor — learning blooms",
        best_for: "Science, Health, PE",
        swatch: [
            Rgb::from_hex(0xf1fdf4),
            Rgb::from_hex(0x6ee7b7),
            Rgb::from_hex(0x059669),
        ],
        emoji: "🌱",
    },
    ThemeRecord {
        id: ThemeId::Sunlit,
        name: "Sunlit",
        tagline: "Playful clarity — bright and joyful",
        best_for: "Pre-K, K-2, Grade 3-5",
        swatch: [
            Rgb::from_hex(0xfffbf0),
            Rgb::from_hex(0xfcd34d),
            Rgb::from_hex(0xf59e0b),
        ],
        emoji: "☀️",
    },
    ThemeRecord {
        id: ThemeId::Ocean,
        name: "Ocean",
        tagline: "Flow state — deep concentration",
        best_for: "Physics, Geography, Math",
        swatch: [
            Rgb::from_hex(0xf0f9ff),
            Rgb::from_hex(0x7dd3fc),
            Rgb::from_hex(0x0284c7),
        ],
        emoji: "🌊",
    },
    ThemeRecord {
        id: ThemeId::Terra,
        name: "Terra",
        tagline: "Human story — warm and editorial",
        best_for: "History, Social Studies",
        swatch: [
            Rgb::from_hex(0xfff5f2),
            Rgb::from_hex(0xe8856a),
            Rgb::from_hex(0xc45536),
        ],
        emoji: "🏺",
    },
    ThemeRecord {
        id: ThemeId::Chalk,
        name: "Chalk",
        tagline: "Classroom board — familiar and structured",
        best_for: "All subjects K-8",
        swatch: [
            Rgb::from_hex(0xf7faf0),
            Rgb::from_hex(0x86efac),
            Rgb::from_hex(0x4d7c0f),
        ],
        emoji: "✏️",
    },
    ThemeRecord {
        id: ThemeId::Ember,
        name: "Ember",
        tagline: "Focused intensity — exam preparation",
        best_for: "SAT, ACT, AP prep",
        swatch: [
            Rgb::from_hex(0xfafaf9),
            Rgb::from_hex(0xfed7aa),
            Rgb::from_hex(0xea580c),
        ],
        emoji: "🔥",
    },
    ThemeRecord {
        id: ThemeId::Cosmos,
        name: "Cosmos",
        tagline: "Wonder space — curiosity and exploration",
        best_for: "Astronomy, Physics",
        swatch: [
            Rgb::from_hex(0xfdfcfb),
            Rgb::from_hex(0xc4b5fd),
            Rgb::from_hex(0x7c3aed),
        ],
        emoji: "✨",
    },
    ThemeRecord {
        id: ThemeId::Mist,
        name: "Mist",
        tagline: "Gentle clarity — minimal and focused",
        best_for: "Reading, essay writing",
        swatch: [
            Rgb::from_hex(0xf8fafc),
            Rgb::from_hex(0x94a3b8),
            Rgb::from_hex(0x0e7490),
        ],
        emoji: "🌫️",
    },
    ThemeRecord {
        id: ThemeId::Festival,
        name: "Festival",
        tagline: "Global celebration — vibrant and welcoming",
        best_for: "Onboarding, achievements",
        swatch: [
            Rgb::from_hex(0xfff8f0),
            Rgb::from_hex(0xfb923c),
            Rgb::from_hex(0xbe185d),
        ],
        emoji: "🎉",
    },
];
