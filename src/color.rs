/// Color utilities
///
/// This module handles every color the content documents can name:
/// - Named palette shades (`"teal-500"`, `"accent-600"`)
/// - Literal sRGB hex strings (`"#22c55e"`)
///
/// Both forms are parsed once at load time into a `Shade`, so an unknown
/// color name is a content error rather than a silent fallback at render time.

use iced::Color;
use serde::Deserialize;
use thiserror::Error;

/// Palette families and their 400/500/600/700 levels (sRGB, 0xRRGGBB)
///
/// `accent` is the site's brand hue and mirrors blue.
const PALETTE: &[(&str, [u32; 4])] = &[
    ("slate", [0x94a3b8, 0x64748b, 0x475569, 0x334155]),
    ("red", [0xf87171, 0xef4444, 0xdc2626, 0xb91c1c]),
    ("orange", [0xfb923c, 0xf97316, 0xea580c, 0xc2410c]),
    ("amber", [0xfbbf24, 0xf59e0b, 0xd97706, 0xb45309]),
    ("yellow", [0xfacc15, 0xeab308, 0xca8a04, 0xa16207]),
    ("green", [0x4ade80, 0x22c55e, 0x16a34a, 0x15803d]),
    ("emerald", [0x34d399, 0x10b981, 0x059669, 0x047857]),
    ("teal", [0x2dd4bf, 0x14b8a6, 0x0d9488, 0x0f766e]),
    ("cyan", [0x22d3ee, 0x06b6d4, 0x0891b2, 0x0e7490]),
    ("blue", [0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8]),
    ("accent", [0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8]),
    ("indigo", [0x818cf8, 0x6366f1, 0x4f46e5, 0x4338ca]),
    ("purple", [0xc084fc, 0xa855f7, 0x9333ea, 0x7e22ce]),
    ("pink", [0xf472b6, 0xec4899, 0xdb2777, 0xbe185d]),
];

/// Levels available per family, index-aligned with `PALETTE`
const LEVELS: [u16; 4] = [400, 500, 600, 700];

/// Error produced when a color string names nothing we know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShadeError {
    #[error("unknown palette shade `{0}`")]
    UnknownShade(String),

    #[error("malformed hex color `{0}` (expected #rrggbb)")]
    MalformedHex(String),
}

/// A resolved sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Shade {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Shade {
    /// Build from a packed 0xRRGGBB value
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Look up a palette shade such as `slate-400`
    pub fn named(family: &str, level: u16) -> Option<Self> {
        let column = LEVELS.iter().position(|&l| l == level)?;
        PALETTE
            .iter()
            .find(|(name, _)| *name == family)
            .map(|(_, levels)| Self::from_hex(levels[column]))
    }

    /// Parse either `#rrggbb` or `family-level`
    pub fn parse(input: &str) -> Result<Self, ShadeError> {
        if let Some(hex) = input.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(ShadeError::MalformedHex(input.to_string()));
            }
            return u32::from_str_radix(hex, 16)
                .map(Self::from_hex)
                .map_err(|_| ShadeError::MalformedHex(input.to_string()));
        }

        let (family, level) = input
            .rsplit_once('-')
            .ok_or_else(|| ShadeError::UnknownShade(input.to_string()))?;
        let level: u16 = level
            .parse()
            .map_err(|_| ShadeError::UnknownShade(input.to_string()))?;

        Self::named(family, level).ok_or_else(|| ShadeError::UnknownShade(input.to_string()))
    }

    /// Opaque iced color
    pub fn color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }

    /// Translucent iced color (tinted card backgrounds, glows)
    pub fn alpha(self, alpha: f32) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, alpha)
    }
}

impl TryFrom<String> for Shade {
    type Error = ShadeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Fixed shades the chrome itself uses
pub mod chrome {
    use super::Shade;

    pub const SLATE_950: Shade = Shade::from_hex(0x020617);
    pub const SLATE_900: Shade = Shade::from_hex(0x0f172a);
    pub const SLATE_800: Shade = Shade::from_hex(0x1e293b);
    pub const SLATE_700: Shade = Shade::from_hex(0x334155);
    pub const SLATE_500: Shade = Shade::from_hex(0x64748b);
    pub const SLATE_400: Shade = Shade::from_hex(0x94a3b8);
    pub const SLATE_300: Shade = Shade::from_hex(0xcbd5e1);
    pub const SLATE_200: Shade = Shade::from_hex(0xe2e8f0);
    pub const ACCENT_400: Shade = Shade::from_hex(0x60a5fa);
    pub const ACCENT_500: Shade = Shade::from_hex(0x3b82f6);
    pub const ACCENT_600: Shade = Shade::from_hex(0x2563eb);
    pub const TEAL_400: Shade = Shade::from_hex(0x2dd4bf);
    pub const TEAL_500: Shade = Shade::from_hex(0x14b8a6);
    pub const GREEN_400: Shade = Shade::from_hex(0x4ade80);
    pub const GREEN_500: Shade = Shade::from_hex(0x22c55e);
    pub const AMBER_400: Shade = Shade::from_hex(0xfbbf24);
    pub const RED_400: Shade = Shade::from_hex(0xf87171);
    pub const WHITE: Shade = Shade::from_hex(0xffffff);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_shade() {
        assert_eq!(Shade::parse("amber-500").unwrap(), Shade::from_hex(0xf59e0b));
        assert_eq!(Shade::parse("indigo-700").unwrap(), Shade::from_hex(0x4338ca));
        assert_eq!(Shade::parse("accent-500").unwrap(), Shade::parse("blue-500").unwrap());
    }

    #[test]
    fn test_parse_hex() {
        let shade = Shade::parse("#00a651").unwrap();
        assert_eq!((shade.r, shade.g, shade.b), (0x00, 0xa6, 0x51));
    }

    #[test]
    fn test_rejects_unknown() {
        assert_eq!(
            Shade::parse("mauve-500"),
            Err(ShadeError::UnknownShade("mauve-500".into()))
        );
        assert_eq!(
            Shade::parse("blue-950"),
            Err(ShadeError::UnknownShade("blue-950".into()))
        );
        assert!(matches!(Shade::parse("#12345"), Err(ShadeError::MalformedHex(_))));
        assert!(matches!(Shade::parse("#zzzzzz"), Err(ShadeError::MalformedHex(_))));
        assert!(matches!(Shade::parse("teal"), Err(ShadeError::UnknownShade(_))));
    }

    #[test]
    fn test_deserialize_through_serde() {
        let shades: Vec<Shade> = serde_json::from_str(r##"["green-500", "#ffffff"]"##).unwrap();
        assert_eq!(shades[1], chrome::WHITE);

        let err = serde_json::from_str::<Vec<Shade>>(r#"["sepia-400"]"#).unwrap_err();
        assert!(err.to_string().contains("sepia-400"));
    }
}
