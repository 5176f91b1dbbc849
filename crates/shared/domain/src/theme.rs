//! Creative theme catalog and user preference shapes.
//!
//! The catalog is a closed enumeration: resolution code matches on
//! [`CreativeTheme`] exhaustively. The "unrecognized id" fallback only exists
//! at the string-parse boundary, because persisted preference values arrive as
//! untrusted strings.

use crate::constants::{DYSLEXIA_FRIENDLY, HIGH_CONTRAST, LARGE_TEXT};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Light/dark rendering mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum_macros::Display, strum_macros::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Which color modes a creative theme can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSupport {
    /// The theme ships both a light and a dark variant.
    DualMode,
    /// The theme only exists in dark; the stored mode preference is overridden
    /// (but never rewritten) while the theme is active.
    DarkOnly,
}

/// Syntax-highlight theme names for each color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightPair {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Static metadata for one catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub mode_support: ModeSupport,
    /// Representative swatch colors for the theme picker.
    pub swatch: [&'static str; 3],
    pub highlight: HighlightPair,
}

/// The fixed set of creative themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CreativeTheme {
    RetroTerminal,
    MinimalInk,
    OceanGlass,
    MidnightNeon,
}

impl CreativeTheme {
    pub const ALL: [Self; 4] = [Self::RetroTerminal, Self::MinimalInk, Self::OceanGlass, Self::MidnightNeon];

    /// Parses a persisted theme id. Unknown ids yield `None` (fail-open).
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }

    #[must_use]
    pub const fn definition(self) -> &'static ThemeDefinition {
        match self {
            Self::RetroTerminal => &RETRO_TERMINAL,
            Self::MinimalInk => &MINIMAL_INK,
            Self::OceanGlass => &OCEAN_GLASS,
            Self::MidnightNeon => &MIDNIGHT_NEON,
        }
    }

    #[must_use]
    pub const fn mode_support(self) -> ModeSupport {
        self.definition().mode_support
    }
}

const RETRO_TERMINAL: ThemeDefinition = ThemeDefinition {
    id: "retro-terminal",
    label: "Retro Terminal",
    description: "Phosphor-green console nostalgia on a near-black background.",
    mode_support: ModeSupport::DarkOnly,
    swatch: ["#0d1117", "#33ff66", "#1c4f2d"],
    highlight: HighlightPair { light: "vitesse-dark", dark: "vitesse-dark" },
};

const MINIMAL_INK: ThemeDefinition = ThemeDefinition {
    id: "minimal-ink",
    label: "Minimal Ink",
    description: "Monochrome typography with generous whitespace.",
    mode_support: ModeSupport::DualMode,
    swatch: ["#ffffff", "#141414", "#8a8a8a"],
    highlight: HighlightPair { light: "min-light", dark: "min-dark" },
};

const OCEAN_GLASS: ThemeDefinition = ThemeDefinition {
    id: "ocean-glass",
    label: "Ocean Glass",
    description: "Soft pastel blues with translucent panel accents.",
    mode_support: ModeSupport::DualMode,
    swatch: ["#e8f4fd", "#1e3a5f", "#7cc4e8"],
    highlight: HighlightPair { light: "catppuccin-latte", dark: "catppuccin-mocha" },
};

const MIDNIGHT_NEON: ThemeDefinition = ThemeDefinition {
    id: "midnight-neon",
    label: "Midnight Neon",
    description: "Electric magenta and cyan over deep violet.",
    mode_support: ModeSupport::DarkOnly,
    swatch: ["#13111c", "#ff2e97", "#29d8ff"],
    highlight: HighlightPair { light: "tokyo-night", dark: "tokyo-night" },
};

bitflags! {
    /// Independently toggleable accessibility adjustments.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AccessModes: u32 {
        const DYSLEXIA_FRIENDLY = 1 << 0;
        const HIGH_CONTRAST = 1 << 1;
        const LARGE_TEXT = 1 << 2;

        const ALL = Self::DYSLEXIA_FRIENDLY.bits() | Self::HIGH_CONTRAST.bits() | Self::LARGE_TEXT.bits();
    }
}

impl From<&str> for AccessModes {
    fn from(s: &str) -> Self {
        match s {
            DYSLEXIA_FRIENDLY => Self::DYSLEXIA_FRIENDLY,
            HIGH_CONTRAST => Self::HIGH_CONTRAST,
            LARGE_TEXT => Self::LARGE_TEXT,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl AccessModes {
    /// Identifiers of the active modes, in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::DYSLEXIA_FRIENDLY) {
            names.push(DYSLEXIA_FRIENDLY);
        }
        if self.contains(Self::HIGH_CONTRAST) {
            names.push(HIGH_CONTRAST);
        }
        if self.contains(Self::LARGE_TEXT) {
            names.push(LARGE_TEXT);
        }
        names
    }

    /// Builds a set from persisted identifiers; unknown names are ignored.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names.into_iter().map(Self::from).fold(Self::empty(), |acc, m| acc | m)
    }
}

impl Serialize for AccessModes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccessModes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_names(names.iter().map(String::as_str)))
    }
}

/// One row of the accessibility-mode catalog shown in the theme picker.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessModeInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const ACCESS_MODE_CATALOG: [AccessModeInfo; 3] = [
    AccessModeInfo {
        id: DYSLEXIA_FRIENDLY,
        label: "Dyslexia friendly",
        description: "Switches body copy to a dyslexia-friendly typeface.",
    },
    AccessModeInfo {
        id: HIGH_CONTRAST,
        label: "High contrast",
        description: "Raises foreground/background contrast across the page.",
    },
    AccessModeInfo {
        id: LARGE_TEXT,
        label: "Large text",
        description: "Scales the base font size up for readability.",
    },
];

/// User-chosen presentation state, persisted client-side.
///
/// `theme` carries the raw persisted id rather than a parsed [`CreativeTheme`]
/// so that stale or hand-edited values degrade silently instead of failing
/// deserialization.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePreference {
    pub theme: Option<String>,
    pub mode: ColorMode,
    pub access: AccessModes,
}

/// The outcome of theme resolution: what actually renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveTheme {
    pub mode: ColorMode,
    pub highlight: &'static str,
}

/// Fully resolved rendering configuration, derived from a site configuration
/// plus a theme preference. Ephemeral; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRenderingConfig {
    pub mode: ColorMode,
    pub highlight_theme: String,
    pub logo: String,
}
