//! Pure theme resolution.
//!
//! All functions here are synchronous, side-effect-free, and cheap enough to
//! call on every request without memoization. The stored preference is never
//! mutated; a dark-only theme overrides the effective mode only.

use phub_domain::constants::{DEFAULT_HIGHLIGHT_DARK, DEFAULT_HIGHLIGHT_LIGHT};
use phub_domain::site::SiteConfig;
use phub_domain::theme::{
    ColorMode, CreativeTheme, EffectiveTheme, ModeSupport, ResolvedRenderingConfig,
    ThemePreference,
};

/// Reports whether a persisted theme id mandates dark mode.
/// `None` and unrecognized ids report `false`.
#[must_use]
pub fn is_forced_dark(theme_id: Option<&str>) -> bool {
    theme_id
        .and_then(CreativeTheme::parse)
        .is_some_and(|theme| theme.mode_support() == ModeSupport::DarkOnly)
}

/// Composes the effective color mode and highlight theme for a preference.
///
/// Unrecognized persisted theme ids silently behave as "no theme selected".
#[must_use]
pub fn resolve_effective_theme(pref: &ThemePreference) -> EffectiveTheme {
    match pref.theme.as_deref().and_then(CreativeTheme::parse) {
        None => EffectiveTheme {
            mode: pref.mode,
            highlight: match pref.mode {
                ColorMode::Light => DEFAULT_HIGHLIGHT_LIGHT,
                ColorMode::Dark => DEFAULT_HIGHLIGHT_DARK,
            },
        },
        Some(theme) => {
            let def = theme.definition();
            match def.mode_support {
                ModeSupport::DarkOnly => {
                    EffectiveTheme { mode: ColorMode::Dark, highlight: def.highlight.dark }
                }
                ModeSupport::DualMode => EffectiveTheme {
                    mode: pref.mode,
                    highlight: match pref.mode {
                        ColorMode::Light => def.highlight.light,
                        ColorMode::Dark => def.highlight.dark,
                    },
                },
            }
        }
    }
}

/// Derives the full rendering configuration from a site record plus the
/// current preference. Recomputed per request; never cached.
#[must_use]
pub fn resolve_rendering_config(
    site: &SiteConfig,
    pref: &ThemePreference,
) -> ResolvedRenderingConfig {
    let effective = resolve_effective_theme(pref);
    let logo = match effective.mode {
        ColorMode::Dark => site.logo_dark.clone(),
        ColorMode::Light => site.logo_light.clone(),
    };

    ResolvedRenderingConfig {
        mode: effective.mode,
        highlight_theme: effective.highlight.to_owned(),
        logo,
    }
}
